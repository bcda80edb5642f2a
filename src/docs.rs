use crate::api::attendance::TrendResponse;
use crate::dashboard::statistics::{DashboardView, StatusCounts};
use crate::model::employee::{AttendanceBreakdown, EmployeeRecord, EmployeeRow};
use crate::model::status::BadgeVariant;
use crate::model::trend::{TrendPeriod, TrendPoint};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Dashboard API",
        version = "1.0.0",
        description = r#"
## Time Logs & Attendance

Backs the HR attendance dashboard with display-ready data.

### 🔹 Key Features
- **Summary counters**
  - Total, currently working, on break and clocked out employees
- **Employee table**
  - Case-insensitive search over employee name and client
  - Badge variant per status
- **Attendance trends**
  - Weekly, monthly and custom-range series for the chart tabs
- **Report export**
  - Plain-text report served as `attendance-report-YYYY-MM-DD.txt`

---
Built with **Rust**, **Actix Web** and **Utoipa**.
"#,
    ),
    paths(
        crate::api::attendance::get_dashboard,
        crate::api::attendance::list_employees,
        crate::api::attendance::get_trends,
        crate::api::attendance::download_report,

        crate::api::health::health
    ),
    components(
        schemas(
            DashboardView,
            StatusCounts,
            EmployeeRecord,
            EmployeeRow,
            AttendanceBreakdown,
            BadgeVariant,
            TrendPeriod,
            TrendPoint,
            TrendResponse
        )
    ),
    tags(
        (name = "Attendance", description = "Attendance dashboard APIs"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;
