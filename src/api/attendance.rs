use std::str::FromStr;
use std::sync::Arc;

use actix_web::{HttpResponse, http::header::ContentDisposition, web};
use chrono::{Local, NaiveDate, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utoipa::{IntoParams, ToSchema};

use crate::config::Config;
use crate::dashboard::report::{self, REPORT_CONTENT_TYPE};
use crate::dashboard::statistics::{DashboardView, filter_records};
use crate::dashboard::trends::{self, CUSTOM_RANGE_HINT};
use crate::error::AppError;
use crate::model::employee::EmployeeRow;
use crate::model::trend::{TrendPeriod, TrendPoint};
use crate::repository::EmployeeRepository;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Matches employee name or client, case-insensitive
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RangeQuery {
    /// Start of the custom range
    #[param(value_type = Option<String>, example = "2026-01-01")]
    pub from: Option<String>,
    /// End of the custom range
    #[param(value_type = Option<String>, example = "2026-01-07")]
    pub to: Option<String>,
}

impl RangeQuery {
    pub fn dates(&self) -> Result<(Option<NaiveDate>, Option<NaiveDate>), AppError> {
        Ok((
            parse_optional_date("from", self.from.as_deref())?,
            parse_optional_date("to", self.to.as_deref())?,
        ))
    }
}

/// An unpicked date arrives as an empty value and counts as unset.
fn parse_optional_date(field: &str, raw: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                AppError::BadRequest(format!("Invalid {field} date: {value}, expected YYYY-MM-DD"))
            }),
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TrendResponse {
    #[schema(example = "weekly")]
    pub period: TrendPeriod,
    pub points: Vec<TrendPoint>,
    /// Set when the custom chart cannot be drawn yet
    #[schema(nullable = true)]
    pub hint: Option<String>,
}

/// Dashboard counters and the filtered employee table
#[utoipa::path(
    get,
    path = "/api/attendance/dashboard",
    params(SearchQuery),
    responses(
        (status = 200, description = "Counters over all employees plus the filtered rows", body = DashboardView),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn get_dashboard(
    repo: web::Data<Arc<dyn EmployeeRepository>>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, AppError> {
    let employees = repo.list_employees()?;
    let search = query.search.as_deref().unwrap_or("");

    let view = DashboardView::build(&employees, search);
    debug!(search, total = view.counts.total, matched = view.filtered_count, "Built dashboard view");

    Ok(HttpResponse::Ok().json(view))
}

/// Filtered employee table rows
#[utoipa::path(
    get,
    path = "/api/attendance/employees",
    params(SearchQuery),
    responses(
        (status = 200, description = "Employees matching the search, in store order", body = [EmployeeRow]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn list_employees(
    repo: web::Data<Arc<dyn EmployeeRepository>>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, AppError> {
    let employees = repo.list_employees()?;
    let search = query.search.as_deref().unwrap_or("");

    let rows: Vec<EmployeeRow> = filter_records(&employees, search)
        .into_iter()
        .cloned()
        .map(EmployeeRow::from)
        .collect();
    Ok(HttpResponse::Ok().json(rows))
}

/// Attendance trend series for one chart tab
#[utoipa::path(
    get,
    path = "/api/attendance/trends/{period}",
    params(
        ("period" = String, Path, description = "weekly, monthly or custom"),
        RangeQuery
    ),
    responses(
        (status = 200, description = "Trend series", body = TrendResponse),
        (status = 400, description = "Unknown period or malformed date", body = Object, example = json!({
            "error": "Unknown trend period: yearly"
        }))
    ),
    tag = "Attendance"
)]
pub async fn get_trends(
    config: web::Data<Config>,
    path: web::Path<String>,
    query: web::Query<RangeQuery>,
) -> Result<HttpResponse, AppError> {
    let raw = path.into_inner();
    let period = TrendPeriod::from_str(&raw)
        .map_err(|_| AppError::BadRequest(format!("Unknown trend period: {raw}")))?;
    let (from, to) = query.dates()?;

    let points = match config.trend_seed {
        Some(seed) => trends::series(period, from, to, &mut StdRng::seed_from_u64(seed)),
        None => trends::series(period, from, to, &mut rand::thread_rng()),
    };

    let hint = (period == TrendPeriod::Custom && points.is_empty())
        .then(|| CUSTOM_RANGE_HINT.to_string());

    Ok(HttpResponse::Ok().json(TrendResponse {
        period,
        points,
        hint,
    }))
}

/// Download the plain-text attendance report
#[utoipa::path(
    get,
    path = "/api/attendance/report",
    responses(
        (status = 200, description = "Report served as a text/plain attachment", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn download_report(
    repo: web::Data<Arc<dyn EmployeeRepository>>,
) -> Result<HttpResponse, AppError> {
    let employees = repo.list_employees()?;

    let body = report::format_report(&employees, Local::now().naive_local());
    let filename = report::report_filename(Utc::now().date_naive());
    info!(%filename, employees = employees.len(), "Generated attendance report");

    Ok(HttpResponse::Ok()
        .content_type(REPORT_CONTENT_TYPE)
        .insert_header(ContentDisposition::attachment(filename))
        .body(body))
}
