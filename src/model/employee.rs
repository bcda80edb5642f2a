use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::status::{BadgeVariant, EmployeeStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "Alice Johnson",
        "status": "Working",
        "client": "Acme Corp",
        "clock_in": "09:00 AM",
        "working_time": "3h 45m",
        "attendance": { "attended": 70, "late": 15, "absent": 5, "leave": 10 }
    })
)]
pub struct EmployeeRecord {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "Alice Johnson")]
    pub name: String,

    #[schema(example = "Working", value_type = String)]
    pub status: EmployeeStatus,

    /// "N/A" when the employee is not clocked in
    #[schema(example = "Acme Corp")]
    pub client: String,

    #[schema(example = "09:00 AM")]
    pub clock_in: String,

    #[schema(example = "3h 45m")]
    pub working_time: String,

    pub attendance: AttendanceBreakdown,
}

/// Percentage split of an employee's attendance history.
///
/// The four shares are expected to add up to 100 but nothing enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct AttendanceBreakdown {
    #[schema(example = 70)]
    pub attended: u32,
    #[schema(example = 15)]
    pub late: u32,
    #[schema(example = 5)]
    pub absent: u32,
    #[schema(example = 10)]
    pub leave: u32,
}

impl AttendanceBreakdown {
    pub const EXPECTED_TOTAL: u64 = 100;

    /// Summed in `u64` so seed data with huge shares cannot overflow.
    pub fn total(&self) -> u64 {
        [self.attended, self.late, self.absent, self.leave]
            .iter()
            .map(|share| u64::from(*share))
            .sum()
    }

    pub fn is_balanced(&self) -> bool {
        self.total() == Self::EXPECTED_TOTAL
    }
}

/// A table row as the dashboard shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EmployeeRow {
    #[serde(flatten)]
    pub record: EmployeeRecord,
    pub badge: BadgeVariant,
}

impl From<EmployeeRecord> for EmployeeRow {
    fn from(record: EmployeeRecord) -> Self {
        let badge = record.status.badge_variant();
        EmployeeRow { record, badge }
    }
}
