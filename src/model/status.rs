use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumString;
use utoipa::ToSchema;

/// Where an employee currently is in their working day.
///
/// Text that matches none of the known labels is kept verbatim in `Other`
/// so that it still shows up in totals and reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EmployeeStatus {
    #[strum(serialize = "Working")]
    Working,
    #[strum(serialize = "On Break")]
    OnBreak,
    #[strum(serialize = "Clocked Out")]
    ClockedOut,
    #[strum(default)]
    Other(String),
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &str {
        match self {
            EmployeeStatus::Working => "Working",
            EmployeeStatus::OnBreak => "On Break",
            EmployeeStatus::ClockedOut => "Clocked Out",
            EmployeeStatus::Other(raw) => raw,
        }
    }

    pub fn badge_variant(&self) -> BadgeVariant {
        match self {
            EmployeeStatus::Working => BadgeVariant::Default,
            EmployeeStatus::OnBreak => BadgeVariant::Secondary,
            EmployeeStatus::ClockedOut => BadgeVariant::Destructive,
            EmployeeStatus::Other(_) => BadgeVariant::Default,
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for EmployeeStatus {
    fn from(raw: String) -> Self {
        // the `default` variant makes parsing infallible
        EmployeeStatus::from_str(&raw).unwrap_or(EmployeeStatus::Other(raw))
    }
}

impl From<EmployeeStatus> for String {
    fn from(status: EmployeeStatus) -> Self {
        match status {
            EmployeeStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Badge emphasis used by the dashboard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
}
