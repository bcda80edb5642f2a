use serde::{Deserialize, Serialize};
use strum::EnumString;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TrendPoint {
    #[schema(example = "Mon")]
    pub label: String,
    #[schema(example = 7)]
    pub attendance: u32,
}

impl TrendPoint {
    pub fn new(label: impl Into<String>, attendance: u32) -> Self {
        TrendPoint {
            label: label.into(),
            attendance,
        }
    }
}

/// Tabs of the attendance trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Serialize, Deserialize, ToSchema)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TrendPeriod {
    Weekly,
    Monthly,
    Custom,
}
