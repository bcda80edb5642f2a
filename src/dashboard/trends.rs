use chrono::NaiveDate;
use rand::Rng;

use crate::model::trend::{TrendPeriod, TrendPoint};

const WEEKLY: [(&str, u32); 7] = [
    ("Mon", 7),
    ("Tue", 8),
    ("Wed", 6),
    ("Thu", 8),
    ("Fri", 7),
    ("Sat", 3),
    ("Sun", 2),
];

const MONTHLY: [(&str, u32); 4] = [("Week 1", 35), ("Week 2", 38), ("Week 3", 33), ("Week 4", 40)];

pub const CUSTOM_RANGE_DAYS: usize = 7;
pub const CUSTOM_RANGE_MIN: u32 = 4;
pub const CUSTOM_RANGE_MAX: u32 = 8;

/// Shown instead of the custom chart until both dates are picked.
pub const CUSTOM_RANGE_HINT: &str = "Please select both start and end dates to view the chart";

pub fn weekly() -> Vec<TrendPoint> {
    WEEKLY
        .iter()
        .map(|(label, attendance)| TrendPoint::new(*label, *attendance))
        .collect()
}

pub fn monthly() -> Vec<TrendPoint> {
    MONTHLY
        .iter()
        .map(|(label, attendance)| TrendPoint::new(*label, *attendance))
        .collect()
}

/// Mock series for a picked date range.
///
/// Only the presence of both dates matters: the span itself does not shape
/// the series, and reversed ranges are accepted.
pub fn custom_range<R: Rng + ?Sized>(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    rng: &mut R,
) -> Vec<TrendPoint> {
    if from.is_none() || to.is_none() {
        return Vec::new();
    }

    (1..=CUSTOM_RANGE_DAYS)
        .map(|day| {
            TrendPoint::new(
                format!("Day {day}"),
                rng.gen_range(CUSTOM_RANGE_MIN..=CUSTOM_RANGE_MAX),
            )
        })
        .collect()
}

pub fn series<R: Rng + ?Sized>(
    period: TrendPeriod,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    rng: &mut R,
) -> Vec<TrendPoint> {
    match period {
        TrendPeriod::Weekly => weekly(),
        TrendPeriod::Monthly => monthly(),
        TrendPeriod::Custom => custom_range(from, to, rng),
    }
}
