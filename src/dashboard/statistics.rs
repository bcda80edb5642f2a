use serde::Serialize;
use utoipa::ToSchema;

use crate::model::employee::{EmployeeRecord, EmployeeRow};
use crate::model::status::EmployeeStatus;

/// Head counts shown on the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
pub struct StatusCounts {
    #[schema(example = 8)]
    pub total: usize,
    #[schema(example = 5)]
    pub working: usize,
    #[schema(example = 2)]
    pub on_break: usize,
    #[schema(example = 1)]
    pub clocked_out: usize,
}

impl StatusCounts {
    /// Records with an unrecognized status only count towards `total`.
    pub fn tally(records: &[EmployeeRecord]) -> Self {
        records.iter().fold(
            StatusCounts {
                total: records.len(),
                ..StatusCounts::default()
            },
            |mut counts, record| {
                match record.status {
                    EmployeeStatus::Working => counts.working += 1,
                    EmployeeStatus::OnBreak => counts.on_break += 1,
                    EmployeeStatus::ClockedOut => counts.clocked_out += 1,
                    EmployeeStatus::Other(_) => {}
                }
                counts
            },
        )
    }
}

/// Keeps records whose name or client contains `query`, ignoring case.
pub fn filter_records<'a>(records: &'a [EmployeeRecord], query: &str) -> Vec<&'a EmployeeRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            needle.is_empty()
                || record.name.to_lowercase().contains(&needle)
                || record.client.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Everything the dashboard page needs for one render.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardView {
    /// Counts over the whole store, unaffected by the search query
    pub counts: StatusCounts,
    /// Number of rows after filtering
    #[schema(example = 8)]
    pub filtered_count: usize,
    pub employees: Vec<EmployeeRow>,
}

impl DashboardView {
    pub fn build(records: &[EmployeeRecord], query: &str) -> Self {
        let employees: Vec<EmployeeRow> = filter_records(records, query)
            .into_iter()
            .cloned()
            .map(EmployeeRow::from)
            .collect();

        DashboardView {
            counts: StatusCounts::tally(records),
            filtered_count: employees.len(),
            employees,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::employee::AttendanceBreakdown;
    use crate::repository::fixture_employees;

    fn record(id: u64, name: &str, status: EmployeeStatus, client: &str) -> EmployeeRecord {
        EmployeeRecord {
            id,
            name: name.to_string(),
            status,
            client: client.to_string(),
            clock_in: "N/A".to_string(),
            working_time: "0h 0m".to_string(),
            attendance: AttendanceBreakdown::default(),
        }
    }

    #[test]
    fn tally_adds_up_to_total() {
        let mut records = fixture_employees().to_vec();
        records.push(record(9, "Ivy Park", EmployeeStatus::Other("Remote".into()), "N/A"));

        let counts = StatusCounts::tally(&records);
        assert_eq!(counts.total, records.len());
        assert_eq!(counts.working + counts.on_break + counts.clocked_out + 1, counts.total);
    }

    #[test]
    fn empty_collection_yields_zeroes() {
        assert_eq!(StatusCounts::tally(&[]), StatusCounts::default());
        assert!(filter_records(&[], "anything").is_empty());
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let records = fixture_employees();
        let filtered = filter_records(&records, "");
        let ids: Vec<u64> = filtered.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let records = fixture_employees();
        assert_eq!(filter_records(&records, "alice"), filter_records(&records, "ALICE"));
        assert_eq!(filter_records(&records, "alice").len(), 1);
    }

    #[test]
    fn filter_matches_client_as_well_as_name() {
        let records = fixture_employees();
        let names: Vec<&str> = filter_records(&records, "acme")
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alice Johnson", "Grace Chen"]);
    }

    #[test]
    fn filter_is_idempotent() {
        let records = fixture_employees();
        let once: Vec<EmployeeRecord> = filter_records(&records, "tech")
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<EmployeeRecord> = filter_records(&once, "tech")
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn two_record_scenario() {
        let records = vec![
            record(1, "Ann", EmployeeStatus::Working, "Acme"),
            record(2, "Bo", EmployeeStatus::ClockedOut, "N/A"),
        ];

        let view = DashboardView::build(&records, "ann");
        assert_eq!(view.filtered_count, 1);
        assert_eq!(view.employees[0].record.name, "Ann");
        assert_eq!(
            view.counts,
            StatusCounts {
                total: 2,
                working: 1,
                on_break: 0,
                clocked_out: 1,
            }
        );
    }
}
