use chrono::{NaiveDate, NaiveDateTime};

use crate::dashboard::statistics::StatusCounts;
use crate::model::employee::EmployeeRecord;

const HEAVY_RULE_WIDTH: usize = 60;
const LIGHT_RULE_WIDTH: usize = 40;

/// `10/19/2026, 9:05:03 AM`
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

pub const REPORT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Renders the plain-text attendance report.
///
/// Summary counts are tallied from `records` here, never passed in, so the
/// document always agrees with its own detail section.
pub fn format_report(records: &[EmployeeRecord], generated_at: NaiveDateTime) -> String {
    let counts = StatusCounts::tally(records);
    let heavy = "=".repeat(HEAVY_RULE_WIDTH);
    let light = "─".repeat(LIGHT_RULE_WIDTH);

    let details: String = records
        .iter()
        .map(|emp| {
            format!(
                "\nName: {}\nStatus: {}\nClient: {}\nClock In: {}\nWorking Time: {}\n{}",
                emp.name, emp.status, emp.client, emp.clock_in, emp.working_time, light
            )
        })
        .collect();

    format!(
        "
ATTENDANCE REPORT
Generated: {generated}
{heavy}

SUMMARY
-------
Total Employees: {total}
Currently Working: {working}
On Break: {on_break}
Clocked Out: {clocked_out}

EMPLOYEE DETAILS
----------------
{details}

{heavy}
End of Report
  ",
        generated = generated_at.format(TIMESTAMP_FORMAT),
        total = counts.total,
        working = counts.working,
        on_break = counts.on_break,
        clocked_out = counts.clocked_out,
    )
}

pub fn report_filename(date: NaiveDate) -> String {
    format!("attendance-report-{}.txt", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::status::EmployeeStatus;
    use crate::repository::fixture_employees;

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|d| d.and_hms_opt(9, 5, 3))
            .unwrap()
    }

    fn summary_value(report: &str, label: &str) -> usize {
        report
            .lines()
            .find_map(|line| line.strip_prefix(label))
            .and_then(|rest| rest.trim().parse().ok())
            .unwrap()
    }

    #[test]
    fn empty_collection_still_renders() {
        let report = format_report(&[], generated_at());

        let expected = format!(
            "\nATTENDANCE REPORT\nGenerated: 10/19/2026, 9:05:03 AM\n{rule}\n\nSUMMARY\n-------\n\
             Total Employees: 0\nCurrently Working: 0\nOn Break: 0\nClocked Out: 0\n\n\
             EMPLOYEE DETAILS\n----------------\n\n\n{rule}\nEnd of Report\n  ",
            rule = "=".repeat(60)
        );
        assert_eq!(report, expected);
    }

    #[test]
    fn summary_matches_independent_tally() {
        let records = fixture_employees();
        let report = format_report(&records, generated_at());

        let tally = |status: EmployeeStatus| records.iter().filter(|r| r.status == status).count();
        assert_eq!(summary_value(&report, "Total Employees:"), records.len());
        assert_eq!(
            summary_value(&report, "Currently Working:"),
            tally(EmployeeStatus::Working)
        );
        assert_eq!(summary_value(&report, "On Break:"), tally(EmployeeStatus::OnBreak));
        assert_eq!(
            summary_value(&report, "Clocked Out:"),
            tally(EmployeeStatus::ClockedOut)
        );
    }

    #[test]
    fn details_follow_input_order() {
        let records = fixture_employees();
        let report = format_report(&records, generated_at());

        let names: Vec<&str> = report
            .lines()
            .filter_map(|line| line.strip_prefix("Name: "))
            .collect();
        let expected: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, expected);
        assert_eq!(report.matches(&"─".repeat(40)).count(), records.len());
    }

    #[test]
    fn detail_block_layout() {
        let records = fixture_employees();
        let report = format_report(&records[3..4], generated_at());

        let block = format!(
            "\nName: David Lee\nStatus: Clocked Out\nClient: N/A\nClock In: N/A\nWorking Time: 0h 0m\n{}\n",
            "─".repeat(40)
        );
        assert!(report.contains(&block));
    }

    #[test]
    fn afternoon_timestamp_uses_twelve_hour_clock() {
        let at = NaiveDate::from_ymd_opt(2026, 1, 2)
            .and_then(|d| d.and_hms_opt(15, 0, 9))
            .unwrap();
        let report = format_report(&[], at);
        assert!(report.contains("Generated: 1/2/2026, 3:00:09 PM\n"));
    }

    #[test]
    fn filename_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(report_filename(date), "attendance-report-2026-03-07.txt");
    }
}
