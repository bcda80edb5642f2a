use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use tracing::{info, warn};

use crate::config::Config;
use crate::model::employee::{AttendanceBreakdown, EmployeeRecord};
use crate::model::status::EmployeeStatus;

/// Read access to the employee records behind the dashboard.
pub trait EmployeeRepository: Send + Sync {
    fn list_employees(&self) -> Result<Vec<EmployeeRecord>>;
}

/// Records loaded once at start-up and never modified afterwards.
#[derive(Debug, Clone)]
pub struct InMemoryEmployeeRepository {
    records: Arc<Vec<EmployeeRecord>>,
}

impl InMemoryEmployeeRepository {
    pub fn new(records: Vec<EmployeeRecord>) -> Self {
        for record in records.iter().filter(|r| !r.attendance.is_balanced()) {
            warn!(
                employee_id = record.id,
                total = record.attendance.total(),
                "Attendance breakdown does not add up to 100"
            );
        }

        Self {
            records: Arc::new(records),
        }
    }

    pub fn with_fixture() -> Self {
        Self::new(fixture_employees().to_vec())
    }

    /// Loads a JSON array of employee records.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read employee seed file {}", path.display()))?;
        let records: Vec<EmployeeRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("invalid employee seed file {}", path.display()))?;

        Ok(Self::new(records))
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn list_employees(&self) -> Result<Vec<EmployeeRecord>> {
        Ok(self.records.as_ref().clone())
    }
}

pub fn init_repository(config: &Config) -> Result<Arc<dyn EmployeeRepository>> {
    let repository = match &config.employee_seed_file {
        Some(path) => {
            let repo = InMemoryEmployeeRepository::from_json_file(path)?;
            info!(path = %path.display(), count = repo.records.len(), "Loaded employee seed file");
            repo
        }
        None => {
            info!("Using built-in employee fixture");
            InMemoryEmployeeRepository::with_fixture()
        }
    };

    Ok(Arc::new(repository))
}

fn employee(
    id: u64,
    name: &str,
    status: EmployeeStatus,
    client: &str,
    clock_in: &str,
    working_time: &str,
    [attended, late, absent, leave]: [u32; 4],
) -> EmployeeRecord {
    EmployeeRecord {
        id,
        name: name.to_string(),
        status,
        client: client.to_string(),
        clock_in: clock_in.to_string(),
        working_time: working_time.to_string(),
        attendance: AttendanceBreakdown {
            attended,
            late,
            absent,
            leave,
        },
    }
}

static FIXTURE: Lazy<Vec<EmployeeRecord>> = Lazy::new(|| {
    use EmployeeStatus::*;

    vec![
        employee(1, "Alice Johnson", Working, "Acme Corp", "09:00 AM", "3h 45m", [70, 15, 5, 10]),
        employee(2, "Bob Smith", OnBreak, "TechStart Inc", "08:45 AM", "4h 0m", [65, 20, 10, 5]),
        employee(3, "Carol Martinez", Working, "Global Systems", "08:30 AM", "4h 15m", [80, 10, 5, 5]),
        employee(4, "David Lee", ClockedOut, "N/A", "N/A", "0h 0m", [55, 25, 15, 5]),
        employee(5, "Emma Wilson", Working, "InnovateCo", "09:00 AM", "3h 45m", [75, 10, 5, 10]),
        employee(6, "Frank Brown", Working, "Digital Solutions", "08:15 AM", "4h 30m", [85, 8, 2, 5]),
        employee(7, "Grace Chen", OnBreak, "Acme Corp", "09:15 AM", "3h 30m", [60, 20, 12, 8]),
        employee(8, "Henry Davis", Working, "TechStart Inc", "08:45 AM", "4h 0m", [78, 12, 5, 5]),
    ]
});

/// The eight mock employees the dashboard ships with.
pub fn fixture_employees() -> &'static [EmployeeRecord] {
    &FIXTURE
}
