//! Worker roster loading and filtering.

use std::fs;
use std::path::Path;

use crate::models::{Worker, WorkerList};
use crate::Result;

/// Uppercase day names accepted in `work_days` filters.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "MONDAY",
    "TUESDAY",
    "WEDNESDAY",
    "THURSDAY",
    "FRIDAY",
    "SATURDAY",
    "SUNDAY",
];

/// Load the worker roster from a JSON file.
pub fn load_worker_list(path: impl AsRef<Path>) -> Result<WorkerList> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Returns true when every entry is a recognized uppercase day name.
pub fn valid_work_days(work_days: &[String]) -> bool {
    work_days
        .iter()
        .all(|day| WEEKDAY_NAMES.contains(&day.as_str()))
}

/// Keep workers who work on at least one of the requested days.
///
/// An empty filter keeps the full roster.
pub fn filter_workers(list: WorkerList, work_days: &[String]) -> WorkerList {
    if work_days.is_empty() {
        return list;
    }
    WorkerList {
        workers: list
            .workers
            .into_iter()
            .filter(|worker| works_any(worker, work_days))
            .collect(),
    }
}

fn works_any(worker: &Worker, work_days: &[String]) -> bool {
    worker.work_days.iter().any(|day| work_days.contains(day))
}
