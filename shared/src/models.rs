//! Shared data models.

use serde::{Deserialize, Serialize};

use crate::honbasho::TournamentSchedule;

/// One tournament entry in the schedule response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BashoScheduleEntry {
    pub basho: String,
    pub month: u32,
    pub month_name: String,
    /// Tournament dates rendered as `YYYY-MM-DD`, in chronological order.
    pub dates: Vec<String>,
}

/// Response envelope for the schedule endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub result: Vec<BashoScheduleEntry>,
}

impl From<&[TournamentSchedule]> for ScheduleResponse {
    fn from(schedule: &[TournamentSchedule]) -> Self {
        let result = schedule
            .iter()
            .map(|entry| BashoScheduleEntry {
                basho: entry.basho.name().to_string(),
                month: entry.basho.month(),
                month_name: entry.basho.month_name().to_string(),
                dates: entry
                    .dates
                    .iter()
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .collect(),
            })
            .collect();
        Self { result }
    }
}

/// A worker in the static roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub name: String,
    pub sex: String,
    pub is_reg_member: bool,
    pub age: u32,
    /// Uppercase English day names, e.g. `"MONDAY"`.
    pub work_days: Vec<String>,
}

/// The worker roster; also the response envelope for the filter endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerList {
    pub workers: Vec<Worker>,
}

/// Request payload for the worker filter endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct WorkersRequest {
    #[serde(default)]
    pub work_days: Vec<String>,
}

/// Response payload for the doubling endpoint.
#[derive(Debug, Serialize)]
pub struct TimesTwoResponse {
    pub num: i64,
    pub result: i64,
}

/// Response payload for the date calculation endpoint.
#[derive(Debug, Serialize)]
pub struct DateResultResponse {
    pub result: String,
}
