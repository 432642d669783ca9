use std::fmt;

use joblist_core::{JobId, JobRecord, JobState, TaskCounts};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ProviderError {
    pub kind: FailureKind,
    pub message: String,
}

impl ProviderError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "malformed job overview"),
        }
    }
}

/// Body of `GET /jobs/overview`.
#[derive(Debug, Deserialize)]
pub(crate) struct JobsOverview {
    #[serde(default)]
    pub jobs: Vec<JobOverviewEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JobOverviewEntry {
    pub jid: String,
    #[serde(default)]
    pub name: String,
    pub state: String,
    #[serde(rename = "start-time")]
    pub start_time: i64,
    #[serde(rename = "end-time", default = "not_ended")]
    pub end_time: i64,
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub tasks: TaskCountsEntry,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TaskCountsEntry {
    pub total: u32,
    pub running: u32,
    pub finished: u32,
    pub canceled: u32,
    pub failed: u32,
}

fn not_ended() -> i64 {
    -1
}

impl JobOverviewEntry {
    /// Maps the wire entry to a record; `completed` is derived here, once,
    /// from the lifecycle state.
    pub(crate) fn into_record(self) -> Result<JobRecord, ProviderError> {
        let state: JobState = self
            .state
            .parse()
            .map_err(|err: joblist_core::UnknownJobState| {
                ProviderError::new(FailureKind::Decode, err.to_string())
            })?;
        Ok(JobRecord {
            id: JobId::new(self.jid),
            name: self.name,
            state,
            start_time: self.start_time,
            end_time: (self.end_time > -1).then_some(self.end_time),
            duration: self.duration,
            completed: state.is_globally_terminal(),
            tasks: TaskCounts {
                total: self.tasks.total,
                running: self.tasks.running,
                finished: self.tasks.finished,
                canceled: self.tasks.canceled,
                failed: self.tasks.failed,
            },
        })
    }
}
