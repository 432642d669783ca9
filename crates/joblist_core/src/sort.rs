//! Column comparators and row identity for the job table.
//!
//! Every comparator follows the usual contract: `Less` when `pre` sorts
//! before `next` in ascending order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::{JobId, JobRecord};

/// End time the backend reports for jobs that have not ended.
const NOT_ENDED: i64 = -1;

pub type Comparator = fn(&JobRecord, &JobRecord) -> Ordering;

pub fn sort_start_time_fn(pre: &JobRecord, next: &JobRecord) -> Ordering {
    pre.start_time.cmp(&next.start_time)
}

pub fn sort_duration_fn(pre: &JobRecord, next: &JobRecord) -> Ordering {
    pre.duration.cmp(&next.duration)
}

/// Missing end times compare as `-1`, so running jobs sort first ascending.
pub fn sort_end_time_fn(pre: &JobRecord, next: &JobRecord) -> Ordering {
    pre.end_time
        .unwrap_or(NOT_ENDED)
        .cmp(&next.end_time.unwrap_or(NOT_ENDED))
}

pub fn sort_state_fn(pre: &JobRecord, next: &JobRecord) -> Ordering {
    pre.state.as_str().cmp(next.state.as_str())
}

/// Stable identity of a row for list diffing.
pub fn track_by(_index: usize, node: &JobRecord) -> &JobId {
    &node.id
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    #[default]
    StartTime,
    Duration,
    EndTime,
    State,
}

impl SortColumn {
    pub fn comparator(self) -> Comparator {
        match self {
            SortColumn::StartTime => sort_start_time_fn,
            SortColumn::Duration => sort_duration_fn,
            SortColumn::EndTime => sort_end_time_fn,
            SortColumn::State => sort_state_fn,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortColumn::StartTime => "start-time",
            SortColumn::Duration => "duration",
            SortColumn::EndTime => "end-time",
            SortColumn::State => "state",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortColumn(pub String);

impl fmt::Display for UnknownSortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort column {:?}", self.0)
    }
}

impl std::error::Error for UnknownSortColumn {}

impl FromStr for SortColumn {
    type Err = UnknownSortColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start-time" => Ok(SortColumn::StartTime),
            "duration" => Ok(SortColumn::Duration),
            "end-time" => Ok(SortColumn::EndTime),
            "state" => Ok(SortColumn::State),
            other => Err(UnknownSortColumn(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascend,
    #[default]
    Descend,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascend => ordering,
            SortDirection::Descend => ordering.reverse(),
        }
    }
}
