//! Job list core: pure view state, messages and comparators for the job table.
mod config;
mod effect;
mod job;
mod msg;
mod sort;
mod state;
mod update;
mod view_model;

pub use config::{PageSize, RouteData, ViewConfig};
pub use effect::Effect;
pub use job::{JobId, JobRecord, JobState, TaskCounts, UnknownJobState};
pub use msg::Msg;
pub use sort::{
    sort_duration_fn, sort_end_time_fn, sort_start_time_fn, sort_state_fn, track_by, Comparator,
    SortColumn, SortDirection, UnknownSortColumn,
};
pub use state::JobListState;
pub use update::{update, INITIALIZING_NOTICE};
pub use view_model::{JobListViewModel, JobRowView};
