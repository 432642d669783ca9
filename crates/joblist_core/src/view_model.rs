use crate::{JobId, JobRecord, PageSize, SortColumn, SortDirection};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobListViewModel {
    pub title: Option<String>,
    pub is_loading: bool,
    pub completed: bool,
    pub sort_column: SortColumn,
    pub sort_direction: SortDirection,
    pub page_size: PageSize,
    /// Number of filtered items before paging.
    pub total: usize,
    pub rows: Vec<JobRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub key: JobId,
    pub record: JobRecord,
}
