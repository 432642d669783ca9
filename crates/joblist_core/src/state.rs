use crate::view_model::{JobListViewModel, JobRowView};
use crate::{track_by, JobRecord, PageSize, SortColumn, SortDirection, ViewConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListState {
    items: Vec<JobRecord>,
    is_loading: bool,
    completed_filter: bool,
    title: Option<String>,
    sort_column: SortColumn,
    sort_direction: SortDirection,
    page_size: PageSize,
    dirty: bool,
}

impl Default for JobListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: true,
            completed_filter: false,
            title: None,
            sort_column: SortColumn::default(),
            sort_direction: SortDirection::default(),
            page_size: PageSize::default(),
            dirty: false,
        }
    }
}

impl JobListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[JobRecord] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn completed_filter(&self) -> bool {
        self.completed_filter
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn sort(&self) -> (SortColumn, SortDirection) {
        (self.sort_column, self.sort_direction)
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Builds the table rows: items sorted by the current column, then paged.
    pub fn view(&self) -> JobListViewModel {
        let comparator = self.sort_column.comparator();
        let direction = self.sort_direction;
        let mut sorted: Vec<&JobRecord> = self.items.iter().collect();
        sorted.sort_by(|a, b| direction.apply(comparator(a, b)));

        let rows = sorted
            .into_iter()
            .take(self.page_size.limit())
            .enumerate()
            .map(|(index, record)| JobRowView {
                key: track_by(index, record).clone(),
                record: record.clone(),
            })
            .collect();

        JobListViewModel {
            title: self.title.clone(),
            is_loading: self.is_loading,
            completed: self.completed_filter,
            sort_column: self.sort_column,
            sort_direction: self.sort_direction,
            page_size: self.page_size,
            total: self.items.len(),
            rows,
        }
    }

    /// Returns whether a render was requested since the last call, and clears it.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub(crate) fn apply_config(&mut self, config: ViewConfig) {
        self.completed_filter = config.completed;
        self.title = config.title;
        self.page_size = config.page_size;
        self.mark_dirty();
    }

    pub(crate) fn apply_batch(&mut self, batch: Vec<JobRecord>) {
        let completed = self.completed_filter;
        self.is_loading = false;
        self.items = batch
            .into_iter()
            .filter(|item| item.completed == completed)
            .collect();
        self.mark_dirty();
    }

    pub(crate) fn set_sort(&mut self, column: SortColumn, direction: SortDirection) {
        if (self.sort_column, self.sort_direction) != (column, direction) {
            self.sort_column = column;
            self.sort_direction = direction;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_page_size(&mut self, page_size: PageSize) {
        if self.page_size != page_size {
            self.page_size = page_size;
            self.mark_dirty();
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
