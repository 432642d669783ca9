use crate::{JobRecord, PageSize, SortColumn, SortDirection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Resolved configuration applied once when the view initializes.
    Configure(crate::ViewConfig),
    /// A full job batch delivered by the data feed.
    JobsLoaded(Vec<JobRecord>),
    /// User activated a row in the table.
    JobActivated(JobRecord),
    /// User clicked a sortable column header.
    SortChanged {
        column: SortColumn,
        direction: SortDirection,
    },
    /// Host changed the number of rows shown per page.
    PageSizeChanged(PageSize),
}
