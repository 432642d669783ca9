use joblist_core::{
    update, JobListState, Msg, PageSize, SortColumn, SortDirection, ViewConfig,
};

#[test]
fn unchanged_sort_is_noop() {
    let state = JobListState::new();
    let (column, direction) = state.sort();
    let (mut next, effects) = update(state.clone(), Msg::SortChanged { column, direction });

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(state, next);
    assert_eq!(next.sort(), (SortColumn::StartTime, SortDirection::Descend));
}

#[test]
fn unchanged_page_size_is_noop() {
    let config = ViewConfig {
        page_size: PageSize::Rows(20),
        ..ViewConfig::default()
    };
    let (mut state, _) = update(JobListState::new(), Msg::Configure(config));
    state.consume_dirty();

    let (mut next, effects) = update(state.clone(), Msg::PageSizeChanged(PageSize::Rows(20)));

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(state, next);
    assert!(next.is_loading());
}
