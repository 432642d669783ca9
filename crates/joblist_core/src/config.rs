/// Rows shown per page of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Unbounded,
    Rows(usize),
}

impl PageSize {
    pub fn limit(self) -> usize {
        match self {
            PageSize::Unbounded => usize::MAX,
            PageSize::Rows(rows) => rows,
        }
    }
}

/// Optional values attached to the route that hosts the view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteData {
    pub completed: Option<bool>,
    pub title: Option<String>,
}

/// Configuration inputs supplied by the container embedding the view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewConfig {
    /// Which records to show: those whose `completed` flag equals this.
    pub completed: bool,
    pub title: Option<String>,
    pub page_size: PageSize,
}

impl ViewConfig {
    /// Route values win when present; absent ones keep the input value.
    pub fn resolve(self, route: &RouteData) -> Self {
        Self {
            completed: route.completed.unwrap_or(self.completed),
            title: route.title.clone().or(self.title),
            page_size: self.page_size,
        }
    }
}
