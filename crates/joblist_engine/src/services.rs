//! Narrow interfaces to the collaborators the view talks to.

/// Transient user notices (toasts).
pub trait Notifier: Send + Sync {
    fn info(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("no route matches /{0}")]
    NoRoute(String),
    #[error("navigation cancelled")]
    Cancelled,
}

#[async_trait::async_trait]
pub trait Router: Send + Sync {
    async fn navigate(&self, segments: Vec<String>) -> Result<(), NavigationError>;
}

/// Asks the host to re-render the view after its state changed.
pub trait RenderTrigger: Send + Sync {
    fn mark_for_check(&self);
}
