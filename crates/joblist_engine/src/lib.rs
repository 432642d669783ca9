//! Job list engine: provider IO, refresh signal and the view runtime.
mod feed;
mod provider;
mod refresh;
mod services;
mod types;
mod view;

pub use feed::{refresh_feed, JobFeed};
pub use provider::{JobProvider, ProviderSettings, RestJobProvider};
pub use refresh::{RefreshSignal, RefreshSubscription};
pub use services::{NavigationError, Notifier, RenderTrigger, Router};
pub use types::{FailureKind, ProviderError};
pub use view::{JobListView, ViewInputs, ViewServices};
