//! Terminal implementations of the view's collaborators.

use std::sync::atomic::{AtomicBool, Ordering};

use engine_logging::engine_info;
use joblist_engine::{NavigationError, Notifier, RenderTrigger, Router};

pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn info(&self, message: &str) {
        engine_info!("Notice: {}", message);
        println!("[info] {message}");
    }
}

/// Knows only the job detail route; the terminal has no detail page, so it
/// prints the path it would open.
pub struct TerminalRouter;

#[async_trait::async_trait]
impl Router for TerminalRouter {
    async fn navigate(&self, segments: Vec<String>) -> Result<(), NavigationError> {
        let path = segments.join("/");
        match segments.as_slice() {
            [page, job_id] if page == "job" => {
                engine_info!("Navigate to /{}", path);
                println!("-> /job/{job_id}");
                Ok(())
            }
            _ => Err(NavigationError::NoRoute(path)),
        }
    }
}

/// Render request latch consumed by the app loop.
#[derive(Default)]
pub struct RenderFlag {
    requested: AtomicBool,
}

impl RenderFlag {
    pub fn take(&self) -> bool {
        self.requested.swap(false, Ordering::SeqCst)
    }
}

impl RenderTrigger for RenderFlag {
    fn mark_for_check(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }
}
