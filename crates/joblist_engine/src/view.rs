use std::sync::Arc;

use engine_logging::{engine_debug, engine_info, engine_warn};
use futures_util::StreamExt;
use joblist_core::{
    update, Effect, JobListState, JobListViewModel, JobRecord, Msg, PageSize, RouteData,
    SortColumn, SortDirection, ViewConfig,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{refresh_feed, JobFeed, JobProvider, Notifier, RefreshSignal, RenderTrigger, Router};

/// Inputs set by the container that embeds the view.
#[derive(Default)]
pub struct ViewInputs {
    pub completed: bool,
    pub title: Option<String>,
    pub page_size: PageSize,
    /// Replaces the self-built refresh feed when supplied.
    pub job_data: Option<JobFeed>,
}

#[derive(Clone)]
pub struct ViewServices {
    pub provider: Arc<dyn JobProvider>,
    pub refresh: RefreshSignal,
    pub notifier: Arc<dyn Notifier>,
    pub router: Arc<dyn Router>,
    pub render: Arc<dyn RenderTrigger>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Active,
    Destroyed,
}

/// Live job table: owns the view state and the subscription feeding it.
///
/// Batches arrive through an inbox; the host drives the view by awaiting
/// [`JobListView::next`] and re-renders whenever the render trigger fires.
pub struct JobListView {
    state: JobListState,
    config: ViewConfig,
    job_data: Option<JobFeed>,
    services: ViewServices,
    destroy: CancellationToken,
    inbox: Option<mpsc::UnboundedReceiver<Msg>>,
    forwarder: Option<JoinHandle<()>>,
    lifecycle: Lifecycle,
}

impl JobListView {
    pub fn new(inputs: ViewInputs, services: ViewServices) -> Self {
        Self {
            state: JobListState::new(),
            config: ViewConfig {
                completed: inputs.completed,
                title: inputs.title,
                page_size: inputs.page_size,
            },
            job_data: inputs.job_data,
            services,
            destroy: CancellationToken::new(),
            inbox: None,
            forwarder: None,
            lifecycle: Lifecycle::Created,
        }
    }

    /// Applies route configuration and subscribes to the job feed.
    ///
    /// Must be called from within a tokio runtime.
    pub fn on_init(&mut self, route: &RouteData) {
        if self.lifecycle != Lifecycle::Created {
            engine_warn!("Job list init ignored in state {:?}", self.lifecycle);
            return;
        }

        let config = self.config.clone().resolve(route);
        engine_info!(
            "Job list init completed={} title={:?}",
            config.completed,
            config.title
        );
        self.dispatch(Msg::Configure(config));

        let feed = match self.job_data.take() {
            Some(feed) => feed,
            None => refresh_feed(
                &self.services.refresh,
                self.services.provider.clone(),
                self.destroy.child_token(),
            ),
        };
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        self.forwarder = Some(spawn_forwarder(feed, inbox_tx, self.destroy.clone()));
        self.inbox = Some(inbox_rx);
        self.lifecycle = Lifecycle::Active;
    }

    /// Waits for the next inbox message and applies it.
    ///
    /// Returns `false` when there is nothing left to wait for: the view was
    /// never initialized, has been destroyed, or its feed ended.
    pub async fn next(&mut self) -> bool {
        let Some(inbox) = self.inbox.as_mut() else {
            return false;
        };
        let received = inbox.recv().await;
        match received {
            Some(msg) => {
                self.dispatch(msg);
                true
            }
            None => false,
        }
    }

    /// Applies every message already waiting in the inbox without blocking.
    pub fn process_pending(&mut self) -> usize {
        let mut pending = Vec::new();
        if let Some(inbox) = self.inbox.as_mut() {
            while let Ok(msg) = inbox.try_recv() {
                pending.push(msg);
            }
        }
        let count = pending.len();
        for msg in pending {
            self.dispatch(msg);
        }
        count
    }

    /// Row activation: opens the job detail page, or explains why it can't.
    ///
    /// Must be called from within a tokio runtime.
    pub fn navigate_to_job(&mut self, job: &JobRecord) {
        self.dispatch(Msg::JobActivated(job.clone()));
    }

    pub fn set_sort(&mut self, column: SortColumn, direction: SortDirection) {
        self.dispatch(Msg::SortChanged { column, direction });
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.dispatch(Msg::PageSizeChanged(page_size));
    }

    pub fn state(&self) -> &JobListState {
        &self.state
    }

    pub fn view(&self) -> JobListViewModel {
        self.state.view()
    }

    pub fn is_destroyed(&self) -> bool {
        self.lifecycle == Lifecycle::Destroyed
    }

    /// Stops the feed for good. Later refresh ticks trigger no provider
    /// calls and late batches are discarded.
    pub fn on_destroy(&mut self) {
        if self.lifecycle == Lifecycle::Destroyed {
            return;
        }
        self.destroy.cancel();
        if let Some(forwarder) = self.forwarder.take() {
            forwarder.abort();
        }
        if let Some(mut inbox) = self.inbox.take() {
            inbox.close();
        }
        self.job_data = None;
        self.lifecycle = Lifecycle::Destroyed;
        engine_debug!("Job list destroyed");
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let needs_render = state.consume_dirty();
        self.state = state;

        self.run_effects(effects);
        if needs_render {
            self.services.render.mark_for_check();
        }
    }

    fn run_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Notify { message } => self.services.notifier.info(&message),
                Effect::Navigate { segments } => {
                    let router = self.services.router.clone();
                    tokio::spawn(async move {
                        let path = segments.join("/");
                        if let Err(err) = router.navigate(segments).await {
                            engine_debug!("Navigation to /{} failed: {}", path, err);
                        }
                    });
                }
            }
        }
    }
}

impl Drop for JobListView {
    fn drop(&mut self) {
        self.on_destroy();
    }
}

fn spawn_forwarder(
    mut feed: JobFeed,
    inbox: mpsc::UnboundedSender<Msg>,
    destroy: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                biased;
                _ = destroy.cancelled() => break,
                batch = feed.next() => match batch {
                    Some(_) if destroy.is_cancelled() => break,
                    Some(batch) => {
                        if inbox.send(Msg::JobsLoaded(batch)).is_err() {
                            break;
                        }
                    }
                    None => break,
                },
            }
        }
    })
}
