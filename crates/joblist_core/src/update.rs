use crate::{Effect, JobListState, JobRecord, JobState, Msg};

pub const INITIALIZING_NOTICE: &str =
    "Job detail page is not available while it is in state INITIALIZING.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: JobListState, msg: Msg) -> (JobListState, Vec<Effect>) {
    let effects = match msg {
        Msg::Configure(config) => {
            state.apply_config(config);
            Vec::new()
        }
        Msg::JobsLoaded(batch) => {
            state.apply_batch(batch);
            Vec::new()
        }
        Msg::JobActivated(job) => vec![activation_effect(&job)],
        Msg::SortChanged { column, direction } => {
            state.set_sort(column, direction);
            Vec::new()
        }
        Msg::PageSizeChanged(page_size) => {
            state.set_page_size(page_size);
            Vec::new()
        }
    };

    (state, effects)
}

fn activation_effect(job: &JobRecord) -> Effect {
    // Initializing jobs have no detail page yet.
    if job.state == JobState::Initializing {
        Effect::Notify {
            message: INITIALIZING_NOTICE.to_string(),
        }
    } else {
        Effect::Navigate {
            segments: vec!["job".to_string(), job.id.to_string()],
        }
    }
}
