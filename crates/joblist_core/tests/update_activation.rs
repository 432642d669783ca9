use joblist_core::{
    update, Effect, JobId, JobListState, JobRecord, JobState, Msg, TaskCounts,
    INITIALIZING_NOTICE,
};

fn job(id: &str, state: JobState) -> JobRecord {
    JobRecord {
        id: JobId::new(id),
        name: "wordcount".to_string(),
        state,
        start_time: 0,
        end_time: None,
        duration: 0,
        completed: state.is_globally_terminal(),
        tasks: TaskCounts::default(),
    }
}

#[test]
fn initializing_job_only_notifies() {
    let (state, effects) = update(
        JobListState::new(),
        Msg::JobActivated(job("abc", JobState::Initializing)),
    );

    assert_eq!(
        effects,
        vec![Effect::Notify {
            message: INITIALIZING_NOTICE.to_string()
        }]
    );
    assert_eq!(state, JobListState::new());
}

#[test]
fn every_other_state_navigates_to_detail() {
    for job_state in JobState::ALL
        .into_iter()
        .filter(|s| *s != JobState::Initializing)
    {
        let (_, effects) = update(
            JobListState::new(),
            Msg::JobActivated(job("7f3a", job_state)),
        );

        assert_eq!(
            effects,
            vec![Effect::Navigate {
                segments: vec!["job".to_string(), "7f3a".to_string()]
            }],
            "state {job_state}"
        );
    }
}

#[test]
fn notice_text_names_the_state() {
    assert_eq!(
        INITIALIZING_NOTICE,
        "Job detail page is not available while it is in state INITIALIZING."
    );
}
