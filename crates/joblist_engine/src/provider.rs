use std::time::Duration;

use engine_logging::engine_warn;
use joblist_core::JobRecord;

use crate::types::JobsOverview;
use crate::{FailureKind, ProviderError};

const OVERVIEW_PATH: &str = "jobs/overview";

#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Source of the full current job set.
#[async_trait::async_trait]
pub trait JobProvider: Send + Sync {
    async fn load_jobs(&self) -> Result<Vec<JobRecord>, ProviderError>;
}

/// Loads the job overview from the cluster's REST endpoint.
#[derive(Debug, Clone)]
pub struct RestJobProvider {
    overview_url: reqwest::Url,
    client: reqwest::Client,
}

impl RestJobProvider {
    pub fn new(base_url: &str, settings: ProviderSettings) -> Result<Self, ProviderError> {
        let mut base = reqwest::Url::parse(base_url)
            .map_err(|err| ProviderError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let overview_url = base
            .join(OVERVIEW_PATH)
            .map_err(|err| ProviderError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ProviderError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            overview_url,
            client,
        })
    }

    pub fn overview_url(&self) -> &str {
        self.overview_url.as_str()
    }
}

#[async_trait::async_trait]
impl JobProvider for RestJobProvider {
    async fn load_jobs(&self) -> Result<Vec<JobRecord>, ProviderError> {
        let response = self
            .client
            .get(self.overview_url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        decode_overview(&body)
    }
}

fn decode_overview(body: &[u8]) -> Result<Vec<JobRecord>, ProviderError> {
    let overview: JobsOverview = serde_json::from_slice(body)
        .map_err(|err| ProviderError::new(FailureKind::Decode, err.to_string()))?;
    let jobs = overview
        .jobs
        .into_iter()
        .filter_map(|entry| {
            let jid = entry.jid.clone();
            match entry.into_record() {
                Ok(record) => Some(record),
                Err(err) => {
                    engine_warn!("Skipping job {}: {}", jid, err);
                    None
                }
            }
        })
        .collect();
    Ok(jobs)
}

fn map_reqwest_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        return ProviderError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ProviderError::new(FailureKind::Decode, err.to_string());
    }
    ProviderError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use joblist_core::JobState;

    #[test]
    fn decode_marks_terminal_jobs_completed_and_drops_sentinel_end_time() {
        let body = br#"{"jobs":[
            {"jid":"a1","name":"etl","state":"RUNNING","start-time":1000,"end-time":-1,"duration":50,
             "tasks":{"total":4,"running":4,"finished":0,"canceled":0,"failed":0}},
            {"jid":"b2","name":"report","state":"FAILED","start-time":900,"end-time":1900,"duration":1000}
        ]}"#;

        let jobs = decode_overview(body).expect("decode ok");

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].state, JobState::Running);
        assert!(!jobs[0].completed);
        assert_eq!(jobs[0].end_time, None);
        assert_eq!(jobs[0].tasks.running, 4);
        assert!(jobs[1].completed);
        assert_eq!(jobs[1].end_time, Some(1900));
        assert_eq!(jobs[1].tasks.total, 0);
    }

    #[test]
    fn unknown_state_skips_only_that_job() {
        let body = br#"{"jobs":[
            {"jid":"a1","state":"EXPLODED","start-time":1},
            {"jid":"b2","state":"RUNNING","start-time":2}
        ]}"#;

        let jobs = decode_overview(body).expect("decode ok");

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id.as_str(), "b2");
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = decode_overview(br#"{"jobs":[{"state":"RUNNING"}]}"#).unwrap_err();
        assert_eq!(err.kind, FailureKind::Decode);
    }

    #[test]
    fn missing_jobs_field_is_an_empty_list() {
        assert!(decode_overview(b"{}").expect("decode ok").is_empty());
    }

    #[test]
    fn base_url_without_trailing_slash_keeps_its_path() {
        let provider =
            RestJobProvider::new("http://localhost:8081/proxy", ProviderSettings::default())
                .expect("valid url");
        assert_eq!(
            provider.overview_url(),
            "http://localhost:8081/proxy/jobs/overview"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = RestJobProvider::new("not a url", ProviderSettings::default()).unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidUrl);
    }
}
