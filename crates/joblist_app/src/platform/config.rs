use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use joblist_core::{PageSize, RouteData};
use joblist_engine::{ProviderSettings, ViewInputs};
use serde::Deserialize;

use super::logging::LogDestination;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("unknown route {0:?}, expected \"running\" or \"completed\"")]
    UnknownRoute(String),
}

/// Settings read from a RON file; every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root of the cluster REST API.
    pub base_url: String,
    pub refresh_interval_ms: u64,
    pub request_timeout_ms: u64,
    /// Input defaults; the route chosen on the command line overrides them.
    pub completed: bool,
    pub title: Option<String>,
    pub page_size: Option<usize>,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081".to_string(),
            refresh_interval_ms: 3_000,
            request_timeout_ms: 30_000,
            completed: false,
            title: None,
            page_size: None,
            log_destination: LogDestination::default(),
        }
    }
}

impl AppConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms.max(1))
    }

    pub fn provider_settings(&self) -> ProviderSettings {
        ProviderSettings {
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            ..ProviderSettings::default()
        }
    }

    pub fn view_inputs(&self) -> ViewInputs {
        ViewInputs {
            completed: self.completed,
            title: self.title.clone(),
            page_size: self.page_size.map_or(PageSize::Unbounded, PageSize::Rows),
            job_data: None,
        }
    }
}

pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Route data of the two job list pages.
pub fn route_data(name: &str) -> Result<RouteData, ConfigError> {
    match name {
        "running" => Ok(RouteData {
            completed: Some(false),
            title: Some("Running Job List".to_string()),
        }),
        "completed" => Ok(RouteData {
            completed: Some(true),
            title: Some("Completed Job List".to_string()),
        }),
        other => Err(ConfigError::UnknownRoute(other.to_string())),
    }
}

/// Reads `[running|completed] [config.ron]`: the route comes first and
/// defaults to `running`; without a path the defaults apply.
pub fn config_from_args(
    args: impl IntoIterator<Item = String>,
) -> Result<(RouteData, AppConfig), ConfigError> {
    let mut args = args.into_iter();
    let route = route_data(args.next().as_deref().unwrap_or("running"))?;
    let config = match args.next() {
        Some(path) => load_config(Path::new(&path))?,
        None => AppConfig::default(),
    };
    Ok((route, config))
}
