use std::path::PathBuf;
use std::time::Duration;

use crate::data::loader::DatasetSource;

pub const DEFAULT_DATASET_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBM-DS0321EN-SkillsNetwork/datasets/spacex_launch_dash.csv";
pub const DEFAULT_CACHE_FILE: &str = "spacex_launch_dash.csv";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_SOURCE: &str = "SPACEX_DASH_SOURCE";
const ENV_CACHE: &str = "SPACEX_DASH_CACHE";
const ENV_TIMEOUT: &str = "SPACEX_DASH_TIMEOUT_SECS";

// ---------------------------------------------------------------------------
// Startup configuration
// ---------------------------------------------------------------------------

/// Where the dataset comes from and where a downloaded copy is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub source: DatasetSource,
    /// Destination of the downloaded CSV (unused for local sources).
    pub cache_path: PathBuf,
    pub timeout: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: DatasetSource::Url(DEFAULT_DATASET_URL.to_string()),
            cache_path: PathBuf::from(DEFAULT_CACHE_FILE),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl DashboardConfig {
    /// Defaults overridden by `SPACEX_DASH_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(source) = lookup(ENV_SOURCE).filter(|s| !s.trim().is_empty()) {
            config.source = DatasetSource::parse(source.trim());
        }
        if let Some(cache) = lookup(ENV_CACHE).filter(|s| !s.trim().is_empty()) {
            config.cache_path = PathBuf::from(cache.trim());
        }
        if let Some(raw) = lookup(ENV_TIMEOUT) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => log::warn!(
                    "Ignoring {ENV_TIMEOUT}={raw:?}, using {DEFAULT_TIMEOUT_SECS}s"
                ),
            }
        }

        config
    }
}
