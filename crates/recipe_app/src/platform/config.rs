use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use log::LevelFilter;
use recipe_engine::{Endpoint, FetchSettings};
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

pub(crate) const CONFIG_FILENAME: &str = "recipe_app.ron";

/// Settings read from `recipe_app.ron`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    /// Preset name (`all`, `malformed`, `empty`) or a URL.
    pub endpoint: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_bytes: u64,
    pub log_destination: LogDestination,
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            endpoint: "all".to_string(),
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            max_bytes: fetch.max_bytes,
            log_destination: LogDestination::default(),
            verbose: false,
        }
    }
}

impl AppConfig {
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::from(self.endpoint.as_str())
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_bytes,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

/// Load `{dir}/recipe_app.ron`; a missing file yields defaults.
pub(crate) fn load_config(dir: &Path) -> anyhow::Result<AppConfig> {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()));
        }
    };

    ron::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}
