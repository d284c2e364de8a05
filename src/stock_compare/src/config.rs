//! Runtime configuration.
//!
//! Every field has a default, so the config file is optional. Lookup order
//! for the file: explicit path (CLI `--config`), then `STOCK_COMPARE_CONFIG`,
//! then built-in defaults.
//!
//! ```toml
//! [provider]
//! base_url = "https://query1.finance.yahoo.com/v8/finance/chart"
//! timeout_secs = 30
//! requests_per_second = 2
//!
//! [chart]
//! width = 600
//! height = 600
//!
//! [output]
//! root = "/tmp/charts"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shared_utils::{config::ConfigError, config::read_toml, env::env_var_opt};
use tracing::{debug, info};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "STOCK_COMPARE_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub provider: ProviderSettings,
    pub chart: ChartSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderSettings {
    /// Chart endpoint; the symbol is appended as a path segment.
    pub base_url: String,
    pub user_agent: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
    /// Pacing for sequential symbol requests. Zero is treated as one.
    pub requests_per_second: u32,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com/v8/finance/chart".to_string(),
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko)"
                .to_string(),
            timeout_secs: 30,
            requests_per_second: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartSettings {
    pub width: usize,
    pub height: usize,
    /// Resolution multiplier for PNG export.
    pub image_scale: f64,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            image_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    /// Directory that receives the `output/` folder. Defaults to the
    /// current working directory.
    pub root: Option<PathBuf>,
}

impl AppConfig {
    /// Resolves and loads the config file, falling back to defaults when no
    /// file is named anywhere.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| env_var_opt(CONFIG_ENV_VAR).map(PathBuf::from));

        match path {
            Some(path) => {
                info!(path = %path.display(), "loading config");
                read_toml(&path)
            }
            None => {
                debug!("no config file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}
