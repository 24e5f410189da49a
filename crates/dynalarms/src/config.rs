use std::env;

use dynalarms_core::DEFAULT_CONFIG_KEY;

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "dynalarms=info,dynalarms_cli=info,dynalarms_core=info";

/// Shell configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Key under `custom` holding the alarm configuration (default: "dynamo-alarms")
    pub config_key: String,
    /// Fallback tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNALARMS_CONFIG_KEY` - Key under `custom` (default: "dynamo-alarms")
    /// - `DYNALARMS_LOG` - Fallback log filter (default: `info` for every dynalarms crate)
    pub fn from_env() -> Self {
        let config_key = env::var("DYNALARMS_CONFIG_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONFIG_KEY.to_string());
        let log_filter =
            env::var("DYNALARMS_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        Self {
            config_key,
            log_filter,
        }
    }

    /// Returns the config key to use, preferring an explicit override.
    pub fn resolve_config_key(&self, cli_override: Option<&str>) -> String {
        cli_override
            .map(str::to_string)
            .unwrap_or_else(|| self.config_key.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
