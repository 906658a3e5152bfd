use shared_types::{AppConfig, AppError};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` from the workspace root, embedded so the web build needs
/// no filesystem.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Parse config text strictly.
pub fn try_parse_config(contents: &str) -> Result<AppConfig, AppError> {
    toml::from_str::<AppConfig>(contents).map_err(|e| AppError::config(e.to_string()))
}

/// Parse config text. Invalid input yields the defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    match try_parse_config(contents) {
        Ok(config) => {
            tracing::debug!(?config, "loaded config");
            config
        }
        Err(err) => {
            tracing::warn!(%err, "invalid config.toml, using defaults");
            AppConfig::default()
        }
    }
}

/// The application config, parsed on first use.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| parse_config(CONFIG_TOML))
}
