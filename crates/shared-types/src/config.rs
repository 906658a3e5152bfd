use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};

/// Where the login flow leaves the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    #[serde(default = "default_user_key")]
    pub user_key: String,
}

fn default_user_key() -> String {
    "user".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_key: default_user_key(),
        }
    }
}

/// What happens after the user presses Logout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogoutConfig {
    #[serde(default = "default_redirect_path")]
    pub redirect_path: String,
    /// Grace period before leaving the dashboard, so the toast can be read.
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,
    #[serde(default = "default_logout_message")]
    pub message: String,
}

fn default_redirect_path() -> String {
    "/login".to_string()
}

fn default_redirect_delay_ms() -> u64 {
    1500
}

fn default_logout_message() -> String {
    "Logged out successfully!".to_string()
}

impl Default for LogoutConfig {
    fn default() -> Self {
        Self {
            redirect_path: default_redirect_path(),
            redirect_delay_ms: default_redirect_delay_ms(),
            message: default_logout_message(),
        }
    }
}

impl LogoutConfig {
    pub fn redirect_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.redirect_delay_ms)
    }
}

/// Theme seed used when nothing has been persisted yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
    #[serde(default)]
    pub default_mode: ThemeMode,
    #[serde(default = "default_theme_key")]
    pub storage_key: String,
}

fn default_theme_key() -> String {
    "theme".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_mode: ThemeMode::default(),
            storage_key: default_theme_key(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// Every section and field has a default, so a missing or partial file
/// still yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logout: LogoutConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}
