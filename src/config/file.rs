//! Optional YAML settings file, layered between defaults and the environment.

use serde::Deserialize;
use std::time::Duration;

use super::duration;

/// Values read from a settings file. Every field is optional; anything left
/// out falls back to the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub base_url: Option<String>,
    pub api_base_url: Option<String>,
    pub auth_base_url: Option<String>,
    pub users_base_url: Option<String>,
    /// Per-request timeout (e.g. "30s", "1500ms").
    #[serde(default, with = "duration")]
    pub test_timeout: Option<Duration>,
    #[serde(default, with = "duration")]
    pub assertion_timeout: Option<Duration>,
    pub test_user: Option<FileCredentials>,
    pub admin_user: Option<FileCredentials>,
    /// Logging verbosity: "debug", "info", "warn", "error".
    pub log_level: Option<String>,
    pub log_file: Option<String>,
    pub env: Option<String>,
    pub ci: Option<bool>,
}

/// Credentials block of the settings file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileCredentials {
    pub email: Option<String>,
    pub password: Option<String>,
}
