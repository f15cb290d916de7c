//! Configuration loading and validation for the API test suite.
//!
//! Every setting has a built-in default, may be set in an optional YAML
//! settings file, and is finally overridden by the environment entry of the
//! same name (after `.env` has been loaded through dotenvy).

mod duration;
mod error;
mod file;
pub mod keys;

pub use error::ConfigError;
pub use file::{FileCredentials, FileSettings};

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use std::{env, fs};

use crate::logger::{LogLevel, REDACTED};

/// Email/password pair for a seeded account.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

/// A resolved setting, typed the way its name declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Text(String),
    Integer(u64),
    Flag(bool),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Text(s) => write!(f, "{}", s),
            SettingValue::Integer(n) => write!(f, "{}", n),
            SettingValue::Flag(b) => write!(f, "{}", b),
        }
    }
}

/// Resolved suite configuration. Built once at startup and handed to the
/// logger and the API client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the application under test.
    pub base_url: String,
    /// Root of the JSON API (default: `{base_url}/api`).
    pub api_base_url: String,
    /// Authentication endpoints (default: `{api_base_url}/auth`).
    pub auth_base_url: String,
    /// User management endpoints (default: `{api_base_url}/users`).
    pub users_base_url: String,
    /// Per-request timeout.
    pub test_timeout: Duration,
    /// Upper bound for polling assertions.
    pub assertion_timeout: Duration,
    pub test_user: Credentials,
    pub admin_user: Credentials,
    pub log_level: LogLevel,
    pub log_file: PathBuf,
    /// Environment name from `NODE_ENV` ("test", "staging", ...).
    pub env: String,
    /// True when running under CI.
    pub ci: bool,
}

impl Config {
    /// Load configuration from the process environment, optionally layered
    /// over a YAML settings file.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore error if not found)
        dotenvy::dotenv().ok();

        let file = match path {
            Some(path) => Self::read_file(path)?,
            None => FileSettings::default(),
        };

        Self::resolve(file, |key| env::var(key).ok())
    }

    /// Load configuration from the process environment only.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    fn read_file(path: &str) -> Result<FileSettings, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Resolve every setting from `file` and `lookup`. Environment values win;
    /// empty environment values count as absent.
    pub fn resolve<F>(file: FileSettings, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = var(keys::BASE_URL)
            .or(file.base_url)
            .unwrap_or_else(|| keys::DEFAULT_BASE_URL.to_string());
        let api_base_url = var(keys::API_BASE_URL)
            .or(file.api_base_url)
            .unwrap_or_else(|| join(&base_url, "api"));
        let auth_base_url = var(keys::AUTH_BASE_URL)
            .or(file.auth_base_url)
            .unwrap_or_else(|| join(&api_base_url, "auth"));
        let users_base_url = var(keys::USERS_BASE_URL)
            .or(file.users_base_url)
            .unwrap_or_else(|| join(&api_base_url, "users"));

        let test_timeout = match var(keys::TEST_TIMEOUT) {
            Some(v) => parse_millis(keys::TEST_TIMEOUT, &v)?,
            None => file
                .test_timeout
                .unwrap_or(Duration::from_millis(keys::DEFAULT_TEST_TIMEOUT_MS)),
        };
        let assertion_timeout = match var(keys::ASSERTION_TIMEOUT) {
            Some(v) => parse_millis(keys::ASSERTION_TIMEOUT, &v)?,
            None => file
                .assertion_timeout
                .unwrap_or(Duration::from_millis(keys::DEFAULT_ASSERTION_TIMEOUT_MS)),
        };

        let file_test_user = file.test_user.unwrap_or_default();
        let test_user = Credentials {
            email: var(keys::TEST_USER_EMAIL)
                .or(file_test_user.email)
                .unwrap_or_else(|| keys::DEFAULT_TEST_USER_EMAIL.to_string()),
            password: var(keys::TEST_USER_PASSWORD)
                .or(file_test_user.password)
                .unwrap_or_else(|| keys::DEFAULT_TEST_USER_PASSWORD.to_string()),
        };

        let file_admin_user = file.admin_user.unwrap_or_default();
        let admin_user = Credentials {
            email: var(keys::ADMIN_USER_EMAIL)
                .or(file_admin_user.email)
                .unwrap_or_else(|| keys::DEFAULT_ADMIN_USER_EMAIL.to_string()),
            password: var(keys::ADMIN_USER_PASSWORD)
                .or(file_admin_user.password)
                .unwrap_or_else(|| keys::DEFAULT_ADMIN_USER_PASSWORD.to_string()),
        };

        let log_level_raw = var(keys::LOG_LEVEL)
            .or(file.log_level)
            .unwrap_or_else(|| keys::DEFAULT_LOG_LEVEL.to_string());
        let log_level = log_level_raw
            .parse::<LogLevel>()
            .map_err(|reason| ConfigError::invalid(keys::LOG_LEVEL, &log_level_raw, reason))?;

        let log_file = PathBuf::from(
            var(keys::LOG_FILE)
                .or(file.log_file)
                .unwrap_or_else(|| keys::DEFAULT_LOG_FILE.to_string()),
        );

        let env = var(keys::NODE_ENV)
            .or(file.env)
            .unwrap_or_else(|| keys::DEFAULT_NODE_ENV.to_string());

        let ci = match var(keys::CI) {
            Some(v) => parse_flag(keys::CI, &v)?,
            None => file.ci.unwrap_or(false),
        };

        let config = Config {
            base_url,
            api_base_url,
            auth_base_url,
            users_base_url,
            test_timeout,
            assertion_timeout,
            test_user,
            admin_user,
            log_level,
            log_file,
            env,
            ci,
        };
        config.validate()?;

        Ok(config)
    }

    /// Both URL roots must survive resolution non-empty.
    fn validate(&self) -> Result<(), ConfigError> {
        let missing: Vec<String> = [
            (keys::BASE_URL, &self.base_url),
            (keys::API_BASE_URL, &self.api_base_url),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(key, _)| key.to_string())
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Missing(missing))
        }
    }

    /// Fails with every name in `names` that has no non-empty entry in the
    /// process environment.
    pub fn require(names: &[&str]) -> Result<(), ConfigError> {
        Self::validate_required(names, |key| env::var(key).ok())
    }

    /// Same as [`Config::require`] against an arbitrary lookup.
    pub fn validate_required<F>(names: &[&str], lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing: Vec<String> = names
            .iter()
            .filter(|name| lookup(**name).is_none_or(|v| v.trim().is_empty()))
            .map(|name| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Missing(missing))
        }
    }

    /// Looks up one resolved setting by its environment name.
    pub fn get(&self, name: &str) -> Option<SettingValue> {
        use SettingValue::{Flag, Integer, Text};

        let value = match name {
            keys::BASE_URL => Text(self.base_url.clone()),
            keys::API_BASE_URL => Text(self.api_base_url.clone()),
            keys::AUTH_BASE_URL => Text(self.auth_base_url.clone()),
            keys::USERS_BASE_URL => Text(self.users_base_url.clone()),
            keys::TEST_TIMEOUT => Integer(millis(self.test_timeout)),
            keys::ASSERTION_TIMEOUT => Integer(millis(self.assertion_timeout)),
            keys::TEST_USER_EMAIL => Text(self.test_user.email.clone()),
            keys::TEST_USER_PASSWORD => Text(self.test_user.password.clone()),
            keys::ADMIN_USER_EMAIL => Text(self.admin_user.email.clone()),
            keys::ADMIN_USER_PASSWORD => Text(self.admin_user.password.clone()),
            keys::LOG_LEVEL => Text(self.log_level.to_string()),
            keys::LOG_FILE => Text(self.log_file.display().to_string()),
            keys::NODE_ENV => Text(self.env.clone()),
            keys::CI => Flag(self.ci),
            _ => return None,
        };

        Some(value)
    }

    /// Read-only view of every resolved setting.
    pub fn settings(&self) -> BTreeMap<&'static str, SettingValue> {
        keys::ALL
            .iter()
            .filter_map(|name| self.get(name).map(|value| (*name, value)))
            .collect()
    }
}

fn join(base: &str, segment: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), segment)
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn parse_millis(key: &str, value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::invalid(key, value, "expected a whole number of milliseconds"))
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::invalid(key, value, "expected true or false")),
    }
}
