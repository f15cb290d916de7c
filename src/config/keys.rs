//! Setting names and their built-in defaults.

pub const BASE_URL: &str = "BASE_URL";
pub const API_BASE_URL: &str = "API_BASE_URL";
pub const AUTH_BASE_URL: &str = "AUTH_BASE_URL";
pub const USERS_BASE_URL: &str = "USERS_BASE_URL";
pub const TEST_TIMEOUT: &str = "TEST_TIMEOUT";
pub const ASSERTION_TIMEOUT: &str = "ASSERTION_TIMEOUT";
pub const TEST_USER_EMAIL: &str = "TEST_USER_EMAIL";
pub const TEST_USER_PASSWORD: &str = "TEST_USER_PASSWORD";
pub const ADMIN_USER_EMAIL: &str = "ADMIN_USER_EMAIL";
pub const ADMIN_USER_PASSWORD: &str = "ADMIN_USER_PASSWORD";
pub const LOG_LEVEL: &str = "LOG_LEVEL";
pub const LOG_FILE: &str = "LOG_FILE";
pub const NODE_ENV: &str = "NODE_ENV";
pub const CI: &str = "CI";

/// Every setting name, in the order `Config::settings` lists them.
pub const ALL: &[&str] = &[
    BASE_URL,
    API_BASE_URL,
    AUTH_BASE_URL,
    USERS_BASE_URL,
    TEST_TIMEOUT,
    ASSERTION_TIMEOUT,
    TEST_USER_EMAIL,
    TEST_USER_PASSWORD,
    ADMIN_USER_EMAIL,
    ADMIN_USER_PASSWORD,
    LOG_LEVEL,
    LOG_FILE,
    NODE_ENV,
    CI,
];

pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub(crate) const DEFAULT_TEST_TIMEOUT_MS: u64 = 30_000;
pub(crate) const DEFAULT_ASSERTION_TIMEOUT_MS: u64 = 10_000;
pub(crate) const DEFAULT_TEST_USER_EMAIL: &str = "test@example.com";
pub(crate) const DEFAULT_TEST_USER_PASSWORD: &str = "TestPassword123!";
pub(crate) const DEFAULT_ADMIN_USER_EMAIL: &str = "admin@example.com";
pub(crate) const DEFAULT_ADMIN_USER_PASSWORD: &str = "AdminPassword123!";
pub(crate) const DEFAULT_LOG_LEVEL: &str = "info";
pub(crate) const DEFAULT_LOG_FILE: &str = "reports/test-execution.log";
pub(crate) const DEFAULT_NODE_ENV: &str = "test";
