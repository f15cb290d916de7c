//! Building blocks for REST API test suites: configuration, a sanitizing
//! structured logger, an HTTP API client and randomized test data.

pub mod client;
pub mod config;
pub mod fixtures;
pub mod logger;

pub use client::{ApiClient, ApiResponse, RequestOptions, TransportError};
pub use config::{Config, ConfigError};
pub use logger::{LogLevel, Logger};
