use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use api_suite::config::keys;
use api_suite::{ApiClient, Config, Logger};
use serde_json::json;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

/// Settings a run cannot do without.
const REQUIRED: &[&str] = &[keys::BASE_URL, keys::API_BASE_URL];

fn parse_config_path() -> Option<String> {
    env::args()
        .skip(1)
        .find_map(|arg| arg.strip_prefix("--config=").map(str::to_string))
}

fn init_tracing(log_level: Option<&str>) {
    let level = match log_level {
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("warn") | Some("warning") => Level::WARN,
        Some("error") => Level::ERROR,
        _ => Level::INFO,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    // The suite logger renders its own timestamp and level.
    fmt()
        .with_env_filter(filter)
        .without_time()
        .with_level(false)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let config_path = parse_config_path();
    let config = match Config::load(config_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(Some(config.log_level.as_str()));

    if env::args().any(|arg| arg == "--strict") {
        if let Err(e) = Config::require(REQUIRED) {
            error!(error = %e, "Configuration incomplete");
            return ExitCode::FAILURE;
        }
    }

    let logger = Arc::new(Logger::from_config(&config));
    logger.info(
        "Configuration loaded",
        Some(json!({
            "env": config.env,
            "apiBaseUrl": config.api_base_url,
            "ci": config.ci,
        })),
    );

    let client = match ApiClient::from_config(&config, Arc::clone(&logger)) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to create API client");
            return ExitCode::FAILURE;
        }
    };

    match client.get("/health", None).await {
        Ok(response) if response.is_success() => {
            info!(status = response.status, url = %response.url, "API is healthy");
            ExitCode::SUCCESS
        }
        Ok(response) => {
            logger.error(
                "Health check failed",
                Some(json!({"status": response.status, "body": response.data})),
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            logger.error("API unreachable", Some(json!({"error": e.to_string()})));
            ExitCode::FAILURE
        }
    }
}
