//! Shared fixtures for the API suites.


use std::path::PathBuf;
use std::sync::Arc;

use api_suite::config::{FileSettings, keys};
use api_suite::fixtures::{Fixture, User};
use api_suite::{ApiClient, ApiResponse, Config, Logger};
use serde_json::Value;
use tempfile::TempDir;

use stub::StubServer;

/// One isolated run: a fresh stub API, a config pointing at it and a log
/// file in a temporary directory.
pub struct TestContext {
    pub config: Config,
    pub logger: Arc<Logger>,
    log_file: PathBuf,
    _log_dir: TempDir,
    _server: StubServer,
}

impl TestContext {
    pub async fn start() -> Self {
        let server = stub::spawn().await;
        let log_dir = TempDir::new().expect("log dir");
        let log_file = log_dir.path().join("reports").join("test-execution.log");
        let log_path = log_file.display().to_string();

        let config = Config::resolve(FileSettings::default(), |key| match key {
            keys::BASE_URL => Some(server.base_url.clone()),
            keys::LOG_FILE => Some(log_path.clone()),
            keys::LOG_LEVEL => Some("debug".to_string()),
            keys::TEST_TIMEOUT => Some("5000".to_string()),
            _ => None,
        })
        .expect("stub config");

        let logger = Arc::new(Logger::from_config(&config));

        Self {
            config,
            logger,
            log_file,
            _log_dir: log_dir,
            _server: server,
        }
    }

    /// Client rooted at `API_BASE_URL`.
    pub fn api(&self) -> ApiClient {
        ApiClient::from_config(&self.config, Arc::clone(&self.logger)).expect("api client")
    }

    /// Client rooted at `AUTH_BASE_URL`.
    pub fn auth(&self) -> ApiClient {
        self.api().with_base_url(&self.config.auth_base_url)
    }

    /// Client rooted at `USERS_BASE_URL`.
    pub fn users(&self) -> ApiClient {
        self.api().with_base_url(&self.config.users_base_url)
    }

    /// Registers a freshly generated user and returns it with its token.
    pub async fn register(&self) -> (User, ApiResponse) {
        let user = User::generate();
        let response = self
            .auth()
            .post("/register", Some(user.registration()), None)
            .await
            .expect("register request");
        assert_eq!(response.status, 201, "registration failed: {:?}", response.data);
        (user, response)
    }

    /// Users client carrying a token for `email`/`password`.
    pub async fn users_as(&self, email: &str, password: &str) -> ApiClient {
        let response = self
            .auth()
            .post(
                "/login",
                Some(serde_json::json!({"email": email, "password": password})),
                None,
            )
            .await
            .expect("login request");
        assert_eq!(response.status, 200, "login failed: {:?}", response.data);

        let mut client = self.users();
        client.set_auth_token(token_of(&response));
        client
    }

    pub async fn users_as_admin(&self) -> ApiClient {
        let admin = self.config.admin_user.clone();
        self.users_as(&admin.email, &admin.password).await
    }

    /// Every entry written to the run's log file so far.
    pub fn log_entries(&self) -> Vec<Value> {
        std::fs::read_to_string(&self.log_file)
            .unwrap_or_default()
            .lines()
            .map(|line| serde_json::from_str(line).expect("log line is JSON"))
            .collect()
    }
}

pub fn token_of(response: &ApiResponse) -> &str {
    response.data["token"].as_str().expect("token in body")
}

/// Asserts the `{ "error": { "message": ... } }` failure shape.
pub fn assert_error(response: &ApiResponse, status: u16) {
    assert_eq!(response.status, status, "unexpected body: {:?}", response.data);
    assert!(
        response.error_message().is_some_and(|m| !m.is_empty()),
        "missing error.message in {:?}",
        response.data
    );
}
