use api_suite::fixtures::{Fixture, User, invalid_emails, weak_passwords};
use api_suite::logger::REDACTED;
use serde_json::json;

use crate::common::stub::{USER_EMAIL, USER_PASSWORD, verification_token};
use crate::common::{TestContext, assert_error, token_of};

// ==================== register ====================

#[tokio::test]
async fn test_register_returns_user_and_token() {
    let ctx = TestContext::start().await;
    let (user, response) = ctx.register().await;

    let body = &response.data;
    assert_eq!(body["user"]["email"], user.email.as_str());
    assert_eq!(body["user"]["firstName"], user.first_name.as_str());
    assert_eq!(body["user"]["role"], "user");
    assert!(body["user"]["id"].is_string());
    assert!(body["user"].get("password").is_none());
    assert!(!token_of(&response).is_empty());
}

#[tokio::test]
async fn test_register_log_hides_password() {
    let ctx = TestContext::start().await;
    let (user, _) = ctx.register().await;

    let entries = ctx.log_entries();
    let request = entries
        .iter()
        .find(|e| e["message"].as_str().is_some_and(|m| m.ends_with("/auth/register")))
        .expect("request entry");

    assert_eq!(request["data"]["body"]["email"], user.email.as_str());
    assert_eq!(request["data"]["body"]["password"], REDACTED);

    let raw = std::fs::read_to_string(&ctx.config.log_file).unwrap();
    assert!(!raw.contains(&user.password));
}

#[tokio::test]
async fn test_register_rejects_invalid_emails() {
    let ctx = TestContext::start().await;
    let auth = ctx.auth();

    for email in invalid_emails() {
        let user = User {
            email: email.to_string(),
            ..User::generate()
        };
        let response = auth.post("/register", Some(user.registration()), None).await.unwrap();
        assert_error(&response, 400);
    }
}

#[tokio::test]
async fn test_register_rejects_weak_passwords() {
    let ctx = TestContext::start().await;
    let auth = ctx.auth();

    for password in weak_passwords() {
        let user = User::generate_with(json!({ "password": password })).unwrap();
        let response = auth.post("/register", Some(user.registration()), None).await.unwrap();
        assert_error(&response, 400);
    }
}

#[tokio::test]
async fn test_register_rejects_missing_body() {
    let ctx = TestContext::start().await;

    let response = ctx.auth().post("/register", None, None).await.unwrap();

    assert_error(&response, 400);
    assert_eq!(response.error_message(), Some("Email is required"));
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let ctx = TestContext::start().await;
    let (user, _) = ctx.register().await;

    let again = User {
        email: user.email.to_uppercase(),
        ..User::generate()
    };
    let response = ctx
        .auth()
        .post("/register", Some(again.registration()), None)
        .await
        .unwrap();

    assert_error(&response, 409);
}

#[tokio::test]
async fn test_concurrent_duplicate_registration_admits_one() {
    let ctx = TestContext::start().await;
    let auth = ctx.auth();
    let user = User::generate();

    let (first, second) = tokio::join!(
        auth.post("/register", Some(user.registration()), None),
        auth.post("/register", Some(user.registration()), None),
    );

    let mut statuses = vec![first.unwrap().status, second.unwrap().status];
    statuses.sort();
    assert_eq!(statuses, vec![201, 409]);
}

// ==================== login ====================

#[tokio::test]
async fn test_login_with_seeded_user() {
    let ctx = TestContext::start().await;
    let creds = &ctx.config.test_user;

    let response = ctx
        .auth()
        .post("/login", Some(json!({"email": creds.email, "password": creds.password})), None)
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.data["user"]["email"], USER_EMAIL);
    assert!(response.data["refreshToken"].is_string());
}

#[tokio::test]
async fn test_login_with_registered_user() {
    let ctx = TestContext::start().await;
    let (user, _) = ctx.register().await;

    let response = ctx.auth().post("/login", Some(user.login()), None).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.data["user"]["email"], user.email.as_str());
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let ctx = TestContext::start().await;

    let response = ctx
        .auth()
        .post("/login", Some(json!({"email": USER_EMAIL, "password": "Wrong12345"})), None)
        .await
        .unwrap();

    assert_error(&response, 401);
    assert!(response.data.get("token").is_none());
}

#[tokio::test]
async fn test_login_unknown_user_is_unauthorized() {
    let ctx = TestContext::start().await;
    let stranger = User::generate();

    let response = ctx.auth().post("/login", Some(stranger.login()), None).await.unwrap();

    assert_error(&response, 401);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let ctx = TestContext::start().await;

    let response = ctx
        .auth()
        .post("/login", Some(json!({"email": USER_EMAIL})), None)
        .await
        .unwrap();

    assert_error(&response, 400);
}

// ==================== me / refresh ====================

#[tokio::test]
async fn test_me_requires_token() {
    let ctx = TestContext::start().await;

    let response = ctx.auth().get("/me", None).await.unwrap();

    assert_error(&response, 401);
}

#[tokio::test]
async fn test_me_returns_current_user() {
    let ctx = TestContext::start().await;
    let (user, registered) = ctx.register().await;

    let mut auth = ctx.auth();
    auth.set_auth_token(token_of(&registered));
    let response = auth.get("/me", None).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.data["user"]["email"], user.email.as_str());

    auth.clear_auth_token();
    let response = auth.get("/me", None).await.unwrap();
    assert_error(&response, 401);
}

#[tokio::test]
async fn test_me_rejects_garbage_token() {
    let ctx = TestContext::start().await;
    let mut auth = ctx.auth();
    auth.set_auth_token("not-a-real-token");

    let response = auth.get("/me", None).await.unwrap();

    assert_error(&response, 401);
}

#[tokio::test]
async fn test_refresh_rotates_tokens() {
    let ctx = TestContext::start().await;
    let (_, registered) = ctx.register().await;
    let refresh_token = registered.data["refreshToken"].as_str().unwrap().to_string();

    let auth = ctx.auth();
    let response = auth
        .post("/refresh", Some(json!({"refreshToken": refresh_token})), None)
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert!(response.data["token"].is_string());
    assert_ne!(response.data["refreshToken"], refresh_token.as_str());

    // refresh tokens are single use
    let reused = auth
        .post("/refresh", Some(json!({"refreshToken": refresh_token})), None)
        .await
        .unwrap();
    assert_error(&reused, 401);
}

// ==================== password flows ====================

#[tokio::test]
async fn test_forgot_password_does_not_reveal_accounts() {
    let ctx = TestContext::start().await;
    let auth = ctx.auth();

    let known = auth
        .post("/forgot-password", Some(json!({"email": USER_EMAIL})), None)
        .await
        .unwrap();
    let unknown = auth
        .post("/forgot-password", Some(json!({"email": User::generate().email})), None)
        .await
        .unwrap();

    assert_eq!(known.status, 200);
    assert_eq!(unknown.status, 200);
    assert_eq!(known.data["message"], unknown.data["message"]);
}

#[tokio::test]
async fn test_forgot_password_validates_email() {
    let ctx = TestContext::start().await;

    let response = ctx
        .auth()
        .post("/forgot-password", Some(json!({"email": "nope"})), None)
        .await
        .unwrap();

    assert_error(&response, 400);
}

#[tokio::test]
async fn test_change_password_flow() {
    let ctx = TestContext::start().await;
    let (user, registered) = ctx.register().await;
    let new_password = User::generate().password;

    let mut auth = ctx.auth();
    let body = json!({"currentPassword": user.password, "newPassword": new_password});

    let anonymous = auth.post("/change-password", Some(body.clone()), None).await.unwrap();
    assert_error(&anonymous, 401);

    auth.set_auth_token(token_of(&registered));
    let changed = auth.post("/change-password", Some(body), None).await.unwrap();
    assert_eq!(changed.status, 200);

    let old_login = auth.post("/login", Some(user.login()), None).await.unwrap();
    assert_error(&old_login, 401);

    let new_login = auth
        .post("/login", Some(json!({"email": user.email, "password": new_password})), None)
        .await
        .unwrap();
    assert_eq!(new_login.status, 200);
}

#[tokio::test]
async fn test_change_password_rejects_wrong_current_and_weak_new() {
    let ctx = TestContext::start().await;
    let (user, registered) = ctx.register().await;

    let mut auth = ctx.auth();
    auth.set_auth_token(token_of(&registered));

    let wrong_current = auth
        .post(
            "/change-password",
            Some(json!({"currentPassword": USER_PASSWORD, "newPassword": "Another123"})),
            None,
        )
        .await
        .unwrap();
    assert_error(&wrong_current, 400);

    let weak_new = auth
        .post(
            "/change-password",
            Some(json!({"currentPassword": user.password, "newPassword": "weak"})),
            None,
        )
        .await
        .unwrap();
    assert_error(&weak_new, 400);
}

// ==================== verify email ====================

#[tokio::test]
async fn test_verify_email() {
    let ctx = TestContext::start().await;
    let (_, registered) = ctx.register().await;
    let user_id = registered.data["user"]["id"].as_str().unwrap();
    assert_eq!(registered.data["user"]["emailVerified"], false);

    let response = ctx
        .auth()
        .post("/verify-email", Some(json!({"token": verification_token(user_id)})), None)
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.data["user"]["emailVerified"], true);
}

#[tokio::test]
async fn test_verify_email_rejects_bad_tokens() {
    let ctx = TestContext::start().await;
    let auth = ctx.auth();

    for body in [json!({}), json!({"token": ""}), json!({"token": "verify-unknown"})] {
        let response = auth.post("/verify-email", Some(body), None).await.unwrap();
        assert_error(&response, 400);
    }
}
