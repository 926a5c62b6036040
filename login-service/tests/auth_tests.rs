mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/login")
        .json(&json!({ "username": "testuser", "password": "password123" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Login successfully");

    let token = body["token"].as_str().expect("Token missing");
    assert_eq!(token.split('.').count(), 3);
}

#[tokio::test]
async fn test_login_user_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/login")
        .json(&json!({ "username": "nonexistent", "password": "password123" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "User not found");
    assert_eq!(body["token"], Value::Null);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/login")
        .json(&json!({ "username": "testuser", "password": "wrongpassword1" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Password is incorrect");
    assert_eq!(body["token"], Value::Null);
}

#[tokio::test]
async fn test_login_short_username_is_a_business_failure() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/login")
        .json(&json!({ "username": "ab", "password": "password123" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Username must be 3-50 characters");
}

#[tokio::test]
async fn test_login_empty_body_fails_username_validation() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/login")
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Username cannot be empty");
}

#[tokio::test]
async fn test_login_password_without_digits_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/login")
        .json(&json!({ "username": "testuser", "password": "password" }))
        .send()
        .await
        .expect("Failed to execute request");

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Password must contain both letters and numbers");
}

#[tokio::test]
async fn test_login_inactive_user_reads_as_not_found() {
    let app = TestApp::spawn().await;
    app.directory.add_inactive_user("retired", "password123");

    let response = app
        .post("/auth/login")
        .json(&json!({ "username": "retired", "password": "password123" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn test_login_malformed_json_is_bad_request() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/login")
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_protected_route_without_header_is_unauthorized() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/products")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_protected_route_with_garbage_token_is_unauthorized() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/products")
        .bearer_auth("not-a-token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_protected_route_with_expired_token_is_unauthorized() {
    let app = TestApp::spawn().await;

    // Signed with the server's own secret, so only the expiry is at fault.
    let token = app.expired_token("testuser");

    let response = app
        .get("/products")
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_unknown_subject_is_unauthorized() {
    let app = TestApp::spawn().await;

    let now = chrono::Utc::now().timestamp();
    let token = app.sign_token("vanished", now, now + 3600);

    let response = app
        .get("/products")
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_bearer_authorization_header_passes_through() {
    let app = TestApp::spawn().await;

    // Not bearer credentials: the filter leaves the request unauthenticated
    // and the protected route rejects it.
    let response = app
        .get("/products")
        .header("authorization", "Basic dGVzdDp0ZXN0")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_issued_token_grants_access() {
    let app = TestApp::spawn().await;

    let token = app.login("testuser", "password123").await;

    let response = app
        .get("/products")
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_same_token_verifies_on_concurrent_requests() {
    let app = TestApp::spawn().await;

    let token = app.login("testuser", "password123").await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let request = app.get("/products").bearer_auth(token.clone());
        handles.push(tokio::spawn(async move {
            request.send().await.expect("Failed to execute request")
        }));
    }

    for handle in handles {
        let response = handle.await.expect("Request task panicked");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
