use axum::http::{header, HeaderMap, HeaderValue};
use nobat_api::middleware::auth::{self, CurrentUser};
use nobat_core::errors::NobatError;
use uuid::Uuid;

#[tokio::test]
async fn test_error_handling_not_found() {
    let error = NobatError::NotFound("Appointment not found".to_string());

    let response = nobat_api::middleware::error_handling::map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    let error = NobatError::Validation("invalid phone format".to_string());

    let response = nobat_api::middleware::error_handling::map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_authentication() {
    let error = NobatError::Authentication("invalid username or password".to_string());

    let response = nobat_api::middleware::error_handling::map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_authorization_failure_redirects_home() {
    // Authorization failures bounce to the landing page instead of 403
    let error = NobatError::Authorization("admin access required".to_string());

    let response = nobat_api::middleware::error_handling::map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION),
        Some(&HeaderValue::from_static("/"))
    );
}

#[tokio::test]
async fn test_error_handling_database() {
    let error = NobatError::Database(eyre::eyre!("connection refused"));

    let response = nobat_api::middleware::error_handling::map_error(error);

    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_hash_password() {
    let password = "Secret123";
    let hashed = auth::hash_password(password).unwrap();

    // Verify the hash is different from the original password
    assert_ne!(hashed, password);

    // Verify the hash is in PHC format
    assert!(hashed.starts_with("$argon2"));
}

#[tokio::test]
async fn test_verify_password() {
    let password = "Secret123";
    let hashed = auth::hash_password(password).unwrap();

    assert!(auth::verify_password(password, &hashed).unwrap());
    assert!(!auth::verify_password("wrong_password", &hashed).unwrap());
}

#[tokio::test]
async fn test_verify_password_rejects_malformed_hash() {
    // A stored value that is not a PHC string is an error, not a mismatch
    assert!(auth::verify_password("Secret123", "not-a-phc-hash").is_err());
}

#[test]
fn test_session_tokens_are_long_and_distinct() {
    let a = auth::generate_session_token();
    let b = auth::generate_session_token();

    assert_eq!(a.len(), 64);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(a, b);
}

#[test]
fn test_bearer_token_extraction() {
    let mut headers = HeaderMap::new();
    assert_eq!(auth::bearer_token(&headers), None);

    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_static("Bearer abc123"),
    );
    assert_eq!(auth::bearer_token(&headers), Some("abc123"));

    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_static("Basic abc123"),
    );
    assert_eq!(auth::bearer_token(&headers), None);
}

#[test]
fn test_require_admin() {
    let admin = CurrentUser {
        id: Uuid::new_v4(),
        username: "karo".to_string(),
        is_admin: true,
    };
    let regular = CurrentUser {
        id: Uuid::new_v4(),
        username: "alice".to_string(),
        is_admin: false,
    };

    assert!(auth::require_admin(&admin).is_ok());
    match auth::require_admin(&regular) {
        Err(NobatError::Authorization(_)) => {}
        other => panic!("expected Authorization error, got: {:?}", other),
    }
}
