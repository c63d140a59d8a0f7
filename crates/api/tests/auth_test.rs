use chrono::{Duration, Utc};
use mockall::predicate;
use nobat_api::middleware::auth;
use nobat_api::middleware::error_handling::AppError;
use nobat_core::errors::NobatError;
use nobat_core::models::user::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use nobat_db::mock::repositories::{MockSessionRepo, MockUserRepo};
use nobat_db::models::{DbSession, DbUser};
use uuid::Uuid;

const SESSION_TTL_HOURS: i64 = 24;

// Wrapper mirroring the register handler flow against a mock repository:
// presence checks, duplicate lookup, hash, persist.
async fn test_register_wrapper(
    user_repo: &mut MockUserRepo,
    payload: RegisterRequest,
) -> Result<RegisterResponse, AppError> {
    let username = payload.username.trim();
    if username.is_empty() {
        return Err(AppError(NobatError::Validation(
            "username is required".to_string(),
        )));
    }
    if payload.password.is_empty() {
        return Err(AppError(NobatError::Validation(
            "password is required".to_string(),
        )));
    }

    // Create static strings for the mock signatures
    let username: &'static str = Box::leak(username.to_string().into_boxed_str());
    if user_repo.get_user_by_username(username).await?.is_some() {
        return Err(AppError(NobatError::Validation(
            "username already taken".to_string(),
        )));
    }

    let password_hash: &'static str =
        Box::leak(auth::hash_password(&payload.password)?.into_boxed_str());
    let user = user_repo
        .create_user(username, password_hash, false)
        .await?;

    Ok(RegisterResponse {
        id: user.id,
        username: user.username,
    })
}

// Wrapper mirroring the login handler flow: expired-session sweep,
// user lookup, constant-time verify, token mint, session persist.
async fn test_login_wrapper(
    user_repo: &mut MockUserRepo,
    session_repo: &mut MockSessionRepo,
    payload: LoginRequest,
) -> Result<LoginResponse, AppError> {
    session_repo.delete_expired_sessions().await?;

    let invalid = || NobatError::Authentication("invalid username or password".to_string());

    let username: &'static str = Box::leak(payload.username.trim().to_string().into_boxed_str());
    let user = user_repo
        .get_user_by_username(username)
        .await?
        .ok_or_else(invalid)?;

    let is_valid = auth::verify_password(&payload.password, &user.password_hash)?;
    if !is_valid {
        return Err(AppError(invalid()));
    }

    let token = auth::generate_session_token();
    let expires_at = Utc::now() + Duration::hours(SESSION_TTL_HOURS);
    let leaked: &'static str = Box::leak(token.clone().into_boxed_str());
    session_repo.create_session(leaked, user.id, expires_at).await?;

    Ok(LoginResponse {
        token,
        username: user.username,
        is_admin: user.is_admin,
    })
}

fn db_user(username: &str, password: &str, is_admin: bool) -> DbUser {
    DbUser {
        id: Uuid::new_v4(),
        username: username.to_string(),
        password_hash: auth::hash_password(password).unwrap(),
        is_admin,
        created_at: Utc::now(),
    }
}

fn register_request(username: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

fn login_request(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

fn authentication_message(err: AppError) -> String {
    match err.0 {
        NobatError::Authentication(message) => message,
        other => panic!("expected Authentication error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_register_hashes_password_and_creates_user() {
    let mut user_repo = MockUserRepo::new();

    user_repo
        .expect_get_user_by_username()
        .with(predicate::eq("alice"))
        .returning(|_| Ok(None));

    user_repo
        .expect_create_user()
        .withf(|username, password_hash, is_admin| {
            username == "alice" && password_hash.starts_with("$argon2") && !is_admin
        })
        .returning(|username, password_hash, is_admin| {
            Ok(DbUser {
                id: Uuid::new_v4(),
                username: username.to_string(),
                password_hash: password_hash.to_string(),
                is_admin,
                created_at: Utc::now(),
            })
        });

    let response = test_register_wrapper(&mut user_repo, register_request("alice", "Secret123"))
        .await
        .unwrap();
    assert_eq!(response.username, "alice");
}

#[tokio::test]
async fn test_register_rejects_duplicate_username() {
    let mut user_repo = MockUserRepo::new();

    // create_user has no expectation: reaching it would panic the test
    user_repo
        .expect_get_user_by_username()
        .returning(|_| Ok(Some(db_user("alice", "Secret123", false))));

    let err = test_register_wrapper(&mut user_repo, register_request("alice", "Another1"))
        .await
        .unwrap_err();
    match err.0 {
        NobatError::Validation(message) => assert_eq!(message, "username already taken"),
        other => panic!("expected Validation error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_register_rejects_blank_fields() {
    let mut user_repo = MockUserRepo::new();

    let err = test_register_wrapper(&mut user_repo, register_request("   ", "Secret123"))
        .await
        .unwrap_err();
    assert!(matches!(err.0, NobatError::Validation(_)));

    let err = test_register_wrapper(&mut user_repo, register_request("alice", ""))
        .await
        .unwrap_err();
    assert!(matches!(err.0, NobatError::Validation(_)));
}

#[tokio::test]
async fn test_login_unknown_user_and_wrong_password_share_one_message() {
    // One generic rejection for both causes, so the login form cannot be
    // used to probe for usernames.
    let mut unknown_repo = MockUserRepo::new();
    let mut session_repo = MockSessionRepo::new();
    session_repo
        .expect_delete_expired_sessions()
        .returning(|| Ok(0));
    unknown_repo
        .expect_get_user_by_username()
        .returning(|_| Ok(None));

    let unknown_err = test_login_wrapper(
        &mut unknown_repo,
        &mut session_repo,
        login_request("nobody", "Secret123"),
    )
    .await
    .unwrap_err();

    let mut known_repo = MockUserRepo::new();
    let mut session_repo = MockSessionRepo::new();
    session_repo
        .expect_delete_expired_sessions()
        .returning(|| Ok(0));
    known_repo
        .expect_get_user_by_username()
        .returning(|_| Ok(Some(db_user("alice", "Secret123", false))));

    let wrong_password_err = test_login_wrapper(
        &mut known_repo,
        &mut session_repo,
        login_request("alice", "WrongPass"),
    )
    .await
    .unwrap_err();

    assert_eq!(
        authentication_message(unknown_err),
        authentication_message(wrong_password_err)
    );
}

#[tokio::test]
async fn test_login_mints_a_persisted_session() {
    let mut user_repo = MockUserRepo::new();
    let mut session_repo = MockSessionRepo::new();

    let user = db_user("alice", "Secret123", false);
    let user_id = user.id;

    session_repo
        .expect_delete_expired_sessions()
        .returning(|| Ok(0));
    user_repo
        .expect_get_user_by_username()
        .with(predicate::eq("alice"))
        .returning(move |_| Ok(Some(user.clone())));

    // The stored token is opaque hex and the expiry sits in the future
    session_repo
        .expect_create_session()
        .withf(move |token, session_user_id, expires_at| {
            token.len() == 64
                && token.chars().all(|c| c.is_ascii_hexdigit())
                && *session_user_id == user_id
                && *expires_at > Utc::now()
        })
        .returning(|token, session_user_id, expires_at| {
            Ok(DbSession {
                token: token.to_string(),
                user_id: session_user_id,
                created_at: Utc::now(),
                expires_at,
            })
        });

    let response = test_login_wrapper(
        &mut user_repo,
        &mut session_repo,
        login_request("alice", "Secret123"),
    )
    .await
    .unwrap();

    assert_eq!(response.token.len(), 64);
    assert_eq!(response.username, "alice");
    assert!(!response.is_admin);
}

#[tokio::test]
async fn test_register_then_login_round_trip() {
    let mut user_repo = MockUserRepo::new();
    let mut session_repo = MockSessionRepo::new();

    user_repo
        .expect_get_user_by_username()
        .times(1)
        .returning(|_| Ok(None));
    user_repo
        .expect_create_user()
        .returning(|username, password_hash, is_admin| {
            Ok(DbUser {
                id: Uuid::new_v4(),
                username: username.to_string(),
                password_hash: password_hash.to_string(),
                is_admin,
                created_at: Utc::now(),
            })
        });

    let registered = test_register_wrapper(&mut user_repo, register_request("alice", "Secret123"))
        .await
        .unwrap();

    // The login lookup now finds the account the register step created
    let stored = DbUser {
        id: registered.id,
        username: registered.username.clone(),
        password_hash: auth::hash_password("Secret123").unwrap(),
        is_admin: false,
        created_at: Utc::now(),
    };
    let mut user_repo = MockUserRepo::new();
    user_repo
        .expect_get_user_by_username()
        .returning(move |_| Ok(Some(stored.clone())));
    session_repo
        .expect_delete_expired_sessions()
        .returning(|| Ok(0));
    session_repo
        .expect_create_session()
        .returning(|token, user_id, expires_at| {
            Ok(DbSession {
                token: token.to_string(),
                user_id,
                created_at: Utc::now(),
                expires_at,
            })
        });

    let session = test_login_wrapper(
        &mut user_repo,
        &mut session_repo,
        login_request("alice", "Secret123"),
    )
    .await
    .unwrap();

    assert_eq!(session.username, "alice");
    assert_eq!(session.token.len(), 64);
}
