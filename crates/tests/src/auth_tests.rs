use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, Role};

#[tokio::test]
async fn test_login_success_returns_session() {
    let (api, _state) = common::test_backend().await;
    let session = api.login("admin", "admin123").await.unwrap();
    assert_eq!(session.token, common::ADMIN_TOKEN);
    assert_eq!(session.user.username, "admin");
    assert_eq!(session.user.display_name(), "Ana Admin");
    assert_eq!(session.user.role(), Some(Role::Administrator));
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let (api, _state) = common::test_backend().await;
    let err = api.login("admin", "nope").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_user_matches_wrong_password() {
    let (api, _state) = common::test_backend().await;
    let unknown = api.login("ghost", "admin123").await.unwrap_err();
    let wrong = api.login("admin", "wrong").await.unwrap_err();
    assert_eq!(unknown, wrong);
}

#[tokio::test]
async fn test_session_client_carries_token() {
    let (api, state) = common::test_backend().await;
    let session = api.login("staff", "staff123").await.unwrap();
    assert_eq!(session.user.branch.as_deref(), Some("Branch A"));
    assert_eq!(session.user.role(), Some(Role::Staff));
    api.for_session(Some(&session)).logout().await.unwrap();
    assert_eq!(state.recorded.lock().unwrap().logouts, 1);
}

#[tokio::test]
async fn test_logout_sends_bearer() {
    let (api, state) = common::test_backend().await;
    api.with_bearer(common::ADMIN_TOKEN).logout().await.unwrap();
    assert_eq!(state.recorded.lock().unwrap().logouts, 1);
}

#[tokio::test]
async fn test_logout_without_session_fails() {
    let (api, state) = common::test_backend().await;
    let err = api.logout().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(state.recorded.lock().unwrap().logouts, 0);
}

#[tokio::test]
async fn test_recover_posts_email() {
    let (api, state) = common::test_backend().await;
    api.recover("someone@example.com").await.unwrap();
    api.recover("nobody@example.com").await.unwrap();
    assert_eq!(
        state.recorded.lock().unwrap().recover_emails,
        vec!["someone@example.com".to_string(), "nobody@example.com".to_string()]
    );
}
