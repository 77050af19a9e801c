use client::ApiClient;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, StatusFilter};

/// Bind a port, then release it so nothing is listening there.
async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let api = ApiClient::new(closed_port_url().await).with_bearer("t");
    let err = api.list_job_orders(&StatusFilter::All).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Network);
    assert!(!err.is_session_expired());
}

#[tokio::test]
async fn test_unreachable_backend_login_is_network_error() {
    let api = ApiClient::new(closed_port_url().await);
    let err = api.login("admin", "admin123").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Network);
}
