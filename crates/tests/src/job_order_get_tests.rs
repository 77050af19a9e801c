use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, JobOrderStatus};

#[tokio::test]
async fn test_get_job_order_success() {
    let (api, _state) = common::test_backend().await;
    let order = api.with_bearer(common::ADMIN_TOKEN).get_job_order(1).await.unwrap();
    assert_eq!(order.job_order_id, "JO-2026-0001");
    assert_eq!(order.status, JobOrderStatus::Pending);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].line_total(), 9000.0);
    assert_eq!(order.balance, 6000.0);
    assert_eq!(order.payment_status, "partial");
}

#[tokio::test]
async fn test_get_job_order_without_vehicle() {
    let (api, _state) = common::test_backend().await;
    let order = api.with_bearer(common::ADMIN_TOKEN).get_job_order(2).await.unwrap();
    assert!(order.vehicle_info.is_none());
    assert!(order.items.is_empty());
}

#[tokio::test]
async fn test_get_job_order_not_found() {
    let (api, _state) = common::test_backend().await;
    let err = api.with_bearer(common::ADMIN_TOKEN).get_job_order(999).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "Job order not found");
}

#[tokio::test]
async fn test_get_job_order_expired_token() {
    let (api, _state) = common::test_backend().await;
    let err = api.with_bearer("stale-token").get_job_order(1).await.unwrap_err();
    assert!(err.is_session_expired());
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}
