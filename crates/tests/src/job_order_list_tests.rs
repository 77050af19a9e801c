use crate::common;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{filter_view, AppErrorKind, JobOrderStatus, StatusFilter};

#[tokio::test]
async fn test_list_job_orders_all() {
    let (api, state) = common::test_backend().await;
    let orders = api
        .with_bearer(common::ADMIN_TOKEN)
        .list_job_orders(&StatusFilter::All)
        .await
        .unwrap();
    assert_eq!(orders.len(), 3);
    assert_eq!(orders[0].job_order_id, "JO-2026-0001");
    assert!(state.recorded.lock().unwrap().job_order_queries[0].is_empty());
}

#[tokio::test]
async fn test_list_job_orders_forwards_status_query() {
    let (api, state) = common::test_backend().await;
    let filter = StatusFilter::parse("in_progress");
    let orders = api
        .with_bearer(common::ADMIN_TOKEN)
        .list_job_orders(&filter)
        .await
        .unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status, JobOrderStatus::InProgress);

    let recorded = state.recorded.lock().unwrap();
    assert_eq!(
        recorded.job_order_queries[0].get("status").map(String::as_str),
        Some("in_progress")
    );
}

#[tokio::test]
async fn test_list_job_orders_requires_session() {
    let (api, _state) = common::test_backend().await;
    let err = api.list_job_orders(&StatusFilter::All).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert!(err.is_session_expired());
}

#[tokio::test]
async fn test_list_job_orders_year_number_and_string() {
    let (api, _state) = common::test_backend().await;
    let orders = api
        .with_bearer(common::ADMIN_TOKEN)
        .list_job_orders(&StatusFilter::All)
        .await
        .unwrap();
    assert_eq!(orders[0].vehicle_summary().as_deref(), Some("2019 Toyota Vios"));
    assert_eq!(orders[1].vehicle_summary(), None);
    assert_eq!(orders[2].vehicle_summary().as_deref(), Some("2021 Honda City"));
}

#[tokio::test]
async fn test_list_job_orders_then_search() {
    let (api, _state) = common::test_backend().await;
    let orders = api
        .with_bearer(common::ADMIN_TOKEN)
        .list_job_orders(&StatusFilter::All)
        .await
        .unwrap();
    let visible = filter_view(&orders, &StatusFilter::All, "honda");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].customer_name, "Liza Reyes");
}

#[tokio::test]
async fn test_list_job_orders_bare_array() {
    let api = common::backend_returning(
        "/api/sales/job-orders",
        StatusCode::OK,
        json!([{"id": 5, "jobOrderId": "JO-5", "status": "delivered"}]),
    )
    .await;
    let orders = api.list_job_orders(&StatusFilter::All).await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status, JobOrderStatus::Delivered);
    assert_eq!(orders[0].customer_name, "");
}

#[tokio::test]
async fn test_list_job_orders_unexpected_shape_is_empty() {
    let api = common::backend_returning(
        "/api/sales/job-orders",
        StatusCode::OK,
        json!({"status": "success", "data": {"rows": []}}),
    )
    .await;
    let orders = api.list_job_orders(&StatusFilter::All).await.unwrap();
    assert!(orders.is_empty());
}

#[tokio::test]
async fn test_list_job_orders_unknown_status_survives() {
    let api = common::backend_returning(
        "/api/sales/job-orders",
        StatusCode::OK,
        json!({"status": "success", "data": [{"id": 8, "jobOrderId": "JO-8", "status": "on_hold"}]}),
    )
    .await;
    let orders = api.list_job_orders(&StatusFilter::All).await.unwrap();
    assert_eq!(orders[0].status, JobOrderStatus::Other("on_hold".into()));
}

#[tokio::test]
async fn test_list_job_orders_server_error() {
    let api = common::backend_returning(
        "/api/sales/job-orders",
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"status": "error", "message": "Database unavailable"}),
    )
    .await;
    let err = api.list_job_orders(&StatusFilter::All).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Server);
    assert_eq!(err.message, "Database unavailable");
}

#[tokio::test]
async fn test_list_job_orders_null_amounts_keep_every_row() {
    let api = common::backend_returning(
        "/api/sales/job-orders",
        StatusCode::OK,
        json!({"status": "success", "data": [
            {"id": 1, "jobOrderId": "JO-1", "status": "pending", "totalPrice": 800.0},
            {"id": 2, "jobOrderId": "JO-2", "status": "pending", "totalPrice": null, "balance": null}
        ]}),
    )
    .await;
    let orders = api.list_job_orders(&StatusFilter::All).await.unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].total_price, 800.0);
    assert_eq!(orders[1].total_price, 0.0);
}

#[tokio::test]
async fn test_list_job_orders_skips_only_the_broken_row() {
    let api = common::backend_returning(
        "/api/sales/job-orders",
        StatusCode::OK,
        json!([
            {"id": 1, "jobOrderId": "JO-1", "status": "pending"},
            {"id": "two", "jobOrderId": "JO-2", "status": "pending"},
            {"id": 3, "jobOrderId": "JO-3", "status": "completed"}
        ]),
    )
    .await;
    let orders = api.list_job_orders(&StatusFilter::All).await.unwrap();
    let ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![1, 3]);
}
