use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{filter_view, service_label, AppErrorKind, CustomerOrderStatus, StatusFilter};

#[tokio::test]
async fn test_list_customer_orders_bare_array() {
    let (api, _state) = common::test_backend().await;
    let orders = api
        .with_bearer(common::ADMIN_TOKEN)
        .list_customer_orders()
        .await
        .unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].order_number, "CO-2026-0010");
    assert_eq!(orders[0].status, CustomerOrderStatus::Processing);
}

#[tokio::test]
async fn test_list_customer_orders_tolerates_nulls() {
    let (api, _state) = common::test_backend().await;
    let orders = api
        .with_bearer(common::ADMIN_TOKEN)
        .list_customer_orders()
        .await
        .unwrap();
    let sparse = &orders[1];
    assert!(sparse.services.is_empty());
    assert_eq!(sparse.vehicle_info.make, "");
    assert_eq!(sparse.created_at, None);
}

#[tokio::test]
async fn test_list_customer_orders_filters_in_memory() {
    let (api, _state) = common::test_backend().await;
    let orders = api
        .with_bearer(common::ADMIN_TOKEN)
        .list_customer_orders()
        .await
        .unwrap();

    let pending = filter_view(&orders, &StatusFilter::parse("pending"), "");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].customer_name, "Andres Bonifacio");

    let by_vehicle = filter_view(&orders, &StatusFilter::All, "montero");
    assert_eq!(by_vehicle.len(), 1);
    assert_eq!(by_vehicle[0].id, 10);
}

#[tokio::test]
async fn test_list_customer_orders_requires_session() {
    let (api, _state) = common::test_backend().await;
    let err = api.list_customer_orders().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_get_customer_order_success() {
    let (api, _state) = common::test_backend().await;
    let order = api
        .with_bearer(common::ADMIN_TOKEN)
        .get_customer_order(10)
        .await
        .unwrap();
    assert_eq!(order.vehicle_info.year, "2018");
    assert_eq!(order.vehicle_info.plate_number, "XYZ 987");
    assert_eq!(order.services.len(), 2);
    assert_eq!(service_label(&order.services[0].kind), "Seat Covers");
    assert_eq!(
        order.services[0].option_lines(),
        vec![("Material", "Leather"), ("Design", "Diamond stitch")]
    );
    assert!(order.services[1].option_lines().is_empty());
    assert_eq!(order.notes, "Deliver before fiesta");
}

#[tokio::test]
async fn test_get_customer_order_not_found() {
    let (api, _state) = common::test_backend().await;
    let err = api
        .with_bearer(common::ADMIN_TOKEN)
        .get_customer_order(404)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}
