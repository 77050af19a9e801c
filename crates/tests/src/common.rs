use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use client::ApiClient;
use serde_json::{json, Value};

pub const ADMIN_TOKEN: &str = "tok-admin";
pub const STAFF_TOKEN: &str = "tok-staff";

/// What the stub backend saw, for assertions on outgoing requests.
#[derive(Default)]
pub struct Recorded {
    pub job_order_queries: Vec<HashMap<String, String>>,
    pub recover_emails: Vec<String>,
    pub logouts: usize,
}

#[derive(Clone, Default)]
pub struct StubState {
    pub recorded: Arc<Mutex<Recorded>>,
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Stub backend crashed");
    });
    format!("http://{}", addr)
}

/// Start the default stub backend. Returns an anonymous client and the
/// shared record of received requests.
pub async fn test_backend() -> (ApiClient, StubState) {
    let state = StubState::default();
    let router = backend_router(state.clone());
    let base = spawn(router).await;
    (ApiClient::new(base), state)
}

/// A stub whose only route answers `GET path` with `body`.
pub async fn backend_returning(path: &str, status: StatusCode, body: Value) -> ApiClient {
    let router = Router::new().route(path, get(move || async move { (status, Json(body)) }));
    let base = spawn(router).await;
    ApiClient::new(base).with_bearer(ADMIN_TOKEN)
}

pub fn backend_router(state: StubState) -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/recover", post(recover))
        .route("/api/sales/job-orders", get(list_job_orders))
        .route("/api/sales/job-orders/{id}", get(get_job_order))
        .route("/api/customer-orders", get(list_customer_orders))
        .route("/api/customer-orders/{id}", get(get_customer_order))
        .with_state(state)
}

fn user_json(token: &str) -> Option<Value> {
    match token {
        ADMIN_TOKEN => Some(json!({
            "id": 1,
            "username": "admin",
            "email": "admin@seatmakers.test",
            "fullName": "Ana Admin",
            "role": "administrator",
            "branch": "Main"
        })),
        STAFF_TOKEN => Some(json!({
            "id": 4,
            "username": "staff",
            "email": "staff@seatmakers.test",
            "fullName": "Sam Staff",
            "role": "staff",
            "branch": "Branch A"
        })),
        _ => None,
    }
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"status": "error", "message": "Authentication required"})),
    )
}

/// Reject requests without a known bearer token.
fn authorize(headers: &HeaderMap) -> Result<(), (StatusCode, Json<Value>)> {
    match bearer(headers).as_deref().and_then(user_json) {
        Some(_) => Ok(()),
        None => Err(unauthorized()),
    }
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let username = body["username"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    let token = match (username, password) {
        ("admin", "admin123") => ADMIN_TOKEN,
        ("staff", "staff123") => STAFF_TOKEN,
        _ => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({"status": "error", "message": "Invalid credentials"})),
            )
        }
    };
    let user = user_json(token).unwrap_or(Value::Null);
    (
        StatusCode::OK,
        Json(json!({"status": "success", "data": {"token": token, "user": user}})),
    )
}

async fn logout(State(state): State<StubState>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if let Err(e) = authorize(&headers) {
        return e;
    }
    state.recorded.lock().unwrap().logouts += 1;
    (
        StatusCode::OK,
        Json(json!({"status": "success", "message": "Logged out successfully"})),
    )
}

async fn recover(State(state): State<StubState>, Json(body): Json<Value>) -> Json<Value> {
    let email = body["email"].as_str().unwrap_or_default().to_string();
    state.recorded.lock().unwrap().recover_emails.push(email);
    Json(json!({"status": "success", "message": "If the email exists, a recovery link has been sent"}))
}

pub fn job_orders() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "jobOrderId": "JO-2026-0001",
            "customerName": "Maria Santos",
            "customerPhone": "09171234567",
            "vehicleInfo": {"make": "Toyota", "model": "Vios", "year": 2019, "plateNumber": "ABC 1234"},
            "description": "Seat cover replacement",
            "items": [{"name": "Leather seat cover", "quantity": 2, "unitPrice": 4500}],
            "totalPrice": 9000,
            "downPayment": 3000,
            "balance": 6000,
            "paymentStatus": "partial",
            "status": "pending",
            "createdAt": "2026-01-20T09:35:00"
        }),
        json!({
            "id": 2,
            "jobOrderId": "JO-2026-0002",
            "customerName": "Pedro Cruz",
            "vehicleInfo": null,
            "description": "Ceiling repair",
            "totalPrice": 12500,
            "status": "in_progress",
            "createdAt": "2026-01-21T14:00:00"
        }),
        json!({
            "id": 3,
            "jobOrderId": "JO-2026-0003",
            "customerName": "Liza Reyes",
            "vehicleInfo": {"make": "Honda", "model": "City", "year": "2021"},
            "totalPrice": 99.5,
            "status": "completed",
            "createdAt": "2026-01-22T08:10:00"
        }),
    ]
}

async fn list_job_orders(
    State(state): State<StubState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    if let Err(e) = authorize(&headers) {
        return e;
    }
    let status = params.get("status").cloned();
    state.recorded.lock().unwrap().job_order_queries.push(params);

    let items: Vec<Value> = job_orders()
        .into_iter()
        .filter(|jo| status.as_deref().map_or(true, |s| jo["status"] == s))
        .collect();
    (StatusCode::OK, Json(json!({"status": "success", "data": items})))
}

async fn get_job_order(headers: HeaderMap, Path(id): Path<i64>) -> (StatusCode, Json<Value>) {
    if let Err(e) = authorize(&headers) {
        return e;
    }
    match job_orders().into_iter().find(|jo| jo["id"] == id) {
        Some(order) => (StatusCode::OK, Json(json!({"status": "success", "data": order}))),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"status": "error", "message": "Job order not found"})),
        ),
    }
}

pub fn customer_orders() -> Vec<Value> {
    vec![
        json!({
            "id": 10,
            "orderNumber": "CO-2026-0010",
            "customerName": "Jose Rizal",
            "customerPhone": "09181112222",
            "customerEmail": "jose@example.com",
            "customerAddress": "Calamba, Laguna",
            "vehicleInfo": {"make": "Mitsubishi", "model": "Montero", "year": "2018", "plateNumber": "XYZ 987"},
            "services": [
                {"type": "seat_covers", "material": "Leather", "design": "Diamond stitch"},
                {"type": "steering_wrap"}
            ],
            "notes": "Deliver before fiesta",
            "status": "processing",
            "branchName": "Main",
            "createdAt": "2026-02-01T10:00:00"
        }),
        json!({
            "id": 11,
            "orderNumber": "CO-2026-0011",
            "customerName": "Andres Bonifacio",
            "vehicleInfo": null,
            "services": null,
            "status": "pending",
            "createdAt": null
        }),
    ]
}

/// Customer orders come back as a bare array, unlike job orders.
async fn list_customer_orders(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if let Err(e) = authorize(&headers) {
        return e;
    }
    (StatusCode::OK, Json(Value::Array(customer_orders())))
}

async fn get_customer_order(headers: HeaderMap, Path(id): Path<i64>) -> (StatusCode, Json<Value>) {
    if let Err(e) = authorize(&headers) {
        return e;
    }
    match customer_orders().into_iter().find(|o| o["id"] == id) {
        Some(order) => (StatusCode::OK, Json(json!({"status": "success", "data": order}))),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"status": "error", "message": "Customer order not found"})),
        ),
    }
}
