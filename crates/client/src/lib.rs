//! REST client for the Seatmakers backend.
//!
//! Every endpoint answers with the `{ status, data, message }` envelope.
//! Non-2xx responses are mapped into [`AppError`] through
//! [`AppError::from_status`], so a 401 anywhere surfaces as
//! `AppErrorKind::Unauthorized`.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared_types::{
    try_normalize_list, ApiEnvelope, AppError, AuthResponse, CustomerOrder, JobOrder,
    LoginRequest, RecoverRequest, Session, StatusFilter,
};

/// Thin wrapper around a shared `reqwest::Client`.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    bearer: Option<String>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.bearer == other.bearer
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            bearer: None,
        }
    }

    /// A copy of this client that authenticates with `token`.
    pub fn with_bearer(&self, token: impl Into<String>) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            bearer: Some(token.into()),
        }
    }

    /// Client for the given session, or an anonymous one.
    pub fn for_session(&self, session: Option<&Session>) -> Self {
        match session {
            Some(s) => self.with_bearer(s.token.clone()),
            None => Self {
                bearer: None,
                ..self.clone()
            },
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.bearer {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    // ── Auth ────────────────────────────────────────────────────

    /// `POST /api/auth/login`
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AppError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let resp = send(self.request(Method::POST, "/api/auth/login").json(&body)).await?;
        let auth: AuthResponse = read_data(resp).await?;
        tracing::info!(user = %auth.user.username, "Signed in");
        Ok(auth.into())
    }

    /// `POST /api/auth/logout`
    pub async fn logout(&self) -> Result<(), AppError> {
        send(self.request(Method::POST, "/api/auth/logout")).await?;
        Ok(())
    }

    /// `POST /api/auth/recover`. The backend answers the same way whether or
    /// not the address is registered.
    pub async fn recover(&self, email: &str) -> Result<(), AppError> {
        let body = RecoverRequest {
            email: email.to_string(),
        };
        send(self.request(Method::POST, "/api/auth/recover").json(&body)).await?;
        Ok(())
    }

    // ── Job orders ──────────────────────────────────────────────

    /// `GET /api/sales/job-orders[?status=S]`
    pub async fn list_job_orders(&self, status: &StatusFilter) -> Result<Vec<JobOrder>, AppError> {
        let mut req = self.request(Method::GET, "/api/sales/job-orders");
        if let Some(s) = status.query_param() {
            req = req.query(&[("status", s)]);
        }
        let resp = send(req).await?;
        read_list(resp, "job orders").await
    }

    /// `GET /api/sales/job-orders/{id}`
    pub async fn get_job_order(&self, id: i64) -> Result<JobOrder, AppError> {
        let path = format!("/api/sales/job-orders/{}", id);
        let resp = send(self.request(Method::GET, &path)).await?;
        read_data(resp).await
    }

    // ── Customer orders ─────────────────────────────────────────

    /// `GET /api/customer-orders`
    pub async fn list_customer_orders(&self) -> Result<Vec<CustomerOrder>, AppError> {
        let resp = send(self.request(Method::GET, "/api/customer-orders")).await?;
        read_list(resp, "customer orders").await
    }

    /// `GET /api/customer-orders/{id}`
    pub async fn get_customer_order(&self, id: i64) -> Result<CustomerOrder, AppError> {
        let path = format!("/api/customer-orders/{}", id);
        let resp = send(self.request(Method::GET, &path)).await?;
        read_data(resp).await
    }
}

/// Send the request and turn non-2xx responses into [`AppError`].
async fn send(req: RequestBuilder) -> Result<Response, AppError> {
    let resp = req.send().await.map_err(|e| {
        tracing::error!(error = %e, "Request failed");
        AppError::network(e.to_string())
    })?;

    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let message = resp
        .json::<ApiEnvelope<Value>>()
        .await
        .ok()
        .and_then(|env| env.message);
    tracing::warn!(status = status.as_u16(), message = ?message, "Backend returned an error");
    Err(AppError::from_status(status.as_u16(), message))
}

async fn read_json(resp: Response) -> Result<Value, AppError> {
    resp.json::<Value>()
        .await
        .map_err(|e| AppError::decode(e.to_string()))
}

/// Decode the envelope's `data` field. A body without an envelope is
/// decoded directly.
async fn read_data<T: DeserializeOwned>(resp: Response) -> Result<T, AppError> {
    let body = read_json(resp).await?;
    decode_data(body)
}

fn decode_data<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
    let payload = match body {
        Value::Object(mut map) if map.contains_key("data") => map.remove("data").unwrap_or(Value::Null),
        other => other,
    };
    serde_json::from_value(payload).map_err(AppError::from)
}

/// Lists come back either bare or wrapped in `{ data: [...] }`. Anything
/// else decodes to an empty list. Records that fail to decode are dropped
/// with a warning; the rest are kept.
async fn read_list<T: DeserializeOwned>(resp: Response, what: &str) -> Result<Vec<T>, AppError> {
    let body = read_json(resp).await?;
    Ok(keep_decodable(body, what))
}

fn keep_decodable<T: DeserializeOwned>(body: Value, what: &str) -> Vec<T> {
    match try_normalize_list(body) {
        Ok(decoded) => {
            for (index, e) in &decoded.rejected {
                tracing::warn!(index, error = %e, "Skipping malformed entry in {}", what);
            }
            decoded.items
        }
        Err(e) => {
            tracing::warn!(error = %e, "Unexpected {} response shape, treating as empty", what);
            Vec::new()
        }
    }
}
