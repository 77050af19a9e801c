use serde::{Deserialize, Serialize};

/// Staff role controlling which pages a user may open.
///
/// The backend stores roles as snake_case keys; anything it sends that is
/// not listed here is treated as "no role" and never granted access.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Administrator,
    Supervisor,
    SalesManager,
    Staff,
    SeatMaker,
    Sewer,
}

/// All roles in display order.
pub const ALL_ROLES: &[Role] = &[
    Role::Administrator,
    Role::Supervisor,
    Role::SalesManager,
    Role::Staff,
    Role::SeatMaker,
    Role::Sewer,
];

impl Role {
    /// Parse a backend role key. Unknown keys yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "administrator" => Some(Role::Administrator),
            "supervisor" => Some(Role::Supervisor),
            "sales_manager" => Some(Role::SalesManager),
            "staff" => Some(Role::Staff),
            "seat_maker" => Some(Role::SeatMaker),
            "sewer" => Some(Role::Sewer),
            _ => None,
        }
    }

    /// Backend key for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::Supervisor => "supervisor",
            Role::SalesManager => "sales_manager",
            Role::Staff => "staff",
            Role::SeatMaker => "seat_maker",
            Role::Sewer => "sewer",
        }
    }

    /// Human-readable name for the navbar.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Administrator => "Administrator",
            Role::Supervisor => "Supervisor",
            Role::SalesManager => "Sales Manager",
            Role::Staff => "Staff",
            Role::SeatMaker => "Seat Maker",
            Role::Sewer => "Sewer",
        }
    }
}

/// Authenticated user as returned by `/api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    /// Raw role key. Kept as a string so an unrecognised role still
    /// deserializes; use [`AuthUser::role`] to interpret it.
    #[serde(default, rename = "role")]
    pub role_key: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
}

impl AuthUser {
    pub fn role(&self) -> Option<Role> {
        self.role_key.as_deref().and_then(Role::parse)
    }

    /// Name for the navbar, falling back to the username.
    pub fn display_name(&self) -> &str {
        if self.full_name.is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }
}

/// A signed-in user together with the bearer token the backend issued.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: AuthUser,
}

/// Lifecycle of the process-wide session.
///
/// `Loading` lasts until the startup check has resolved; protected pages
/// defer every decision while in this state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Loading,
    Anonymous,
    Active(Session),
}

impl SessionState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Active(session) => Some(session),
            _ => None,
        }
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.session().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session().map(|s| s.token.as_str())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }
}

/// Credentials for `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: AuthUser,
}

impl From<AuthResponse> for Session {
    fn from(resp: AuthResponse) -> Self {
        Session {
            token: resp.token,
            user: resp.user,
        }
    }
}

/// Body for `POST /api/auth/recover`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecoverRequest {
    pub email: String,
}

/// Envelope every backend endpoint wraps its payload in:
/// `{ "status": "success", "data": ..., "message": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub status: String,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}
