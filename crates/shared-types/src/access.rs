use crate::models::{Role, SessionState};

/// Roles allowed to open the customer-order pages.
pub const CUSTOMER_ORDER_ROLES: &[Role] =
    &[Role::Administrator, Role::Supervisor, Role::SalesManager];

/// Roles allowed to open the job-order (sales) pages.
pub const JOB_ORDER_ROLES: &[Role] = &[
    Role::Administrator,
    Role::Supervisor,
    Role::SalesManager,
    Role::Staff,
];

/// Capability check: is `role` a member of `allowed`?
///
/// A missing or unrecognised role is never allowed.
pub fn has_access(role: Option<Role>, allowed: &[Role]) -> bool {
    role.is_some_and(|r| allowed.contains(&r))
}

/// Outcome of gating a protected page on the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The session has not resolved yet; render nothing and fetch nothing.
    Pending,
    /// The viewer may see the page; data fetching may start.
    Granted,
    /// No session, or a role outside the allow-list; navigate away.
    Redirect,
}

impl AccessDecision {
    pub fn is_granted(self) -> bool {
        self == AccessDecision::Granted
    }
}

/// Decide access for a protected page.
pub fn decide_access(session: &SessionState, allowed: &[Role]) -> AccessDecision {
    match session {
        SessionState::Loading => AccessDecision::Pending,
        SessionState::Anonymous => AccessDecision::Redirect,
        SessionState::Active(s) => {
            if has_access(s.user.role(), allowed) {
                AccessDecision::Granted
            } else {
                AccessDecision::Redirect
            }
        }
    }
}
