use std::future::Future;

use client::ApiClient;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use shared_types::{AppError, AuthUser, Role, Session, SessionState};

/// Process-wide session, provided once by `App` and read by every page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<SessionState>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(SessionState::Loading),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().session().is_some()
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.session.read().user().cloned()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.read().user().and_then(AuthUser::role)
    }

    /// Settle the startup check. Sessions live in memory only, so a fresh
    /// load never has one to restore.
    pub fn resolve_startup(&mut self) {
        if self.session.read().is_loading() {
            self.session.set(SessionState::Anonymous);
        }
    }

    pub fn sign_in(&mut self, session: Session) {
        self.session.set(SessionState::Active(session));
    }

    pub fn clear_auth(&mut self) {
        self.session.set(SessionState::Anonymous);
    }

    /// The backend rejected the token. The guard layout notices the
    /// anonymous session and sends the user to the sign-in page.
    pub fn expire(&mut self) {
        if self.is_authenticated() {
            tracing::warn!("Session expired, signing out");
        }
        self.clear_auth();
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// API client carrying the current session's bearer token, if any.
pub fn use_api() -> ApiClient {
    let auth = use_auth();
    let base = use_context::<ApiClient>();
    let guard = auth.session.read();
    let api = base.for_session(guard.session());
    api
}

/// Sign out: tell the backend, then drop the local session whatever the
/// backend answered.
pub fn sign_out(api: ApiClient, auth: AuthState) {
    end_session(auth, async move { api.logout().await });
}

/// The logout request runs on the root scope: clearing the session
/// unmounts the layout that asked for it.
fn end_session<F>(mut auth: AuthState, logout: F)
where
    F: Future<Output = Result<(), AppError>> + 'static,
{
    spawn_forever(async move {
        if let Err(e) = logout.await {
            tracing::warn!(error = %e, "Logout request failed");
        }
    });
    auth.clear_auth();
}
