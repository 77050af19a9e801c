use std::future::Future;

use dioxus::prelude::*;
use shared_types::{AppError, FetchState, FetchTicket};

use crate::auth::AuthState;

/// Start a fetch into `state`, superseding any fetch still in flight.
///
/// Loading is cleared for every current result. Failures are logged and
/// surface as `error_text`; a 401 also drops the session, which sends the
/// user back to the sign-in page. Superseded results are ignored.
pub fn spawn_fetch<D, Fut>(
    mut state: Signal<FetchState<D>>,
    mut auth: AuthState,
    error_text: &'static str,
    request: Fut,
) where
    D: 'static,
    Fut: Future<Output = Result<D, AppError>> + 'static,
{
    let ticket = state.write().begin();
    spawn(async move {
        let result = request.await;
        if settle(&mut state.write(), ticket, result, error_text) {
            auth.expire();
        }
    });
}

/// Write a finished request into `state`. Returns true when the backend
/// rejected the session, which only counts for the current request.
fn settle<D>(
    state: &mut FetchState<D>,
    ticket: FetchTicket,
    result: Result<D, AppError>,
    error_text: &str,
) -> bool {
    if !state.is_current(ticket) {
        tracing::debug!("Dropped response from a superseded request");
        return false;
    }
    let expired = matches!(&result, Err(err) if err.is_session_expired());
    if let Err(err) = &result {
        tracing::error!(error = %err, "{}", error_text);
    }
    state.finish(ticket, result, error_text);
    expired
}
