use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{decide_access, AccessDecision, Role};
use shared_ui::SkeletonRows;

/// Decide access for the current session against `allowed`.
pub fn use_access(allowed: &'static [Role]) -> AccessDecision {
    let auth = use_auth();
    let guard = auth.session.read();
    let decision = decide_access(&guard, allowed);
    decision
}

/// Render `children` only for roles in `allowed`.
///
/// Children are not mounted until access is granted, so any fetch they
/// start never runs for a viewer who is about to be redirected home.
#[component]
pub fn RoleGate(allowed: &'static [Role], children: Element) -> Element {
    let auth = use_auth();
    let decision = use_access(allowed);

    use_effect(move || {
        if decide_access(&auth.session.read(), allowed) == AccessDecision::Redirect {
            tracing::info!("Role not permitted here, redirecting home");
            navigator().replace(Route::Home {});
        }
    });

    match decision {
        AccessDecision::Granted => rsx! { {children} },
        AccessDecision::Pending => rsx! { SkeletonRows { rows: 3 } },
        AccessDecision::Redirect => rsx! {},
    }
}
