use client::ApiClient;
use dioxus::prelude::*;
use shared_types::AppConfig;

mod auth;
mod config;
mod fetch;
mod format_helpers;
mod role_gate;
mod routes;
use auth::AuthState;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(config::load);
    let api_base = config.api.base_url.clone();

    use_context_provider(|| config.clone());
    use_context_provider(|| ApiClient::new(api_base));
    let mut auth = use_context_provider(AuthState::new);

    // Startup session check: protected routes wait on this before deciding.
    use_hook(move || auth.resolve_startup());

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        document::Title { "{config.branding.business_name}" }
        Router::<Route> {}
    }
}

/// Business name from the loaded configuration.
pub fn use_business_name() -> String {
    use_context::<AppConfig>().branding.business_name
}
