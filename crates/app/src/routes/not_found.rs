use dioxus::prelude::*;

use crate::routes::Route;

/// Where to send someone who mistyped a URL: the list page of the section
/// they were in, otherwise home.
fn way_back(segments: &[String]) -> (Route, &'static str) {
    match segments.first().map(String::as_str) {
        Some("sales") => (Route::JobOrderList {}, "Back to Job Orders"),
        Some("customer-orders") => (Route::CustomerOrderList {}, "Back to Customer Orders"),
        _ => (Route::Home {}, "Back to Home"),
    }
}

/// Catch-all for unknown paths and malformed ids such as `/sales/abc`.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    let (target, link_text) = way_back(&route);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "Nothing lives at "
                    code { "{path}" }
                    "."
                }
                Link { to: target, class: "not-found-link", "{link_text}" }
            }
        }
    }
}
