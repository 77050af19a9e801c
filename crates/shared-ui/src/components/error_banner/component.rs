use dioxus::prelude::*;

/// Inline alert for a failed request. The page stays interactive.
#[component]
pub fn ErrorBanner(
    message: String,
    /// Shows a dismiss button when set.
    #[props(default)]
    on_dismiss: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "error-banner", role: "alert",
            span { class: "error-banner-message", "{message}" }
            if let Some(handler) = on_dismiss {
                button {
                    r#type: "button",
                    class: "error-banner-dismiss",
                    aria_label: "Dismiss",
                    onclick: move |evt| handler.call(evt),
                    "\u{00d7}"
                }
            }
        }
    }
}
