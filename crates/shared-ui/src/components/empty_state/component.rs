use dioxus::prelude::*;

/// Centered message shown in place of a list that has no rows.
#[component]
pub fn EmptyState(
    title: String,
    #[props(default)] description: String,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "empty-state",
            h3 { class: "empty-state-title", "{title}" }
            if !description.is_empty() {
                p { class: "empty-state-description", "{description}" }
            }
            {children}
        }
    }
}
