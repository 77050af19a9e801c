use dioxus::prelude::*;
use shared_types::filter_chip_label;

/// Single-select row of status chips. `options` are status keys; the chip
/// text is derived from the key.
#[component]
pub fn FilterChips(
    options: Vec<String>,
    selected: String,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "filter-chips", role: "group",
            for option in options {
                FilterChip {
                    key: "{option}",
                    active: option == selected,
                    label: filter_chip_label(&option),
                    value: option.clone(),
                    on_select: on_select,
                }
            }
        }
    }
}

#[component]
fn FilterChip(
    active: bool,
    label: String,
    value: String,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: if active { "filter-chip active" } else { "filter-chip" },
            aria_pressed: if active { "true" } else { "false" },
            onclick: move |_| on_select.call(value.clone()),
            "{label}"
        }
    }
}
