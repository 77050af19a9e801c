use dioxus::prelude::*;

use crate::Input;

/// Search box above a list. Every keystroke is reported through
/// `on_search`; extra controls (filter chips) go in `children`.
#[component]
pub fn SearchBar(
    query: String,
    #[props(default = "Search...".to_string())] placeholder: String,
    on_search: EventHandler<String>,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar", role: "search",
            Input {
                value: query,
                placeholder: placeholder,
                input_type: "search",
                on_input: move |evt: FormEvent| on_search.call(evt.value()),
            }
            {children}
        }
    }
}
