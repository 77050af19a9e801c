use dioxus::prelude::*;

/// Bordered surface for one section of a page.
///
/// A non-empty `heading` renders the header row; `description` sits under
/// it in muted text. Body content goes in [`CardContent`], actions in
/// [`CardFooter`].
#[component]
pub fn Card(
    #[props(default)] heading: String,
    #[props(default)] description: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            if !heading.is_empty() {
                header { class: "card-header",
                    h3 { class: "card-title", "{heading}" }
                    if !description.is_empty() {
                        p { class: "card-description", "{description}" }
                    }
                }
            }
            {children}
        }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        footer { class: "card-footer", {children} }
    }
}
