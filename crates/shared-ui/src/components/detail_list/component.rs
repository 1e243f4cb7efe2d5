use dioxus::prelude::*;

/// A container for label/value pairs, such as a profile summary.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "detail-list", {children} }
    }
}

/// A single label/value row inside a `DetailList`.
///
/// An empty `value` renders as a dash.
#[component]
pub fn DetailItem(label: String, #[props(default)] value: String) -> Element {
    let value = if value.trim().is_empty() { "-".to_string() } else { value };
    rsx! {
        div { class: "detail-item",
            span { class: "detail-item-label", "{label}" }
            span { class: "detail-item-value", "{value}" }
        }
    }
}
