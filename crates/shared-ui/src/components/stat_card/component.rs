use dioxus::prelude::*;

/// A single headline number, e.g. GPA or total credits.
#[component]
pub fn StatCard(label: String, value: String, #[props(default)] hint: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card",
            span { class: "stat-card-label", "{label}" }
            span { class: "stat-card-value", "{value}" }
            if !hint.is_empty() {
                span { class: "stat-card-hint", "{hint}" }
            }
        }
    }
}

/// Responsive row of `StatCard`s.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        div { class: "stat-grid", {children} }
    }
}
