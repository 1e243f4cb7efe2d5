use dioxus::prelude::*;

/// Loading indicator with a caption.
#[component]
pub fn Spinner(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "spinner-wrapper", role: "status",
            div { class: "spinner" }
            p { class: "spinner-message", "{message}" }
        }
    }
}
