use dioxus::prelude::*;

/// Tone of an inline message.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertVariant {
    #[default]
    Info,
    Success,
    Error,
}

impl AlertVariant {
    fn class(&self) -> &'static str {
        match self {
            AlertVariant::Info => "info",
            AlertVariant::Success => "success",
            AlertVariant::Error => "error",
        }
    }
}

/// Inline status message for forms and pages.
#[component]
pub fn Alert(#[props(default)] variant: AlertVariant, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "alert",
            role: "alert",
            "data-style": variant.class(),
            {children}
        }
    }
}
