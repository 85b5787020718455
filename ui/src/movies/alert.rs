use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Warning,
    Info,
}

impl AlertKind {
    fn modifier(self) -> &'static str {
        match self {
            Self::Error => "status-alert--error",
            Self::Warning => "status-alert--warning",
            Self::Info => "status-alert--info",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Error => "⚠️",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
        }
    }
}

/// Inline page-level notice (fetch failures, empty data).
#[component]
pub fn StatusAlert(kind: AlertKind, message: String, description: Option<String>) -> Element {
    rsx! {
        div { class: "status-alert {kind.modifier()}", role: "alert",
            span { class: "status-alert__icon", aria_hidden: "true", "{kind.icon()}" }
            div { class: "status-alert__body",
                strong { class: "status-alert__message", "{message}" }
                if let Some(detail) = description {
                    p { class: "status-alert__description", "{detail}" }
                }
            }
        }
    }
}
