use dioxus::prelude::*;

// Transient error banner (BEM: c-error)
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "c-error", role: "alert",
            span { class: "c-error__icon", "⚠️" }
            p { class: "c-error__text", "{message}" }
        }
    }
}

// Centered placeholder for empty lists and conversations (BEM: c-empty-state)
#[component]
pub fn EmptyState(
    #[props(into)] icon: String,
    #[props(into)] title: String,
    #[props(into)] description: String,
) -> Element {
    rsx! {
        div { class: "c-empty-state",
            div { class: "c-empty-state__icon", "{icon}" }
            h3 { class: "c-empty-state__title", "{title}" }
            p { class: "c-empty-state__description", "{description}" }
        }
    }
}

// Three bouncing dots shown while the assistant is answering
#[component]
pub fn TypingIndicator() -> Element {
    rsx! {
        div { class: "c-chat-message c-chat-message--assistant",
            div { class: "c-chat-bubble c-chat-bubble--assistant",
                div { class: "c-typing", aria_label: "Waiting for the answer",
                    span { class: "c-typing__dot" }
                    span { class: "c-typing__dot" }
                    span { class: "c-typing__dot" }
                }
            }
        }
    }
}
