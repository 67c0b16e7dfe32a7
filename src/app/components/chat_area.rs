//! Conversation view and question input

use dioxus::prelude::*;

use crate::app::components::{EmptyState, MessageItem, TypingIndicator};
use crate::domain::models::ChatMessage;
use crate::shared::hooks::use_scroll_to_end;

const MESSAGES_END_ID: &str = "messages-end";

/// Trimmed draft to send, or `None` when the submission is a no-op
pub fn prepare_submission(draft: &str, is_loading: bool) -> Option<String> {
    let content = draft.trim();
    if content.is_empty() || is_loading {
        return None;
    }
    Some(content.to_string())
}

pub fn input_placeholder(has_documents: bool, is_loading: bool) -> &'static str {
    if !has_documents {
        "Upload a document first..."
    } else if is_loading {
        "Waiting for the answer..."
    } else {
        "Ask a question..."
    }
}

#[component]
pub fn ChatArea(
    messages: Vec<ChatMessage>,
    has_documents: bool,
    is_loading: bool,
    on_send: EventHandler<String>,
) -> Element {
    let mut draft = use_signal(String::new);
    let mut is_composing = use_signal(|| false);

    use_scroll_to_end(MESSAGES_END_ID, messages.len(), is_loading);

    let mut submit = move || {
        let submission = prepare_submission(&draft.read(), is_loading);
        if let Some(content) = submission {
            draft.set(String::new());
            on_send.call(content);
        }
    };

    // Enter sends, Shift+Enter inserts a newline
    let handle_keydown = move |evt: Event<KeyboardData>| {
        if evt.key() == Key::Enter
            && !evt.modifiers().contains(Modifiers::SHIFT)
            && !is_composing()
        {
            evt.prevent_default();
            submit();
        }
    };

    let input_disabled = !has_documents || is_loading;
    let placeholder = input_placeholder(has_documents, is_loading);
    let can_send = !input_disabled && !draft.read().trim().is_empty();

    rsx! {
        section { class: "c-chat",
            div { class: "c-chat__messages",
                if messages.is_empty() && !is_loading {
                    if has_documents {
                        EmptyState {
                            icon: "💬",
                            title: "Ready to Chat",
                            description: "Ask a question about your uploaded documents.",
                        }
                    } else {
                        EmptyState {
                            icon: "📚",
                            title: "No Documents Yet",
                            description: "Upload a document from the sidebar to start asking questions.",
                        }
                    }
                } else {
                    ul { class: "c-chat__list",
                        for message in messages.iter() {
                            MessageItem { key: "{message.id}", message: message.clone() }
                        }
                    }
                    if is_loading {
                        TypingIndicator {}
                    }
                }
                div { id: MESSAGES_END_ID }
            }

            form {
                class: "c-chat-input",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    submit();
                },
                textarea {
                    class: "c-chat-input__textarea",
                    value: "{draft}",
                    placeholder: "{placeholder}",
                    disabled: input_disabled,
                    rows: "1",
                    oninput: move |evt| draft.set(evt.value()),
                    onkeydown: handle_keydown,
                    oncompositionstart: move |_| is_composing.set(true),
                    oncompositionend: move |_| is_composing.set(false),
                }
                button {
                    class: "c-chat-input__send",
                    r#type: "submit",
                    disabled: !can_send,
                    aria_label: "Send",
                    if is_loading {
                        span { class: "c-chat-input__spinner" }
                    } else {
                        "➤"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_draft_is_not_sent() {
        assert_eq!(prepare_submission("", false), None);
        assert_eq!(prepare_submission("  \n\t ", false), None);
    }

    #[test]
    fn test_draft_is_trimmed() {
        assert_eq!(
            prepare_submission("  What is this about?\n", false),
            Some("What is this about?".to_string())
        );
    }

    #[test]
    fn test_nothing_is_sent_while_waiting() {
        assert_eq!(prepare_submission("next question", true), None);
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(input_placeholder(false, false), "Upload a document first...");
        assert_eq!(input_placeholder(false, true), "Upload a document first...");
        assert_eq!(input_placeholder(true, true), "Waiting for the answer...");
        assert_eq!(input_placeholder(true, false), "Ask a question...");
    }
}
