//! Message rendering component
//!
//! User turns are shown as plain text, assistant turns as markdown with an
//! optional list of cited sources.

use chrono::{DateTime, Local, Utc};
use dioxus::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

use crate::domain::models::{ChatMessage, Source};

/// Helper function to render Markdown to HTML.
/// Raw HTML in the input is escaped, never passed through.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// "report.pdf, page 3", or just the name when the page is unknown
pub fn format_citation(source: &Source) -> String {
    if source.has_page() {
        format!("{}, page {}", source.source, source.page)
    } else {
        source.source.clone()
    }
}

/// `HH:MM` in the viewer's time zone
pub fn format_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M").to_string()
}

/// Renders a single chat turn
#[component]
pub fn MessageItem(message: ChatMessage) -> Element {
    let time = format_time(&message.timestamp);

    if message.is_user() {
        return rsx! {
            li { class: "c-chat-message c-chat-message--user animate-fade-in",
                div { class: "c-chat-bubble c-chat-bubble--user",
                    div { class: "c-chat-bubble__content",
                        div { class: "u-whitespace-pre-wrap", {message.content.clone()} }
                    }
                    span { class: "c-chat-bubble__timestamp", "{time}" }
                }
            }
        };
    }

    let html_content = render_markdown(&message.content);
    rsx! {
        li { class: "c-chat-message c-chat-message--assistant animate-fade-in",
            div { class: "c-chat-bubble c-chat-bubble--assistant",
                div { class: "c-chat-bubble__content",
                    div {
                        class: "c-prose c-prose--sm",
                        dangerous_inner_html: "{html_content}"
                    }
                }
                if !message.sources.is_empty() {
                    SourceList { sources: message.sources.clone() }
                }
                span { class: "c-chat-bubble__timestamp", "{time}" }
            }
        }
    }
}

/// Collapsible citations. Collapsed by default.
#[component]
fn SourceList(sources: Vec<Source>) -> Element {
    let mut expanded = use_signal(|| false);

    rsx! {
        SourceListView {
            sources,
            expanded: expanded(),
            on_toggle: move |_| expanded.toggle(),
        }
    }
}

#[component]
fn SourceListView(sources: Vec<Source>, expanded: bool, on_toggle: EventHandler<()>) -> Element {
    let verb = if expanded { "Hide" } else { "Show" };
    let count = sources.len();

    rsx! {
        div { class: "c-sources",
            button {
                class: "c-sources__toggle",
                r#type: "button",
                aria_expanded: "{expanded}",
                onclick: move |_| on_toggle.call(()),
                "{verb} sources ({count})"
            }
            if expanded {
                ol { class: "c-sources__list",
                    for source in sources.iter() {
                        li { class: "c-sources__item", {format_citation(source)} }
                    }
                }
            }
        }
    }
}
