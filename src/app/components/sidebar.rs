use dioxus::prelude::*;

use crate::app::components::{DocumentList, FileUpload};
use crate::domain::models::{Document, DocumentFile};
use crate::shared::errors::AppError;

/// Document panel: upload widget plus the list of uploaded documents.
/// Off-canvas on narrow viewports.
#[component]
pub fn Sidebar(
    documents: Vec<Document>,
    is_open: bool,
    is_uploading: bool,
    upload_progress: u8,
    is_deleting: bool,
    on_upload: EventHandler<DocumentFile>,
    on_upload_error: EventHandler<AppError>,
    on_delete: EventHandler<String>,
    on_close: EventHandler<()>,
) -> Element {
    let count = documents.len();
    let sidebar_class = if is_open {
        "c-sidebar c-sidebar--open"
    } else {
        "c-sidebar"
    };

    rsx! {
        if is_open {
            div {
                class: "c-sidebar-backdrop",
                onclick: move |_| on_close.call(()),
            }
        }

        aside { class: "{sidebar_class}",
            div { class: "c-sidebar__header",
                h1 { class: "c-sidebar__title", "RAG Document Chat" }
                button {
                    class: "c-sidebar__close",
                    r#type: "button",
                    aria_label: "Close sidebar",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }

            div { class: "c-sidebar__section",
                FileUpload {
                    is_uploading,
                    progress: upload_progress,
                    on_upload,
                    on_error: on_upload_error,
                }
            }

            div { class: "c-sidebar__section c-sidebar__section--grow",
                h2 { class: "c-sidebar__heading", "Documents ({count})" }
                DocumentList { documents, is_deleting, on_delete }
            }
        }
    }
}
