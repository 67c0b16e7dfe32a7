use dioxus::prelude::*;

use crate::domain::models::Document;
use crate::shared::utils::{file_icon, format_file_size};

#[component]
pub fn DocumentList(
    documents: Vec<Document>,
    is_deleting: bool,
    on_delete: EventHandler<String>,
) -> Element {
    if documents.is_empty() {
        return rsx! {
            div { class: "c-document-list c-document-list--empty",
                span { class: "c-document-list__empty-icon", "📂" }
                p { class: "c-document-list__empty-text", "No documents uploaded" }
            }
        };
    }

    rsx! {
        ul { class: "c-document-list",
            for document in documents {
                DocumentRow {
                    key: "{document.filename}",
                    document: document.clone(),
                    is_deleting,
                    on_delete,
                }
            }
        }
    }
}

#[component]
fn DocumentRow(document: Document, is_deleting: bool, on_delete: EventHandler<String>) -> Element {
    let icon = file_icon(&document.filename);
    let size = format_file_size(document.size);
    let filename = document.filename.clone();

    rsx! {
        li { class: "c-document-item",
            span { class: "c-document-item__icon", "{icon}" }
            div { class: "c-document-item__info",
                span { class: "c-document-item__name", title: "{document.filename}", "{document.filename}" }
                span { class: "c-document-item__size", "{size}" }
            }
            button {
                class: "c-document-item__delete",
                r#type: "button",
                title: "Delete document",
                aria_label: "Delete {document.filename}",
                disabled: is_deleting,
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_delete.call(filename.clone());
                },
                "🗑️"
            }
        }
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;
    use crate::app::components::test_support::render;

    #[test]
    fn test_empty_collection_shows_empty_state() {
        fn Empty() -> Element {
            rsx! { DocumentList { documents: Vec::new(), is_deleting: false, on_delete: move |_: String| {} } }
        }

        let html = render(Empty);
        assert!(html.contains("No documents uploaded"));
        assert!(!html.contains("c-document-item"));
    }

    #[test]
    fn test_rows_show_icon_name_and_size() {
        fn Listed() -> Element {
            let documents = vec![
                Document { filename: "report.pdf".to_string(), size: 1536 },
                Document { filename: "notes.md".to_string(), size: 1_048_576 },
            ];
            rsx! { DocumentList { documents, is_deleting: false, on_delete: move |_: String| {} } }
        }

        let html = render(Listed);
        assert!(!html.contains("No documents uploaded"));
        assert!(html.contains("report.pdf"));
        assert!(html.contains("1.5 KB"));
        assert!(html.contains("notes.md"));
        assert!(html.contains("1 MB"));
        assert!(html.contains("📋"));
    }

    #[test]
    fn test_delete_buttons_disabled_while_deleting() {
        fn Busy() -> Element {
            let documents = vec![Document { filename: "a.txt".to_string(), size: 1 }];
            rsx! { DocumentList { documents, is_deleting: true, on_delete: move |_: String| {} } }
        }

        assert!(render(Busy).contains("disabled"));
    }
}
