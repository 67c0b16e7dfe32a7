//! Root page: owns the application state and wires every user action to
//! the controller

use dioxus::prelude::*;

use crate::app::components::{ChatArea, ErrorBanner, Sidebar};
use crate::app::layouts::Header;
use crate::domain::models::DocumentFile;
use crate::shared::errors::AppError;
use crate::shared::hooks::{use_app_controller, use_app_state};

#[component]
pub fn ChatPage() -> Element {
    let state = use_app_state();
    let controller = use_app_controller(state);

    // Initial document list, once per mount
    let mount_controller = controller.clone();
    use_effect(move || {
        let controller = mount_controller.clone();
        spawn(async move {
            let _ = controller.fetch_documents().await;
        });
    });

    let upload_controller = controller.clone();
    let on_upload = move |file: DocumentFile| {
        let controller = upload_controller.clone();
        spawn(async move {
            let _ = controller.upload(file).await;
        });
    };

    let error_controller = controller.clone();
    let on_upload_error = move |e: AppError| {
        tracing::warn!(error = %e, "Could not read the selected file");
        error_controller.show_error(e.to_string());
    };

    let delete_controller = controller.clone();
    let on_delete = move |filename: String| {
        let controller = delete_controller.clone();
        spawn(async move {
            let _ = controller.delete(&filename).await;
        });
    };

    let send_controller = controller.clone();
    let on_send = move |content: String| {
        let controller = send_controller.clone();
        spawn(async move {
            let _ = controller.send_message(content).await;
        });
    };

    let theme_controller = controller.clone();
    let open_controller = controller.clone();
    let close_controller = controller.clone();

    let app = state.read();
    let layout_class = if app.is_mobile_open {
        "c-layout c-layout--sidebar-open"
    } else {
        "c-layout"
    };

    rsx! {
        div { class: "{layout_class}",
            Sidebar {
                documents: app.documents.clone(),
                is_open: app.is_mobile_open,
                is_uploading: app.is_uploading(),
                upload_progress: app.upload_progress(),
                is_deleting: app.is_deleting,
                on_upload,
                on_upload_error,
                on_delete,
                on_close: move |_| close_controller.close_sidebar(),
            }

            main { class: "c-layout__main",
                Header {
                    theme: app.theme,
                    on_open_sidebar: move |_| open_controller.open_sidebar(),
                    on_toggle_theme: move |_| {
                        theme_controller.toggle_theme();
                    },
                }

                if let Some(message) = app.error_message() {
                    ErrorBanner { message: message.to_string() }
                }

                ChatArea {
                    messages: app.messages.clone(),
                    has_documents: app.has_documents(),
                    is_loading: app.is_loading,
                    on_send,
                }
            }
        }
    }
}
