use dioxus::prelude::*;

use crate::app::components::ThemeToggle;
use crate::domain::models::Theme;

/// Top bar of the chat column: sidebar opener (narrow viewports) and theme switch
#[component]
pub fn Header(theme: Theme, on_open_sidebar: EventHandler<()>, on_toggle_theme: EventHandler<()>) -> Element {
    rsx! {
        header { class: "c-header",
            button {
                class: "c-header__menu",
                r#type: "button",
                aria_label: "Open documents",
                onclick: move |_| on_open_sidebar.call(()),
                span { class: "c-header__menu-bar" }
                span { class: "c-header__menu-bar" }
                span { class: "c-header__menu-bar" }
            }
            h2 { class: "c-header__title", "Chat with your documents" }
            div { class: "c-header__actions",
                ThemeToggle { theme, on_toggle: on_toggle_theme }
            }
        }
    }
}
