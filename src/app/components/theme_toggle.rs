use dioxus::prelude::*;

use crate::domain::models::Theme;

/// Light/dark switch with the animated sun/moon ball
#[component]
pub fn ThemeToggle(theme: Theme, on_toggle: EventHandler<()>) -> Element {
    let target = theme.toggled();
    let tooltip = format!("Switch to {} mode", target.display_name());

    let toggle_class = if theme.is_dark() {
        "c-theme-toggle"
    } else {
        "c-theme-toggle c-theme-toggle--light"
    };

    rsx! {
        button {
            class: "{toggle_class}",
            r#type: "button",
            title: "{tooltip}",
            aria_label: "Toggle dark mode",
            onclick: move |_| on_toggle.call(()),

            div { class: "c-theme-toggle__ball", span { class: "c-theme-toggle__icon", "{theme.icon()}" } }

            div { class: "c-theme-toggle__stars",
                span { class: "c-theme-toggle__star" }
                span { class: "c-theme-toggle__star" }
                span { class: "c-theme-toggle__star" }
            }

            div { class: "c-theme-toggle__clouds",
                span { class: "c-theme-toggle__cloud" }
                span { class: "c-theme-toggle__cloud" }
            }
        }
    }
}
