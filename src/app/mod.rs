pub mod components;
pub mod layouts;
pub mod pages;

use dioxus::prelude::*;

use pages::ChatPage;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Chat {},

    // Anything else falls back to the chat
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Dioxus App initialized successfully");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    // Bundled by build.rs from assets/css/main.css
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        Outlet::<Route> {}
    }
}

#[component]
fn Chat() -> Element {
    rsx! { ChatPage {} }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "Unknown route, showing chat");
    rsx! { ChatPage {} }
}
