pub mod chat_area;
pub mod common;
pub mod document_list;
pub mod file_upload;
pub mod message_item;
pub mod sidebar;
pub mod theme_toggle;

pub use chat_area::ChatArea;
pub use common::{EmptyState, ErrorBanner, TypingIndicator};
pub use document_list::DocumentList;
pub use file_upload::FileUpload;
pub use message_item::{format_citation, render_markdown, MessageItem};
pub use sidebar::Sidebar;
pub use theme_toggle::ThemeToggle;

#[cfg(test)]
pub(crate) mod test_support {
    use dioxus::prelude::*;

    /// Server-side render a root component to HTML
    pub fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }
}
