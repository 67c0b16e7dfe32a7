use dioxus::prelude::*;

/// Smooth-scroll the element with `anchor_id` into view whenever the
/// message count or the loading indicator changes
pub fn use_scroll_to_end(anchor_id: &'static str, message_count: usize, is_loading: bool) {
    use_effect(use_reactive!(|(message_count, is_loading)| {
        if message_count == 0 && !is_loading {
            return;
        }
        let script = format!(
            r#"
            setTimeout(() => {{
                const end = document.getElementById('{anchor_id}');
                if (end) {{
                    end.scrollIntoView({{ behavior: 'smooth' }});
                }}
            }}, 50);
            "#
        );
        let _ = document::eval(&script);
    }));
}
