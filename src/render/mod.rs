// Renderers: snapshot in, HTML fragment or graph model out

pub mod cards;
pub mod container_graph;
pub mod graph;
pub mod server_graph;
pub mod servers;

pub use cards::{badge_class, render_container_cards, status_icon};
pub use container_graph::render_container_graph;
pub use graph::{GraphRegion, GraphView, Layout, NodeData, NodeKind, TapOutcome};
pub use server_graph::render_server_graph;
pub use servers::{ServerRow, render_server_details, render_server_rows};

/// Escape text for interpolation into HTML element content or a quoted attribute.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Optional call-to-action button of an empty state; `action` is the `data-action` name.
pub struct EmptyAction<'a> {
    pub action: &'a str,
    pub icon: &'a str,
    pub label: &'a str,
}

pub fn empty_state(icon: &str, title: &str, body: &str, action: Option<EmptyAction<'_>>) -> String {
    let button = action
        .map(|a| {
            format!(
                r#"<button class="btn-modern btn-primary" data-action="{}"><i class="fas {}"></i><span>{}</span></button>"#,
                escape(a.action),
                escape(a.icon),
                escape(a.label)
            )
        })
        .unwrap_or_default();
    format!(
        r#"<div class="empty-state"><i class="fas {}"></i><h3>{}</h3><p>{}</p>{}</div>"#,
        escape(icon),
        escape(title),
        escape(body),
        button
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_empty_state_without_action_has_no_button() {
        let html = empty_state("fa-inbox", "Nothing", "Empty", None);
        assert!(html.contains("<h3>Nothing</h3>"));
        assert!(!html.contains("<button"));
    }
}
