// Server list rows and the server details panel

use super::graph::{NodeData, NodeKind};
use super::{EmptyAction, empty_state, escape};
use crate::models::{NodeRole, NodeStatus, Server};
use serde::Serialize;

/// One rendered row of the server list, keyed by server id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerRow {
    pub id: String,
    pub html: String,
}

fn status_badge(status: NodeStatus) -> (&'static str, &'static str, &'static str) {
    match status {
        NodeStatus::Online => ("online", "fa-check-circle", "Online"),
        _ => ("offline", "fa-times-circle", "Offline"),
    }
}

fn role_badge(role: NodeRole) -> (&'static str, &'static str, &'static str) {
    match role {
        NodeRole::Central => ("role-central", "fa-crown", "Central server"),
        NodeRole::Client => ("role-client", "fa-desktop", "Client"),
    }
}

pub fn render_server_rows(servers: &[Server], central_id: &str) -> Vec<ServerRow> {
    servers
        .iter()
        .map(|s| ServerRow {
            id: s.id.clone(),
            html: render_row(s, central_id),
        })
        .collect()
}

fn render_row(s: &Server, central_id: &str) -> String {
    let (status_class, status_icon, status_text) = status_badge(s.status);
    let (role_class, role_icon, role_text) = role_badge(s.role);
    let id = escape(&s.id);
    let actions = if s.id == central_id {
        String::new()
    } else {
        [
            ("test-server", "test", "fa-plug", "Connect"),
            ("edit-server", "edit", "fa-edit", "Edit"),
            ("delete-server", "delete", "fa-trash", "Delete"),
        ]
        .iter()
        .map(|(action, class, icon, label)| {
            format!(
                r#"<button class="btn-server-action {class}" data-action="{action}" data-server-id="{id}" title="{label}"><i class="fas {icon}"></i><span>{label}</span></button>"#
            )
        })
        .collect()
    };
    format!(
        concat!(
            r#"<div class="server-item" data-server-id="{id}">"#,
            r#"<div class="server-info"><div class="server-name">{name}</div><div class="server-details">"#,
            r#"<span><i class="fas fa-server"></i> {id}</span>"#,
            r#"<span class="server-role {role_class}"><i class="fas {role_icon}"></i> {role_text}</span>"#,
            r#"<span class="server-status {status_class}"><i class="fas {status_icon}"></i> {status_text}</span>"#,
            r#"</div></div><div class="server-actions">{actions}</div></div>"#
        ),
        id = id,
        name = escape(s.display_name()),
        role_class = role_class,
        role_icon = role_icon,
        role_text = role_text,
        status_class = status_class,
        status_icon = status_icon,
        status_text = status_text,
        actions = actions,
    )
}

pub fn empty_servers() -> String {
    empty_state("fa-server", "No servers registered", "", None)
}

/// Inline load failure with a retry affordance.
pub fn load_error(message: &str) -> String {
    empty_state(
        "fa-exclamation-triangle",
        "Could not load servers",
        message,
        Some(EmptyAction {
            action: "reload-servers",
            icon: "fa-redo",
            label: "Retry",
        }),
    )
}

/// Details panel for a tapped server node. Fields not carried by the graph node
/// (the connection URL) come from the store record when one exists.
pub fn render_server_details(node: &NodeData, record: Option<&Server>) -> String {
    let (role, node_url) = match &node.kind {
        NodeKind::Server { role, base_url, .. } => (*role, Some(base_url.as_str())),
        _ => (NodeRole::Client, None),
    };
    let status = if node.status == "online" {
        NodeStatus::Online
    } else {
        NodeStatus::Offline
    };
    let (status_class, status_icon, status_text) = status_badge(status);
    let (_, role_icon, role_text) = role_badge(role);
    let url = record
        .map(|s| s.base_url.as_str())
        .filter(|u| !u.is_empty())
        .or(node_url.filter(|u| !u.is_empty()))
        .unwrap_or("N/A");

    format!(
        concat!(
            r#"<div class="detail-section"><h4><i class="fas fa-server"></i> Overview</h4>"#,
            r#"<div class="detail-item"><span class="detail-label">Server ID:</span><span class="detail-value">{id}</span></div>"#,
            r#"<div class="detail-item"><span class="detail-label">Name:</span><span class="detail-value">{label}</span></div>"#,
            r#"<div class="detail-item"><span class="detail-label">Status:</span><span class="detail-value status-{status_class}"><i class="fas {status_icon}"></i> {status_text}</span></div>"#,
            r#"<div class="detail-item"><span class="detail-label">Role:</span><span class="detail-value role-{role}"><i class="fas {role_icon}"></i> {role_text}</span></div>"#,
            r#"</div><div class="detail-section"><h4><i class="fas fa-network-wired"></i> Connection</h4>"#,
            r#"<div class="detail-item"><span class="detail-label">URL:</span><span class="detail-value">{url}</span></div></div>"#
        ),
        id = escape(&node.id),
        label = escape(&node.label),
        status_class = status_class,
        status_icon = status_icon,
        status_text = status_text,
        role = role.as_str(),
        role_icon = role_icon,
        role_text = role_text,
        url = escape(url),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(id: &str, role: NodeRole, status: NodeStatus) -> Server {
        Server {
            id: id.into(),
            label: format!("{} label", id),
            base_url: format!("tcp://{}:2375", id),
            role,
            status,
            kind: None,
            tls: None,
            last_check: None,
            error: None,
        }
    }

    #[test]
    fn test_central_row_has_no_actions() {
        let rows = render_server_rows(
            &[
                server("main", NodeRole::Central, NodeStatus::Online),
                server("srv1", NodeRole::Client, NodeStatus::Offline),
            ],
            "main",
        );
        assert_eq!(rows.len(), 2);
        assert!(!rows[0].html.contains("data-action=\"delete-server\""));
        assert!(rows[0].html.contains("Central server"));
        assert!(rows[1].html.contains(r#"data-action="delete-server" data-server-id="srv1""#));
        assert!(rows[1].html.contains("server-status offline"));
    }

    #[test]
    fn test_row_escapes_label() {
        let mut s = server("x", NodeRole::Client, NodeStatus::Online);
        s.label = "<b>bold</b>".into();
        let rows = render_server_rows(&[s], "main");
        assert!(rows[0].html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn test_details_prefer_store_url() {
        let node = NodeData {
            id: "srv1".into(),
            label: "Server 1".into(),
            status: "online".into(),
            status_icon: "✓".into(),
            border_color: "#60A5FA".into(),
            kind: NodeKind::Server {
                role: NodeRole::Client,
                server_type: "remote".into(),
                base_url: String::new(),
            },
        };
        let html = render_server_details(&node, None);
        assert!(html.contains("N/A"));
        assert!(html.contains("Online"));

        let record = server("srv1", NodeRole::Client, NodeStatus::Online);
        let html = render_server_details(&node, Some(&record));
        assert!(html.contains("tcp://srv1:2375"));
        assert!(html.contains("role-client"));
    }

    #[test]
    fn test_load_error_offers_retry() {
        let html = load_error("boom");
        assert!(html.contains("boom"));
        assert!(html.contains(r#"data-action="reload-servers""#));
    }
}
