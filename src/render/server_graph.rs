// Server graph: the central node connected to every client node

use super::graph::{
    BorderWidths, EdgeData, FallbackLayout, GraphModel, GraphRegion, GraphView, Layout, NodeData,
    NodeKind, Viewport,
};
use super::{EmptyAction, empty_state};
use crate::models::{NodeRole, NodeStatus, Server};

pub fn status_glyph(status: NodeStatus) -> &'static str {
    match status {
        NodeStatus::Online => "✓",
        _ => "✗",
    }
}

/// Border color from role and status.
pub fn border_color(role: NodeRole, status: NodeStatus) -> &'static str {
    match (role, status) {
        (NodeRole::Central, NodeStatus::Online) => "#4B5563",
        (NodeRole::Central, _) => "#EA4335",
        (NodeRole::Client, NodeStatus::Online) => "#60A5FA",
        (NodeRole::Client, NodeStatus::Offline) => "#EA4335",
        (NodeRole::Client, NodeStatus::Unknown) => "#9E9E9E",
    }
}

pub fn no_servers_state() -> String {
    empty_state(
        "fa-server",
        "No servers registered",
        "Add a server to build the node network.",
        Some(EmptyAction {
            action: "show-add-server-form",
            icon: "fa-plus",
            label: "Add server",
        }),
    )
}

pub fn network_needed_state() -> String {
    empty_state(
        "fa-network-wired",
        "Network configuration needed",
        "Add client servers to build the node network. The central server alone cannot be visualized.",
        Some(EmptyAction {
            action: "show-add-server-form",
            icon: "fa-plus",
            label: "Add client server",
        }),
    )
}

pub fn loading_state() -> String {
    r#"<div class="graph-placeholder">Loading server data...</div>"#.to_string()
}

pub fn render_server_graph(servers: &[Server]) -> GraphRegion {
    if servers.is_empty() {
        return GraphRegion::Empty {
            html: no_servers_state(),
        };
    }

    let central = servers.iter().find(|s| s.is_central());
    let clients: Vec<&Server> = servers.iter().filter(|s| !s.is_central()).collect();
    if clients.is_empty() {
        return GraphRegion::Empty {
            html: network_needed_state(),
        };
    }

    let nodes: Vec<NodeData> = servers
        .iter()
        .map(|s| NodeData {
            id: s.id.clone(),
            label: s.display_name().to_string(),
            status: s.status.as_str().to_string(),
            status_icon: status_glyph(s.status).to_string(),
            border_color: border_color(s.role, s.status).to_string(),
            kind: NodeKind::Server {
                role: s.role,
                server_type: s.kind.clone().unwrap_or_else(|| "remote".to_string()),
                base_url: s.base_url.clone(),
            },
        })
        .collect();

    let edges: Vec<EdgeData> = match central {
        Some(hub) => clients
            .iter()
            .map(|c| EdgeData {
                id: format!("edge-{}-{}", hub.id, c.id),
                source: hub.id.clone(),
                target: c.id.clone(),
            })
            .collect(),
        None => Vec::new(),
    };

    tracing::debug!(nodes = nodes.len(), edges = edges.len(), "server graph rendered");

    GraphRegion::Graph(GraphView::new(GraphModel {
        nodes,
        edges,
        borders: BorderWidths {
            base: 1.0,
            hover: 1.5,
            selected: 2.0,
        },
        layout: Layout {
            name: "dagre",
            rank_dir: "TB",
            node_sep: 80,
            edge_sep: 40,
            rank_sep: 120,
            padding: 40,
            fallback: FallbackLayout {
                name: "breadthfirst",
                directed: true,
                spacing_factor: 1.2,
                padding: 40,
                roots: central.map(|c| format!("#{}", c.id)),
            },
        },
        viewport: Viewport::default(),
    }))
}
