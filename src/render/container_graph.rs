// Container graph: every container hangs off one synthetic Docker host hub

use super::empty_state;
use super::graph::{
    BorderWidths, EdgeData, FallbackLayout, GraphModel, GraphRegion, GraphView, Layout, NodeData,
    NodeKind, Viewport,
};
use crate::models::{Container, ContainerStatus};

pub const HUB_ID: &str = "center";
const HUB_LABEL: &str = "Docker Host";

/// Glyph drawn before a container label; `?` for unknown statuses.
pub fn status_glyph(status: &str) -> &'static str {
    match ContainerStatus::from_docker(status) {
        ContainerStatus::Running => "▶",
        ContainerStatus::Exited => "■",
        ContainerStatus::Created => "+",
        ContainerStatus::Restarting => "↻",
        ContainerStatus::Removing => "×",
        ContainerStatus::Paused => "⏸",
        ContainerStatus::Dead => "☠",
        ContainerStatus::Unknown => "?",
    }
}

/// Border color per status; unknown statuses share the "exited" slate.
pub fn border_color(status: &str) -> &'static str {
    match ContainerStatus::from_docker(status) {
        ContainerStatus::Running => "#22C55E",
        ContainerStatus::Exited => "#4C5D7A",
        ContainerStatus::Created => "#3B82F6",
        ContainerStatus::Restarting => "#EAB308",
        ContainerStatus::Removing => "#F87171",
        ContainerStatus::Paused => "#FB923C",
        ContainerStatus::Dead => "#475569",
        ContainerStatus::Unknown => "#4C5D7A",
    }
}

fn short_id(id: &str) -> String {
    id.chars().take(12).collect()
}

pub fn render_container_graph(containers: &[Container]) -> GraphRegion {
    if containers.is_empty() {
        return GraphRegion::Empty {
            html: empty_state(
                "fa-inbox",
                "No containers",
                "There are no containers on this node.",
                None,
            ),
        };
    }

    let mut nodes: Vec<NodeData> = containers
        .iter()
        .map(|c| NodeData {
            id: c.id.clone(),
            label: c
                .name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| short_id(&c.id)),
            status: c.status.clone(),
            status_icon: status_glyph(&c.status).to_string(),
            border_color: border_color(&c.status).to_string(),
            kind: NodeKind::Container {
                image: c.image.clone(),
                ports: c.ports.clone(),
            },
        })
        .collect();
    nodes.push(NodeData {
        id: HUB_ID.to_string(),
        label: HUB_LABEL.to_string(),
        status: "running".to_string(),
        status_icon: status_glyph("running").to_string(),
        border_color: "#475569".to_string(),
        kind: NodeKind::Hub,
    });

    let edges = containers
        .iter()
        .map(|c| EdgeData {
            id: format!("edge-{}", c.id),
            source: HUB_ID.to_string(),
            target: c.id.clone(),
        })
        .collect::<Vec<_>>();

    tracing::debug!(nodes = nodes.len(), edges = edges.len(), "container graph rendered");

    GraphRegion::Graph(GraphView::new(GraphModel {
        nodes,
        edges,
        borders: BorderWidths {
            base: 3.0,
            hover: 4.0,
            selected: 2.0,
        },
        layout: Layout {
            name: "dagre",
            rank_dir: "TB",
            node_sep: 60,
            edge_sep: 30,
            rank_sep: 100,
            padding: 20,
            fallback: FallbackLayout {
                name: "breadthfirst",
                directed: true,
                spacing_factor: 1.1,
                padding: 20,
                roots: Some(format!("#{}", HUB_ID)),
            },
        },
        viewport: Viewport::default(),
    }))
}

/// Multi-line summary shown when a container node is tapped.
pub fn container_summary(node: &NodeData) -> String {
    let (image, ports) = match &node.kind {
        NodeKind::Container { image, ports } => (image.as_deref(), ports.as_deref()),
        _ => (None, None),
    };
    format!(
        "Container ID: {}\nName: {}\nStatus: {}\nImage: {}\nPorts: {}",
        node.id,
        node.label,
        node.status,
        image.unwrap_or("N/A"),
        ports.filter(|p| !p.is_empty()).unwrap_or("N/A")
    )
}
