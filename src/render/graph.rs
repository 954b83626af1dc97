// Graph model for the browser graph library, plus hover/selection state

use crate::models::NodeRole;
use serde::Serialize;
use serde::ser::SerializeStruct;

/// Scale applied to a hovered node.
pub const HOVER_SCALE: f64 = 1.1;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeKind {
    /// Synthetic hub (e.g. the Docker host in the container graph). Not interactive.
    Hub,
    Container {
        #[serde(skip_serializing_if = "Option::is_none")]
        image: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        ports: Option<String>,
    },
    Server {
        role: NodeRole,
        #[serde(rename = "type")]
        server_type: String,
        base_url: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    pub id: String,
    pub label: String,
    pub status: String,
    pub status_icon: String,
    pub border_color: String,
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl NodeData {
    pub fn is_hub(&self) -> bool {
        matches!(self.kind, NodeKind::Hub)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeData {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// Border widths (px) for the three interaction states.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderWidths {
    pub base: f64,
    pub hover: f64,
    pub selected: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub name: &'static str,
    pub rank_dir: &'static str,
    pub node_sep: u32,
    pub edge_sep: u32,
    pub rank_sep: u32,
    pub padding: u32,
    /// Used when the dagre plugin is unavailable.
    pub fallback: FallbackLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackLayout {
    pub name: &'static str,
    pub directed: bool,
    pub spacing_factor: f64,
    pub padding: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roots: Option<String>,
}

/// Viewport hints for "fit": padding and a zoom floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub fit_padding: u32,
    pub min_zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            fit_padding: 50,
            min_zoom: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphModel {
    pub nodes: Vec<NodeData>,
    pub edges: Vec<EdgeData>,
    pub borders: BorderWidths,
    pub layout: Layout,
    pub viewport: Viewport,
}

impl GraphModel {
    pub fn node(&self, id: &str) -> Option<&NodeData> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// Current look of one node, derived from its status and the interaction state.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeAppearance {
    pub scale: f64,
    pub border_width: f64,
    pub border_color: String,
    pub hovered: bool,
    pub selected: bool,
}

/// Result of tapping a node.
#[derive(Debug, Clone, PartialEq)]
pub enum TapOutcome {
    Selected(NodeData),
    /// Hub or unknown node; selection unchanged.
    Ignored,
}

/// A rendered graph instance and its interaction state.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphView {
    model: GraphModel,
    instance: u64,
    hovered: Option<String>,
    selected: Option<String>,
}

impl GraphView {
    pub fn new(model: GraphModel) -> Self {
        Self {
            model,
            instance: 0,
            hovered: None,
            selected: None,
        }
    }

    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    pub fn instance(&self) -> u64 {
        self.instance
    }

    pub(crate) fn set_instance(&mut self, instance: u64) {
        self.instance = instance;
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    fn interactive(&self, id: &str) -> Option<&NodeData> {
        self.model.node(id).filter(|n| !n.is_hub())
    }

    /// Pointer entered a node. Returns false for hubs and unknown ids.
    pub fn hover(&mut self, id: &str) -> bool {
        if self.interactive(id).is_none() {
            return false;
        }
        self.hovered = Some(id.to_string());
        true
    }

    /// Pointer left a node; reverts its enlarged look.
    pub fn unhover(&mut self, id: &str) {
        if self.hovered.as_deref() == Some(id) {
            self.hovered = None;
        }
    }

    /// Select a node exclusively; any previous selection is cleared.
    pub fn tap_node(&mut self, id: &str) -> TapOutcome {
        match self.interactive(id).cloned() {
            Some(node) => {
                self.selected = Some(node.id.clone());
                TapOutcome::Selected(node)
            }
            None => TapOutcome::Ignored,
        }
    }

    pub fn tap_background(&mut self) {
        self.selected = None;
    }

    /// Layout descriptor to re-run; positions are owned by the graph library.
    pub fn reset_layout(&self) -> &Layout {
        &self.model.layout
    }

    pub fn appearance(&self, id: &str) -> Option<NodeAppearance> {
        let node = self.model.node(id)?;
        let hovered = self.hovered.as_deref() == Some(id);
        let selected = self.selected.as_deref() == Some(id);
        let borders = self.model.borders;
        let border_width = if selected {
            borders.selected
        } else if hovered {
            borders.hover
        } else {
            borders.base
        };
        Some(NodeAppearance {
            scale: if hovered { HOVER_SCALE } else { 1.0 },
            border_width,
            border_color: node.border_color.clone(),
            hovered,
            selected,
        })
    }

    /// An edge is highlighted while one of its endpoints is hovered or selected.
    pub fn edge_highlighted(&self, edge_id: &str) -> bool {
        let Some(edge) = self.model.edges.iter().find(|e| e.id == edge_id) else {
            return false;
        };
        [self.hovered.as_deref(), self.selected.as_deref()]
            .into_iter()
            .flatten()
            .any(|id| edge.source == id || edge.target == id)
    }

    fn node_classes(&self, id: &str) -> String {
        let mut classes = Vec::new();
        if self.hovered.as_deref() == Some(id) {
            classes.push("hovered");
        }
        if self.selected.as_deref() == Some(id) {
            classes.push("selected");
        }
        classes.join(" ")
    }
}

#[derive(Serialize)]
struct Element<'a, T: Serialize> {
    group: &'static str,
    data: &'a T,
    classes: String,
}

impl Serialize for GraphView {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let nodes = self.model.nodes.iter().map(|n| Element {
            group: "nodes",
            data: n,
            classes: self.node_classes(&n.id),
        });
        let edges = self.model.edges.iter().map(|e| Element {
            group: "edges",
            data: e,
            classes: if self.edge_highlighted(&e.id) {
                "highlighted".to_string()
            } else {
                String::new()
            },
        });
        let elements: Vec<serde_json::Value> = nodes
            .map(|el| serde_json::to_value(el))
            .chain(edges.map(|el| serde_json::to_value(el)))
            .collect::<Result<_, _>>()
            .map_err(serde::ser::Error::custom)?;

        let mut s = serializer.serialize_struct("GraphView", 7)?;
        s.serialize_field("instance", &self.instance)?;
        s.serialize_field("elements", &elements)?;
        s.serialize_field("borders", &self.model.borders)?;
        s.serialize_field("hoverScale", &HOVER_SCALE)?;
        s.serialize_field("layout", &self.model.layout)?;
        s.serialize_field("viewport", &self.model.viewport)?;
        s.serialize_field("selected", &self.selected)?;
        s.end()
    }
}

/// A graph area: either an empty-state message or a live graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum GraphRegion {
    Empty { html: String },
    Graph(GraphView),
}

impl Default for GraphRegion {
    fn default() -> Self {
        GraphRegion::Empty {
            html: String::new(),
        }
    }
}

impl GraphRegion {
    pub fn view(&self) -> Option<&GraphView> {
        match self {
            GraphRegion::Graph(v) => Some(v),
            GraphRegion::Empty { .. } => None,
        }
    }

    pub fn view_mut(&mut self) -> Option<&mut GraphView> {
        match self {
            GraphRegion::Graph(v) => Some(v),
            GraphRegion::Empty { .. } => None,
        }
    }

    pub fn empty_html(&self) -> Option<&str> {
        match self {
            GraphRegion::Empty { html } => Some(html),
            GraphRegion::Graph(_) => None,
        }
    }
}
