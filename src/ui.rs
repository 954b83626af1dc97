// Page model: the in-memory stand-in for the browser DOM

use crate::models::{NodeForm, Server};
use crate::render::{GraphRegion, ServerRow};
use serde::{Deserialize, Serialize};

/// Top-level view. The container graph is a sub-mode of `Containers`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    Containers,
    ServerList,
    #[default]
    ServerGraph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Server list area.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ServerListRegion {
    #[default]
    Idle,
    Rows { rows: Vec<ServerRow> },
    Empty { html: String },
    Error { html: String },
}

impl ServerListRegion {
    /// Remove one row ahead of the backend confirming a delete.
    pub fn remove_row(&mut self, id: &str) -> bool {
        match self {
            ServerListRegion::Rows { rows } => {
                let before = rows.len();
                rows.retain(|r| r.id != id);
                rows.len() != before
            }
            _ => false,
        }
    }

    pub fn row_ids(&self) -> Vec<&str> {
        match self {
            ServerListRegion::Rows { rows } => rows.iter().map(|r| r.id.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    pub fn html(&self) -> String {
        match self {
            ServerListRegion::Idle => String::new(),
            ServerListRegion::Rows { rows } => rows.iter().map(|r| r.html.as_str()).collect(),
            ServerListRegion::Empty { html } | ServerListRegion::Error { html } => html.clone(),
        }
    }
}

/// The container manager's node dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodeSelect {
    pub options: Vec<SelectOption>,
    pub selected: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

impl NodeSelect {
    /// Replace the options, keeping the current selection if it still exists,
    /// else selecting the first node.
    pub fn set_nodes(&mut self, nodes: &[Server]) {
        self.options = nodes
            .iter()
            .map(|n| SelectOption {
                value: n.id.clone(),
                text: format!("{} ({})", n.label, n.id),
            })
            .collect();
        let keep = self
            .selected
            .as_ref()
            .is_some_and(|cur| self.options.iter().any(|o| &o.value == cur));
        if !keep {
            self.selected = self.options.first().map(|o| o.value.clone());
        }
    }

    pub fn select(&mut self, id: &str) {
        self.selected = Some(id.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestResultState {
    Pending,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestResult {
    pub state: TestResultState,
    pub html: String,
}

/// The add/edit server modal. One modal serves both, titled accordingly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServerFormModal {
    pub open: bool,
    /// Id of the server being edited; `None` means the modal creates a new one.
    pub editing_id: Option<String>,
    pub title: String,
    pub fields: NodeForm,
    pub test_result: Option<TestResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub mode: ViewMode,
    /// Configured central node; the shell skips the delete prompt for it.
    pub central_node_id: String,
    pub container_graph_enabled: bool,
    pub server_list: ServerListRegion,
    /// Persistent message when the list could not be refreshed after a delete.
    pub server_list_notice: Option<String>,
    pub server_graph: GraphRegion,
    pub container_graph: GraphRegion,
    pub container_grid: String,
    pub status_text: String,
    pub node_select: NodeSelect,
    pub details_panel: Option<String>,
    pub server_form: ServerFormModal,
    pub loading: bool,
    #[serde(skip)]
    pub toasts: Vec<Toast>,
    #[serde(skip)]
    graph_instances: u64,
}

impl Page {
    pub fn toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toasts.push(Toast {
            kind,
            message: message.into(),
        });
    }

    pub fn take_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    /// Replace the server graph; any previous instance is destroyed first.
    pub fn set_server_graph(&mut self, region: GraphRegion) {
        self.server_graph = self.next_instance(region, "server");
    }

    pub fn set_container_graph(&mut self, region: GraphRegion) {
        self.container_graph = self.next_instance(region, "container");
    }

    fn next_instance(&mut self, mut region: GraphRegion, which: &str) -> GraphRegion {
        if let Some(view) = region.view_mut() {
            self.graph_instances += 1;
            view.set_instance(self.graph_instances);
            tracing::debug!(graph = which, instance = self.graph_instances, "graph instance created");
        }
        region
    }
}
