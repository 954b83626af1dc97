// Pointer interactions on the server and container graphs

use super::Dashboard;
use crate::render::container_graph::container_summary;
use crate::render::{GraphRegion, Layout, TapOutcome, render_server_details};
use crate::ui::ToastKind;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    Servers,
    Containers,
}

impl Dashboard {
    /// Tap on a server node (or on empty canvas when `node_id` is `None`).
    pub async fn tap_server_graph(&self, node_id: Option<&str>) {
        let Some(id) = node_id else {
            self.close_server_details().await;
            return;
        };
        let outcome = {
            let mut page = self.page.write().await;
            match page.server_graph.view_mut() {
                Some(view) => view.tap_node(id),
                None => TapOutcome::Ignored,
            }
        };
        if let TapOutcome::Selected(node) = outcome {
            self.show_server_details(&node.id).await;
        }
    }

    /// Fill the details panel for a server node, joining the graph node with
    /// the full record from the store.
    pub async fn show_server_details(&self, node_id: &str) {
        let record = self.store.find_server(node_id);
        let mut page = self.page.write().await;
        let Some(node) = page
            .server_graph
            .view()
            .and_then(|v| v.model().node(node_id))
            .cloned()
        else {
            tracing::debug!(node_id, "details requested for unknown graph node");
            return;
        };
        page.details_panel = Some(render_server_details(&node, record.as_ref()));
    }

    pub async fn close_server_details(&self) {
        let mut page = self.page.write().await;
        if let Some(view) = page.server_graph.view_mut() {
            view.tap_background();
        }
        page.details_panel = None;
    }

    /// Tap on a container node surfaces its summary; empty canvas deselects.
    pub async fn tap_container_graph(&self, node_id: Option<&str>) {
        let mut page = self.page.write().await;
        let Some(view) = page.container_graph.view_mut() else {
            return;
        };
        match node_id {
            None => view.tap_background(),
            Some(id) => {
                if let TapOutcome::Selected(node) = view.tap_node(id) {
                    page.toast(ToastKind::Info, container_summary(&node));
                }
            }
        }
    }

    /// Pointer entered or left a node.
    pub async fn hover_graph(&self, kind: GraphKind, node_id: &str, entered: bool) {
        let mut page = self.page.write().await;
        let Some(view) = graph_region(&mut page, kind).view_mut() else {
            return;
        };
        if entered {
            view.hover(node_id);
        } else {
            view.unhover(node_id);
        }
    }

    /// Layout to re-run for the graph, if one is shown.
    pub async fn reset_graph_layout(&self, kind: GraphKind) -> Option<Layout> {
        let mut page = self.page.write().await;
        graph_region(&mut page, kind)
            .view()
            .map(|v| v.reset_layout().clone())
    }
}

fn graph_region(page: &mut crate::ui::Page, kind: GraphKind) -> &mut GraphRegion {
    match kind {
        GraphKind::Servers => &mut page.server_graph,
        GraphKind::Containers => &mut page.container_graph,
    }
}
