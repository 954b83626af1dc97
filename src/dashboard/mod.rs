// Dashboard controller: loads, view switching and the user workflows

mod actions;
mod form;
mod graph;

pub use graph::GraphKind;

use crate::api::ApiClient;
use crate::config::DashboardConfig;
use crate::error::ApiError;
use crate::render::server_graph::loading_state;
use crate::render::{
    EmptyAction, GraphRegion, empty_state, render_container_cards, render_container_graph,
    render_server_graph, render_server_rows, servers,
};
use crate::store::ViewStore;
use crate::ui::{Page, ServerListRegion, Toast, ToastKind, ViewMode};
use std::time::Duration;
use tokio::sync::RwLock;

/// Stand-in for the browser's confirmation dialog.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// A pre-answered confirmation (the host already asked the user).
impl Confirm for bool {
    fn confirm(&self, _message: &str) -> bool {
        *self
    }
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

pub struct Dashboard {
    api: ApiClient,
    store: ViewStore,
    page: RwLock<Page>,
    config: DashboardConfig,
}

impl Dashboard {
    pub fn new(api: ApiClient, store: ViewStore, config: DashboardConfig) -> Self {
        let mut page = Page::default();
        page.central_node_id = config.central_node_id.clone();
        Self {
            api,
            store,
            page: RwLock::new(page),
            config,
        }
    }

    pub fn store(&self) -> &ViewStore {
        &self.store
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Copy of the current page.
    pub async fn page_state(&self) -> Page {
        self.page.read().await.clone()
    }

    pub async fn take_toasts(&self) -> Vec<Toast> {
        self.page.write().await.take_toasts()
    }

    async fn toast(&self, kind: ToastKind, message: impl Into<String>) {
        self.page.write().await.toast(kind, message);
    }

    /// Initial view on every page load.
    pub async fn start(&self) {
        self.switch_view(ViewMode::ServerGraph).await;
    }

    pub async fn switch_view(&self, mode: ViewMode) {
        {
            let mut page = self.page.write().await;
            page.mode = mode;
            if mode != ViewMode::ServerGraph {
                page.details_panel = None;
            }
        }
        tracing::debug!(?mode, "view switched");

        match mode {
            ViewMode::ServerList => {
                let _ = self.load_server_list().await;
            }
            ViewMode::ServerGraph => {
                let _ = self.load_server_list().await;
                tokio::time::sleep(Duration::from_millis(self.config.settle_delay_ms)).await;
                let servers = self.store.servers();
                let mut page = self.page.write().await;
                if page.mode == ViewMode::ServerGraph {
                    let region = if servers.is_empty() {
                        GraphRegion::Empty {
                            html: loading_state(),
                        }
                    } else {
                        render_server_graph(&servers)
                    };
                    page.set_server_graph(region);
                }
            }
            ViewMode::Containers => {
                if let Err(e) = self.update_node_select().await {
                    tracing::warn!(error = %e, "node selector refresh failed");
                }
                let _ = self.reload_containers().await;
            }
        }
    }

    /// Turn the container graph sub-mode on or off.
    pub async fn toggle_container_graph(&self, enabled: bool) {
        let containers = self.store.containers();
        let mut page = self.page.write().await;
        page.container_graph_enabled = enabled;
        if enabled {
            page.set_container_graph(render_container_graph(&containers));
        }
    }

    /// Fetch the server list with live status and rebuild the list (and the
    /// server graph when it is visible). On failure the stored list is reset to
    /// empty, an inline retry state is rendered and a toast is raised.
    pub async fn load_server_list(&self) -> Result<(), ApiError> {
        let result = self.refresh_server_list().await;
        if let Err(e) = &result {
            self.toast(ToastKind::Error, e.user_message()).await;
        }
        result
    }

    /// Same as [`Self::load_server_list`] without the toast, for callers that
    /// decide themselves what to surface.
    async fn refresh_server_list(&self) -> Result<(), ApiError> {
        let token = self.store.begin_server_load();
        let result = self.api.list_nodes_status().await;

        let mut page = self.page.write().await;
        match result {
            Ok(list) => {
                if !self.store.apply_servers(token, list) {
                    tracing::debug!("discarding stale server list response");
                    return Ok(());
                }
                let snapshot = self.store.servers();
                page.server_list = if snapshot.is_empty() {
                    ServerListRegion::Empty {
                        html: servers::empty_servers(),
                    }
                } else {
                    ServerListRegion::Rows {
                        rows: render_server_rows(&snapshot, &self.config.central_node_id),
                    }
                };
                page.server_list_notice = None;
                if page.mode == ViewMode::ServerGraph {
                    page.set_server_graph(render_server_graph(&snapshot));
                }
                tracing::debug!(servers = snapshot.len(), "server list loaded");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "server list load failed");
                if !self.store.reset_servers(token) {
                    return Ok(());
                }
                page.server_list = ServerListRegion::Error {
                    html: servers::load_error(&e.user_message()),
                };
                if page.mode == ViewMode::ServerGraph {
                    page.set_server_graph(render_server_graph(&[]));
                }
                Err(e)
            }
        }
    }

    /// Reload containers of the node picked in the node selector.
    pub async fn reload_containers(&self) -> Result<(), ApiError> {
        let node_id = {
            let mut page = self.page.write().await;
            page.loading = true;
            page.container_grid.clear();
            page.status_text.clear();
            page.node_select
                .selected
                .clone()
                .unwrap_or_else(|| self.config.central_node_id.clone())
        };
        let token = self.store.begin_container_load();
        let result = self.api.list_containers(&node_id, true).await;

        let mut page = self.page.write().await;
        match result {
            Ok(list) => {
                if !self.store.apply_containers(token, list) {
                    tracing::debug!(node_id = %node_id, "discarding stale container list response");
                    return Ok(());
                }
                let containers = self.store.containers();
                page.container_grid = render_container_cards(&containers, &node_id);
                if page.container_graph_enabled {
                    page.set_container_graph(render_container_graph(&containers));
                }
                page.status_text = format!(
                    "Node: {} · {} containers · updated {}",
                    node_id,
                    containers.len(),
                    chrono::Local::now().format("%H:%M:%S")
                );
                page.loading = false;
                Ok(())
            }
            Err(e) => {
                tracing::error!(node_id = %node_id, error = %e, "container list load failed");
                if !self.store.reset_containers(token) {
                    return Ok(());
                }
                page.container_grid = match &e {
                    ApiError::Decode(_) => empty_state(
                        "fa-exclamation-triangle",
                        "Data format error",
                        "The server did not return data in the expected format.",
                        None,
                    ),
                    _ => empty_state(
                        "fa-exclamation-circle",
                        "Failed to load",
                        "An error occurred while loading containers.",
                        Some(EmptyAction {
                            action: "reload-containers",
                            icon: "fa-redo",
                            label: "Retry",
                        }),
                    ),
                };
                if page.container_graph_enabled {
                    page.set_container_graph(render_container_graph(&[]));
                }
                page.status_text = "Error (see logs)".to_string();
                page.loading = false;
                page.toast(ToastKind::Error, e.user_message());
                Err(e)
            }
        }
    }

    /// Refresh the node selector options from `GET /api/nodes`.
    pub async fn update_node_select(&self) -> Result<(), ApiError> {
        let nodes = self.api.list_nodes().await?;
        self.page.write().await.node_select.set_nodes(&nodes);
        Ok(())
    }

    /// Pick a node in the selector and load its containers.
    pub async fn select_node(&self, node_id: &str) -> Result<(), ApiError> {
        self.page.write().await.node_select.select(node_id);
        self.reload_containers().await
    }
}
