// HTTP routes: the dashboard shell and its JSON action endpoints

mod http;
mod ui;

use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::dashboard::Dashboard;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) dashboard: Arc<Dashboard>,
}

pub fn app(dashboard: Arc<Dashboard>) -> Router {
    let state = AppState { dashboard };
    Router::new()
        .route("/", get(http::index_handler)) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/ui/page", get(ui::page))
        .route("/ui/start", post(ui::start))
        .route("/ui/view", post(ui::switch_view))
        .route("/ui/container-graph", post(ui::toggle_container_graph))
        .route("/ui/servers/reload", post(ui::reload_servers))
        .route("/ui/servers/{id}/test", post(ui::test_server))
        .route("/ui/servers/{id}", delete(ui::delete_server))
        .route("/ui/containers/reload", post(ui::reload_containers))
        .route("/ui/containers/select", post(ui::select_node))
        .route("/ui/containers/{action}", post(ui::container_action))
        .route("/ui/form/add", post(ui::form_add))
        .route("/ui/form/edit/{id}", post(ui::form_edit))
        .route("/ui/form/close", post(ui::form_close))
        .route("/ui/form/save", post(ui::form_save))
        .route("/ui/form/test", post(ui::form_test))
        .route("/ui/graph/{kind}/tap", post(ui::graph_tap))
        .route("/ui/graph/{kind}/hover", post(ui::graph_hover))
        .route("/ui/graph/{kind}/reset-layout", post(ui::graph_reset_layout))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
