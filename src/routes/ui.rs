// Dashboard action endpoints; every action answers with the page and pending toasts

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::dashboard::{Dashboard, GraphKind};
use crate::models::{ActionKind, NodeForm};
use crate::render::Layout;
use crate::ui::{Page, Toast, ViewMode};

#[derive(Serialize)]
pub(super) struct UiResponse {
    page: Page,
    toasts: Vec<Toast>,
    #[serde(skip_serializing_if = "Option::is_none")]
    layout: Option<Layout>,
}

async fn respond(dashboard: &Dashboard) -> Json<UiResponse> {
    let toasts = dashboard.take_toasts().await;
    Json(UiResponse {
        page: dashboard.page_state().await,
        toasts,
        layout: None,
    })
}

fn outcome<T, E: std::fmt::Display>(action: &str, result: Result<T, E>) {
    if let Err(e) = result {
        tracing::debug!(action, error = %e, "ui action did not complete");
    }
}

#[derive(Deserialize)]
pub(super) struct ViewBody {
    mode: ViewMode,
}

#[derive(Deserialize)]
pub(super) struct ToggleBody {
    enabled: bool,
}

#[derive(Deserialize)]
pub(super) struct ConfirmQuery {
    #[serde(default)]
    confirmed: bool,
}

#[derive(Deserialize)]
pub(super) struct SelectBody {
    node_id: String,
}

#[derive(Deserialize)]
pub(super) struct ContainerActionBody {
    node_id: String,
    container_id: String,
    #[serde(default)]
    confirmed: bool,
}

#[derive(Deserialize)]
pub(super) struct TapBody {
    #[serde(default)]
    node_id: Option<String>,
}

#[derive(Deserialize)]
pub(super) struct HoverBody {
    node_id: String,
    entered: bool,
}

pub(super) async fn page(State(state): State<AppState>) -> Json<UiResponse> {
    respond(&state.dashboard).await
}

// Runs on every shell load, so a browser reload lands on the server graph again.
pub(super) async fn start(State(state): State<AppState>) -> Json<UiResponse> {
    state.dashboard.start().await;
    respond(&state.dashboard).await
}

pub(super) async fn switch_view(
    State(state): State<AppState>,
    Json(body): Json<ViewBody>,
) -> Json<UiResponse> {
    state.dashboard.switch_view(body.mode).await;
    respond(&state.dashboard).await
}

pub(super) async fn toggle_container_graph(
    State(state): State<AppState>,
    Json(body): Json<ToggleBody>,
) -> Json<UiResponse> {
    state.dashboard.toggle_container_graph(body.enabled).await;
    respond(&state.dashboard).await
}

pub(super) async fn reload_servers(State(state): State<AppState>) -> Json<UiResponse> {
    outcome("reload-servers", state.dashboard.load_server_list().await);
    respond(&state.dashboard).await
}

pub(super) async fn test_server(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<UiResponse> {
    outcome(
        "test-server",
        state.dashboard.test_server_connection_by_id(&id).await,
    );
    respond(&state.dashboard).await
}

pub(super) async fn delete_server(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ConfirmQuery>,
) -> Json<UiResponse> {
    outcome(
        "delete-server",
        state.dashboard.delete_server(&id, query.confirmed).await,
    );
    respond(&state.dashboard).await
}

pub(super) async fn reload_containers(State(state): State<AppState>) -> Json<UiResponse> {
    outcome("reload-containers", state.dashboard.reload_containers().await);
    respond(&state.dashboard).await
}

pub(super) async fn select_node(
    State(state): State<AppState>,
    Json(body): Json<SelectBody>,
) -> Json<UiResponse> {
    outcome("select-node", state.dashboard.select_node(&body.node_id).await);
    respond(&state.dashboard).await
}

pub(super) async fn container_action(
    State(state): State<AppState>,
    Path(action): Path<String>,
    Json(body): Json<ContainerActionBody>,
) -> Result<Json<UiResponse>, (StatusCode, String)> {
    let kind: ActionKind = action
        .parse()
        .map_err(|e: String| (StatusCode::NOT_FOUND, e))?;
    outcome(
        kind.as_str(),
        state
            .dashboard
            .container_action(kind, &body.node_id, &body.container_id, body.confirmed)
            .await,
    );
    Ok(respond(&state.dashboard).await)
}

pub(super) async fn form_add(State(state): State<AppState>) -> Json<UiResponse> {
    state.dashboard.show_add_server_form().await;
    respond(&state.dashboard).await
}

pub(super) async fn form_edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<UiResponse> {
    outcome("edit-server", state.dashboard.edit_server(&id).await);
    respond(&state.dashboard).await
}

pub(super) async fn form_close(State(state): State<AppState>) -> Json<UiResponse> {
    state.dashboard.close_server_form().await;
    respond(&state.dashboard).await
}

pub(super) async fn form_save(
    State(state): State<AppState>,
    Json(form): Json<NodeForm>,
) -> Json<UiResponse> {
    outcome("save-server", state.dashboard.save_server(&form).await);
    respond(&state.dashboard).await
}

pub(super) async fn form_test(
    State(state): State<AppState>,
    Json(form): Json<NodeForm>,
) -> Json<UiResponse> {
    outcome(
        "test-connection",
        state.dashboard.test_server_connection(&form).await,
    );
    respond(&state.dashboard).await
}

pub(super) async fn graph_tap(
    State(state): State<AppState>,
    Path(kind): Path<GraphKind>,
    Json(body): Json<TapBody>,
) -> Json<UiResponse> {
    let node_id = body.node_id.as_deref();
    match kind {
        GraphKind::Servers => state.dashboard.tap_server_graph(node_id).await,
        GraphKind::Containers => state.dashboard.tap_container_graph(node_id).await,
    }
    respond(&state.dashboard).await
}

pub(super) async fn graph_hover(
    State(state): State<AppState>,
    Path(kind): Path<GraphKind>,
    Json(body): Json<HoverBody>,
) -> Json<UiResponse> {
    state
        .dashboard
        .hover_graph(kind, &body.node_id, body.entered)
        .await;
    respond(&state.dashboard).await
}

pub(super) async fn graph_reset_layout(
    State(state): State<AppState>,
    Path(kind): Path<GraphKind>,
) -> Json<UiResponse> {
    let layout = state.dashboard.reset_graph_layout(kind).await;
    let Json(mut response) = respond(&state.dashboard).await;
    response.layout = layout;
    Json(response)
}
