// Shared test helpers: an in-process node-management backend and sample data

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use node_console::api::ApiClient;
use node_console::config::DashboardConfig;
use node_console::dashboard::Dashboard;
use node_console::models::*;
use node_console::store::ViewStore;
use serde::Deserialize;
use serde_json::json;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Scripted backend behaviour plus the log of received calls.
#[derive(Default)]
pub struct BackendState {
    pub nodes: Vec<Server>,
    pub containers: HashMap<String, Vec<Container>>,
    /// `"METHOD /path?query"` per request, in arrival order.
    pub calls: Vec<String>,
    /// The next N `GET /api/nodes/status` calls answer 500.
    pub status_failures: u32,
    /// Per-call delay for `GET /api/nodes/status`, consumed front to back.
    pub status_delays_ms: VecDeque<u64>,
    pub delete_error: Option<(u16, String)>,
    pub test_result: Option<ConnectionTest>,
    pub action_ok: Option<bool>,
    pub malformed_containers: bool,
}

type Shared = Arc<Mutex<BackendState>>;

pub struct FakeBackend {
    pub url: String,
    pub state: Shared,
}

impl FakeBackend {
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls().iter().filter(|c| c.as_str() == call).count()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut BackendState) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.url).unwrap()
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::new(self.client(), ViewStore::new(), test_dashboard_config())
    }
}

pub fn test_dashboard_config() -> DashboardConfig {
    DashboardConfig {
        central_node_id: "main".into(),
        reload_retries: 3,
        reload_backoff_ms: 5,
        settle_delay_ms: 0,
    }
}

pub async fn spawn_backend(state: BackendState) -> FakeBackend {
    let shared: Shared = Arc::new(Mutex::new(state));
    let app = Router::new()
        .route("/api/nodes", get(list_nodes).post(add_node))
        .route("/api/nodes/status", get(list_nodes_status))
        .route(
            "/api/nodes/{id}",
            get(get_node).put(update_node).delete(delete_node),
        )
        .route("/api/nodes/{id}/test", post(test_node))
        .route("/api/containers", get(list_containers))
        .route("/api/containers/{action}", post(container_action))
        .layer(middleware::from_fn_with_state(shared.clone(), record))
        .with_state(shared.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    FakeBackend {
        url: format!("http://{}", addr),
        state: shared,
    }
}

async fn record(State(state): State<Shared>, req: Request, next: Next) -> Response {
    let target = req
        .uri()
        .path_and_query()
        .map(|p| p.as_str().to_string())
        .unwrap_or_default();
    state
        .lock()
        .unwrap()
        .calls
        .push(format!("{} {}", req.method(), target));
    next.run(req).await
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"detail": "Node not found"})),
    )
        .into_response()
}

async fn list_nodes(State(state): State<Shared>) -> Json<Vec<Server>> {
    Json(state.lock().unwrap().nodes.clone())
}

/// Answers with the node list as it was when the request arrived, after the
/// scripted delay.
async fn list_nodes_status(State(state): State<Shared>) -> Response {
    let (delay, outcome) = {
        let mut s = state.lock().unwrap();
        let delay = s.status_delays_ms.pop_front();
        let outcome = if s.status_failures > 0 {
            s.status_failures -= 1;
            Err(())
        } else {
            Ok(s.nodes.clone())
        };
        (delay, outcome)
    };
    if let Some(ms) = delay {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
    match outcome {
        Ok(nodes) => Json(nodes).into_response(),
        Err(()) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"detail": "status probe failed"})),
        )
            .into_response(),
    }
}

async fn get_node(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let node = state
        .lock()
        .unwrap()
        .nodes
        .iter()
        .find(|n| n.id == id)
        .cloned();
    match node {
        Some(n) => Json(n).into_response(),
        None => not_found(),
    }
}

async fn add_node(State(state): State<Shared>, Json(form): Json<NodeForm>) -> Response {
    let mut s = state.lock().unwrap();
    if s.nodes.iter().any(|n| n.id == form.id) {
        return (
            StatusCode::CONFLICT,
            Json(json!({"detail": format!("Node {} already exists", form.id)})),
        )
            .into_response();
    }
    s.nodes.push(Server {
        id: form.id.clone(),
        label: form.label,
        base_url: form.base_url,
        role: NodeRole::Client,
        status: NodeStatus::Online,
        kind: Some("remote".into()),
        tls: Some(form.tls),
        last_check: None,
        error: None,
    });
    Json(json!({"message": format!("Node {} added", form.id)})).into_response()
}

async fn update_node(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(form): Json<NodeForm>,
) -> Response {
    let mut s = state.lock().unwrap();
    match s.nodes.iter_mut().find(|n| n.id == id) {
        Some(n) => {
            n.label = form.label;
            n.base_url = form.base_url;
            Json(json!({"message": "Node updated"})).into_response()
        }
        None => not_found(),
    }
}

async fn delete_node(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut s = state.lock().unwrap();
    if let Some((status, detail)) = s.delete_error.clone() {
        let status = StatusCode::from_u16(status).unwrap();
        return (status, Json(json!({"detail": detail}))).into_response();
    }
    let before = s.nodes.len();
    s.nodes.retain(|n| n.id != id);
    if s.nodes.len() == before {
        return not_found();
    }
    Json(json!({})).into_response()
}

async fn test_node(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let s = state.lock().unwrap();
    if !s.nodes.iter().any(|n| n.id == id) {
        return not_found();
    }
    let result = s.test_result.clone().unwrap_or(ConnectionTest {
        ok: true,
        status: Some("online".into()),
        version: Some("24.0.7".into()),
        api_version: Some("1.43".into()),
        error: None,
    });
    Json(result).into_response()
}

#[derive(Deserialize)]
struct ContainerQuery {
    node_id: String,
}

async fn list_containers(
    State(state): State<Shared>,
    Query(q): Query<ContainerQuery>,
) -> Response {
    let s = state.lock().unwrap();
    if s.malformed_containers {
        return Json(json!({"containers": "not a list"})).into_response();
    }
    Json(s.containers.get(&q.node_id).cloned().unwrap_or_default()).into_response()
}

async fn container_action(
    State(state): State<Shared>,
    Json(_body): Json<ContainerAction>,
) -> Response {
    match state.lock().unwrap().action_ok {
        Some(ok) => Json(json!({"ok": ok})).into_response(),
        None => Json(json!({})).into_response(),
    }
}

pub fn server(id: &str, label: &str, role: NodeRole, status: NodeStatus) -> Server {
    Server {
        id: id.into(),
        label: label.into(),
        base_url: format!("tcp://{}:2375", id),
        role,
        status,
        kind: None,
        tls: Some(false),
        last_check: None,
        error: None,
    }
}

pub fn container(id: &str, name: &str, status: &str) -> Container {
    Container {
        id: id.into(),
        name: Some(name.into()),
        image: Some("nginx:latest".into()),
        status: status.into(),
        ports: None,
    }
}

/// main (central), srv1 and srv2 (clients) with a few containers each.
pub fn sample_state() -> BackendState {
    let mut containers = HashMap::new();
    containers.insert(
        "main".to_string(),
        vec![
            container("c-main-1", "web", "running"),
            container("c-main-2", "db", "exited"),
        ],
    );
    containers.insert(
        "srv2".to_string(),
        vec![container("c-srv2-1", "worker", "running")],
    );
    BackendState {
        nodes: vec![
            server("main", "Main", NodeRole::Central, NodeStatus::Online),
            server("srv1", "Server 1", NodeRole::Client, NodeStatus::Online),
            server("srv2", "Server 2", NodeRole::Client, NodeStatus::Offline),
        ],
        containers,
        ..Default::default()
    }
}
