// /api/containers endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{ActionKind, ActionResult, Container, ContainerAction};

impl ApiClient {
    /// GET /api/containers?node_id=..&all=..
    pub async fn list_containers(
        &self,
        node_id: &str,
        all: bool,
    ) -> Result<Vec<Container>, ApiError> {
        self.get_with_query(
            &["api", "containers"],
            &[("node_id", node_id), ("all", if all { "true" } else { "false" })],
        )
        .await
    }

    /// POST /api/containers/{start|stop|restart}
    pub async fn container_action(
        &self,
        kind: ActionKind,
        node_id: &str,
        container_id: &str,
    ) -> Result<ActionResult, ApiError> {
        match kind {
            ActionKind::Start => self.start_container(node_id, container_id).await,
            ActionKind::Stop => self.stop_container(node_id, container_id).await,
            ActionKind::Restart => self.restart_container(node_id, container_id).await,
        }
    }

    pub async fn start_container(
        &self,
        node_id: &str,
        container_id: &str,
    ) -> Result<ActionResult, ApiError> {
        self.post_action(ActionKind::Start, node_id, container_id)
            .await
    }

    pub async fn stop_container(
        &self,
        node_id: &str,
        container_id: &str,
    ) -> Result<ActionResult, ApiError> {
        self.post_action(ActionKind::Stop, node_id, container_id)
            .await
    }

    pub async fn restart_container(
        &self,
        node_id: &str,
        container_id: &str,
    ) -> Result<ActionResult, ApiError> {
        self.post_action(ActionKind::Restart, node_id, container_id)
            .await
    }

    async fn post_action(
        &self,
        kind: ActionKind,
        node_id: &str,
        container_id: &str,
    ) -> Result<ActionResult, ApiError> {
        let body = ContainerAction {
            node_id: node_id.to_string(),
            container_id: container_id.to_string(),
        };
        self.post(&["api", "containers", kind.as_str()], &body)
            .await
    }
}
