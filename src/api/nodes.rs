// /api/nodes endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{ConnectionTest, MessageResponse, NodeForm, Server};

impl ApiClient {
    /// GET /api/nodes
    pub async fn list_nodes(&self) -> Result<Vec<Server>, ApiError> {
        self.get(&["api", "nodes"]).await
    }

    /// GET /api/nodes/status: nodes with live connection status.
    pub async fn list_nodes_status(&self) -> Result<Vec<Server>, ApiError> {
        self.get(&["api", "nodes", "status"]).await
    }

    /// GET /api/nodes/{id}
    pub async fn get_node(&self, node_id: &str) -> Result<Server, ApiError> {
        self.get(&["api", "nodes", node_id]).await
    }

    /// POST /api/nodes
    pub async fn add_node(&self, form: &NodeForm) -> Result<MessageResponse, ApiError> {
        self.post(&["api", "nodes"], form).await
    }

    /// PUT /api/nodes/{id}
    pub async fn update_node(
        &self,
        node_id: &str,
        form: &NodeForm,
    ) -> Result<MessageResponse, ApiError> {
        self.put(&["api", "nodes", node_id], form).await
    }

    /// DELETE /api/nodes/{id}
    pub async fn delete_node(&self, node_id: &str) -> Result<MessageResponse, ApiError> {
        self.delete(&["api", "nodes", node_id]).await
    }

    /// POST /api/nodes/{id}/test
    pub async fn test_node(&self, node_id: &str) -> Result<ConnectionTest, ApiError> {
        self.post(&["api", "nodes", node_id, "test"], &serde_json::json!({}))
            .await
    }
}
