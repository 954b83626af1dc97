// Container lifecycle actions and server deletion

use super::{Confirm, Dashboard};
use crate::error::ActionError;
use crate::models::ActionKind;
use crate::ui::ToastKind;
use std::time::Duration;

const RELOAD_FAILED: &str = "Could not refresh the server list. Please reload the page.";

impl Dashboard {
    /// Start, stop or restart one container after the user confirms.
    pub async fn container_action(
        &self,
        kind: ActionKind,
        node_id: &str,
        container_id: &str,
        confirm: impl Confirm,
    ) -> Result<(), ActionError> {
        let question = format!("{} container {}?", kind.verb(), container_id);
        if !confirm.confirm(&question) {
            return Err(ActionError::Cancelled);
        }

        self.page.write().await.loading = true;
        let result = self
            .api
            .container_action(kind, node_id, container_id)
            .await;
        self.page.write().await.loading = false;

        match result {
            Ok(outcome) if outcome.succeeded() => {
                tracing::info!(action = kind.as_str(), node_id, container_id, "container action completed");
                let _ = self.reload_containers().await;
                self.toast(
                    ToastKind::Success,
                    format!("{} request completed.", kind.verb()),
                )
                .await;
                Ok(())
            }
            Ok(_) => {
                tracing::warn!(action = kind.as_str(), node_id, container_id, "container action rejected");
                self.toast(ToastKind::Error, format!("{} request failed.", kind.verb()))
                    .await;
                Err(ActionError::Rejected)
            }
            Err(e) => {
                tracing::error!(action = kind.as_str(), node_id, container_id, error = %e, "container action failed");
                self.toast(ToastKind::Error, "An error occurred during the request.")
                    .await;
                Err(e.into())
            }
        }
    }

    /// Delete a registered server.
    ///
    /// The central node is refused without a backend call. The row disappears
    /// before the backend answers; on failure the list is reloaded, which
    /// restores it. After success the list reload is retried with a fixed
    /// backoff and, if the deleted node was picked in the node selector, the
    /// selector falls back to the central node.
    pub async fn delete_server(&self, id: &str, confirm: impl Confirm) -> Result<(), ActionError> {
        let central = self.config.central_node_id.as_str();
        if id == central {
            self.toast(ToastKind::Error, "The central server cannot be deleted.")
                .await;
            return Err(ActionError::CentralNode);
        }
        if !confirm.confirm("Are you sure you want to delete this server?") {
            return Err(ActionError::Cancelled);
        }

        let was_selected = {
            let mut page = self.page.write().await;
            page.server_list.remove_row(id);
            page.node_select.selected.as_deref() == Some(id)
        };

        let response = match self.api.delete_node(id).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(node_id = %id, error = %e, "server delete failed");
                self.toast(ToastKind::Error, e.user_message()).await;
                if let Err(reload) = self.refresh_server_list().await {
                    tracing::warn!(error = %reload, "server list reload after failed delete failed");
                }
                return Err(e.into());
            }
        };
        tracing::info!(node_id = %id, "server deleted");
        self.toast(
            ToastKind::Success,
            response
                .message
                .unwrap_or_else(|| "Server deleted.".to_string()),
        )
        .await;

        self.reload_servers_with_retry().await;

        if let Err(e) = self.update_node_select().await {
            tracing::warn!(error = %e, "node selector refresh failed");
        }
        if was_selected {
            self.page.write().await.node_select.select(central);
            if let Err(e) = self.reload_containers().await {
                tracing::warn!(error = %e, "container reload after delete failed");
            }
        }
        Ok(())
    }

    async fn reload_servers_with_retry(&self) {
        let attempts = self.config.reload_retries.max(1);
        let backoff = Duration::from_millis(self.config.reload_backoff_ms);
        for attempt in 1..=attempts {
            match self.refresh_server_list().await {
                Ok(()) => return,
                Err(e) => {
                    tracing::error!(attempt, attempts, error = %e, "server list reload failed");
                    if attempt < attempts {
                        tokio::time::sleep(backoff).await;
                    }
                }
            }
        }
        let mut page = self.page.write().await;
        page.server_list_notice = Some(RELOAD_FAILED.to_string());
        page.toast(ToastKind::Error, RELOAD_FAILED);
    }
}
