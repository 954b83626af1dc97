// Add/edit server modal and connection tests

use super::Dashboard;
use crate::error::{ActionError, ApiError, FormError};
use crate::models::{ConnectionTest, NodeForm};
use crate::render::escape;
use crate::ui::{ServerFormModal, TestResult, TestResultState, ToastKind};

const TRANSIENT_LABEL: &str = "Test";

fn pending_result() -> TestResult {
    TestResult {
        state: TestResultState::Pending,
        html: r#"<i class="fas fa-spinner fa-spin"></i> Testing connection..."#.to_string(),
    }
}

fn connection_result(test: &ConnectionTest) -> TestResult {
    if test.ok {
        TestResult {
            state: TestResultState::Success,
            html: format!(
                r#"<i class="fas fa-check-circle"></i> <strong>Connection successful!</strong><br>Docker version: {}<br>API version: {}"#,
                escape(test.version.as_deref().unwrap_or("N/A")),
                escape(test.api_version.as_deref().unwrap_or("N/A")),
            ),
        }
    } else {
        TestResult {
            state: TestResultState::Error,
            html: format!(
                r#"<i class="fas fa-times-circle"></i> <strong>Connection failed</strong><br>{}"#,
                escape(test.error.as_deref().unwrap_or("Unknown error")),
            ),
        }
    }
}

fn request_failed_result(e: &ApiError) -> TestResult {
    TestResult {
        state: TestResultState::Error,
        html: format!(
            r#"<i class="fas fa-times-circle"></i> <strong>Connection test failed</strong><br>{}"#,
            escape(&e.user_message()),
        ),
    }
}

impl Dashboard {
    pub async fn show_add_server_form(&self) {
        self.page.write().await.server_form = ServerFormModal {
            open: true,
            editing_id: None,
            title: "Add server".to_string(),
            fields: NodeForm::default(),
            test_result: None,
        };
    }

    /// Open the modal pre-filled with the server's current record.
    pub async fn edit_server(&self, id: &str) -> Result<(), ActionError> {
        let server = match self.api.get_node(id).await {
            Ok(server) => server,
            Err(e) => {
                tracing::error!(node_id = %id, error = %e, "failed to load server for editing");
                self.toast(ToastKind::Error, "Failed to load the server information.")
                    .await;
                return Err(e.into());
            }
        };
        self.page.write().await.server_form = ServerFormModal {
            open: true,
            editing_id: Some(server.id.clone()),
            title: "Edit server".to_string(),
            fields: NodeForm::new(server.id, server.label, server.base_url),
            test_result: None,
        };
        Ok(())
    }

    /// Close (or cancel) the modal, discarding its fields.
    pub async fn close_server_form(&self) {
        self.page.write().await.server_form = ServerFormModal::default();
    }

    /// Create or update depending on whether the modal is editing.
    pub async fn save_server(&self, form: &NodeForm) -> Result<(), ActionError> {
        let form = form.trimmed();
        if form.id.is_empty() || form.label.is_empty() || form.base_url.is_empty() {
            self.toast(ToastKind::Error, FormError::MissingFields.to_string())
                .await;
            return Err(FormError::MissingFields.into());
        }

        let editing_id = {
            let mut page = self.page.write().await;
            page.server_form.fields = form.clone();
            page.server_form.editing_id.clone()
        };
        let result = match &editing_id {
            Some(id) => self.api.update_node(id, &form).await,
            None => self.api.add_node(&form).await,
        };

        match result {
            Ok(response) => {
                tracing::info!(node_id = %form.id, updated = editing_id.is_some(), "server saved");
                self.toast(
                    ToastKind::Success,
                    response
                        .message
                        .unwrap_or_else(|| "Server saved.".to_string()),
                )
                .await;
                let _ = self.load_server_list().await;
                if let Err(e) = self.update_node_select().await {
                    tracing::warn!(error = %e, "node selector refresh failed");
                }
                self.close_server_form().await;
                Ok(())
            }
            Err(e) => {
                tracing::error!(node_id = %form.id, error = %e, "server save failed");
                self.toast(ToastKind::Error, e.user_message()).await;
                Err(e.into())
            }
        }
    }

    /// Test the connection described by the form. When the id is not yet
    /// registered a transient node is created for the test and always removed
    /// afterwards; a failed removal is only logged.
    pub async fn test_server_connection(
        &self,
        form: &NodeForm,
    ) -> Result<ConnectionTest, ActionError> {
        let form = form.trimmed();
        if form.base_url.is_empty() {
            self.toast(ToastKind::Error, FormError::MissingUrl.to_string())
                .await;
            return Err(FormError::MissingUrl.into());
        }
        if form.id.is_empty() {
            self.toast(ToastKind::Error, FormError::MissingId.to_string())
                .await;
            return Err(FormError::MissingId.into());
        }

        self.page.write().await.server_form.test_result = Some(pending_result());

        let result = self.run_connection_test(&form).await;
        let rendered = match &result {
            Ok(test) => connection_result(test),
            Err(e) => request_failed_result(e),
        };
        self.page.write().await.server_form.test_result = Some(rendered);
        result.map_err(ActionError::from)
    }

    async fn run_connection_test(&self, form: &NodeForm) -> Result<ConnectionTest, ApiError> {
        let transient = match self.api.get_node(&form.id).await {
            Ok(_) => false,
            Err(e) if e.status() == Some(404) => {
                let temp = NodeForm::new(&form.id, TRANSIENT_LABEL, &form.base_url);
                self.api.add_node(&temp).await?;
                tracing::debug!(node_id = %form.id, "registered transient node for connection test");
                true
            }
            Err(e) => return Err(e),
        };

        let result = self.api.test_node(&form.id).await;

        if transient {
            if let Err(e) = self.api.delete_node(&form.id).await {
                tracing::warn!(node_id = %form.id, error = %e, "failed to remove transient test node");
            }
        }
        result
    }

    /// Test an already registered server from its list row.
    pub async fn test_server_connection_by_id(
        &self,
        id: &str,
    ) -> Result<ConnectionTest, ActionError> {
        self.toast(ToastKind::Info, "Testing connection...").await;
        let result = self.api.test_node(id).await;
        match &result {
            Ok(test) if test.ok => {
                self.toast(
                    ToastKind::Success,
                    format!(
                        "Connection successful! Docker {}",
                        test.version.as_deref().unwrap_or("N/A")
                    ),
                )
                .await;
            }
            Ok(test) => {
                self.toast(
                    ToastKind::Error,
                    format!(
                        "Connection failed: {}",
                        test.error.as_deref().unwrap_or("Unknown error")
                    ),
                )
                .await;
            }
            Err(e) => {
                tracing::error!(node_id = %id, error = %e, "connection test failed");
                self.toast(ToastKind::Error, "An error occurred while testing the connection.")
                    .await;
            }
        }
        let _ = self.load_server_list().await;
        result.map_err(ActionError::from)
    }
}
