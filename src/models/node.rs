// Node (server) models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Central,
    #[default]
    #[serde(other)]
    Client,
}

/// Connection status; recomputed by the backend and only ever read here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Online,
    Offline,
    #[default]
    #[serde(other)]
    Unknown,
}

impl NodeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeStatus::Online => "online",
            NodeStatus::Offline => "offline",
            NodeStatus::Unknown => "unknown",
        }
    }
}

impl NodeRole {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeRole::Central => "central",
            NodeRole::Client => "client",
        }
    }
}

/// A Docker-accessible host registered with the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub role: NodeRole,
    #[serde(default)]
    pub status: NodeStatus,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_check: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Server {
    pub fn is_central(&self) -> bool {
        self.role == NodeRole::Central
    }

    /// Label, or the id when the label is blank.
    pub fn display_name(&self) -> &str {
        if self.label.is_empty() {
            &self.id
        } else {
            &self.label
        }
    }
}

/// Request body for creating or updating a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeForm {
    pub id: String,
    pub label: String,
    pub base_url: String,
    /// TLS is not offered in the form; always sent as false.
    #[serde(default)]
    pub tls: bool,
}

impl NodeForm {
    pub fn new(id: impl Into<String>, label: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            base_url: base_url.into(),
            tls: false,
        }
    }

    /// Copy with every field trimmed and `tls` forced off.
    pub fn trimmed(&self) -> Self {
        Self {
            id: self.id.trim().to_string(),
            label: self.label.trim().to_string(),
            base_url: self.base_url.trim().to_string(),
            tls: false,
        }
    }
}

/// Response of node create/update/delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response of `POST /api/nodes/{id}/test`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionTest {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
