// Container models

use serde::{Deserialize, Serialize};

/// Docker container status as reported by the backend (e.g. "running").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerStatus {
    Running,
    Exited,
    Created,
    Restarting,
    Removing,
    Paused,
    Dead,
    #[serde(other)]
    Unknown,
}

impl ContainerStatus {
    /// Parse from a Docker status string, case-insensitively.
    pub fn from_docker(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "running" => ContainerStatus::Running,
            "exited" => ContainerStatus::Exited,
            "created" => ContainerStatus::Created,
            "restarting" => ContainerStatus::Restarting,
            "removing" => ContainerStatus::Removing,
            "paused" => ContainerStatus::Paused,
            "dead" => ContainerStatus::Dead,
            _ => ContainerStatus::Unknown,
        }
    }
}

/// One container on a node. Only started/stopped/restarted from here, never created or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Raw status string, kept for display.
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<String>,
}

impl Container {
    pub fn state(&self) -> ContainerStatus {
        ContainerStatus::from_docker(&self.status)
    }

    pub fn is_running(&self) -> bool {
        self.status.eq_ignore_ascii_case("running")
    }
}

/// Body of `POST /api/containers/{start,stop,restart}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerAction {
    pub node_id: String,
    pub container_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Start,
    Stop,
    Restart,
}

impl ActionKind {
    /// Path segment under `/api/containers/`.
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Start => "start",
            ActionKind::Stop => "stop",
            ActionKind::Restart => "restart",
        }
    }

    /// Human-readable verb for confirmations and toasts.
    pub fn verb(self) -> &'static str {
        match self {
            ActionKind::Start => "Start",
            ActionKind::Stop => "Stop",
            ActionKind::Restart => "Restart",
        }
    }
}

impl std::str::FromStr for ActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(ActionKind::Start),
            "stop" => Ok(ActionKind::Stop),
            "restart" => Ok(ActionKind::Restart),
            other => Err(format!("unknown container action: {}", other)),
        }
    }
}

/// Response of a container action. A missing `ok` counts as success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
}

impl ActionResult {
    pub fn succeeded(&self) -> bool {
        self.ok != Some(false)
    }
}
