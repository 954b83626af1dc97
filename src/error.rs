// Error types for the backend REST boundary and form validation

use thiserror::Error;

/// Failure of one request against the node-management backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, body read failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response; `message` is the body's `detail` or the status text.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The body was not the expected JSON shape.
    #[error("unexpected response format: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(e) if !e.is_decode())
    }

    /// Message shown to the user in a toast.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(e) if !e.is_decode() => {
                "Cannot reach the server. Check the network connection.".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Client-side validation failure of the add/edit server form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please enter a URL.")]
    MissingUrl,
    #[error("Please enter a server ID before testing.")]
    MissingId,
}

/// Why a user-initiated workflow did not complete. The user has already been
/// told (toast or inline message) by the time one of these is returned.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("the central server cannot be deleted")]
    CentralNode,

    #[error("the backend rejected the request")]
    Rejected,

    #[error("cancelled by the user")]
    Cancelled,
}
