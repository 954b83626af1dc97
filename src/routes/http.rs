// GET handlers: dashboard shell, version

use axum::response::{Html, IntoResponse};

const SHELL: &str = include_str!("shell.html");

/// GET /: the dashboard page; regions are filled from `/ui/page`.
pub(super) async fn index_handler() -> Html<&'static str> {
    Html(SHELL)
}

/// GET /version: package name and version baked in at build time.
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
