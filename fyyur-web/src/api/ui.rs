//! Home page and error pages

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

const INDEX_HTML: &str = include_str!("../ui/index.html");
const NOT_FOUND_HTML: &str = include_str!("../ui/404.html");
const SERVER_ERROR_HTML: &str = include_str!("../ui/500.html");

/// GET /
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Fallback for unknown routes
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_HTML)).into_response()
}

/// Generic failure page; carries nothing about the cause
pub fn server_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Html(SERVER_ERROR_HTML)).into_response()
}

/// `CatchPanicLayer` handler
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = panic.downcast_ref::<String>() {
        msg.as_str()
    } else if let Some(msg) = panic.downcast_ref::<&str>() {
        *msg
    } else {
        "unknown panic payload"
    };
    error!("Handler panicked: {}", detail);
    server_error()
}
