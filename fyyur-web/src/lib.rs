//! fyyur-web library - venue, artist and show listings over HTTP
//!
//! Handlers receive the record store through [`AppState`]; nothing reaches a
//! global connection.

use std::sync::Arc;

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod cli;
pub mod db;
pub mod error;
pub mod forms;
pub mod logging;
pub mod services;

pub use error::{ApiError, ApiResult};

use db::RecordStore;
use services::Catalog;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            catalog: Catalog::new(store),
        }
    }
}

/// Build application router
///
/// Unknown routes get the 404 page; a panicking handler gets the 500 page.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::serve_index))
        .merge(api::health_routes())
        .merge(api::venues::venue_routes())
        .merge(api::artists::artist_routes())
        .merge(api::shows::show_routes())
        .fallback(api::not_found)
        .layer(CatchPanicLayer::custom(api::ui::handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
