//! Show endpoints

use axum::{
    extract::State,
    response::Response,
    routing::get,
    Form, Json, Router,
};
use fyyur_common::time;

use super::notice::created;
use super::FormPage;
use crate::error::ApiResult;
use crate::forms::{FormFields, ShowForm};
use crate::services::catalog::ShowListing;
use crate::AppState;

/// GET /shows
pub async fn list_shows(State(state): State<AppState>) -> ApiResult<Json<Vec<ShowListing>>> {
    let shows = state.catalog.list_shows().await?;
    Ok(Json(shows))
}

/// GET /shows/create
///
/// Blank form; start_time defaults to the current time
pub async fn create_show_form() -> Json<FormPage<ShowForm>> {
    Json(FormPage::blank(ShowForm::blank(time::now())))
}

/// POST /shows/create
pub async fn create_show(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let form = ShowForm::from_fields(&FormFields::from(pairs));
    created(state.catalog.create_show(&form).await)
}

pub fn show_routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/create", get(create_show_form).post(create_show))
}
