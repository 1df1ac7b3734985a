//! Venue endpoints

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Form, Json, Router,
};
use fyyur_common::time;

use super::notice::created;
use super::{record_id, FormPage, SearchQuery};
use crate::error::ApiResult;
use crate::forms::{FormFields, VenueForm};
use crate::services::catalog::VenueDetail;
use crate::services::search::SearchResults;
use crate::services::venue_grouper::VenueArea;
use crate::AppState;

/// GET /venues
///
/// Venues grouped by (city, state) with upcoming show counts
pub async fn list_venues(State(state): State<AppState>) -> ApiResult<Json<Vec<VenueArea>>> {
    let areas = state.catalog.venue_areas(time::now()).await?;
    Ok(Json(areas))
}

/// GET /venues/search?search_term=...
pub async fn search_venues(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<SearchResults>> {
    run_search(&state, &query.search_term).await
}

/// POST /venues/search
pub async fn search_venues_form(
    State(state): State<AppState>,
    Form(query): Form<SearchQuery>,
) -> ApiResult<Json<SearchResults>> {
    run_search(&state, &query.search_term).await
}

async fn run_search(state: &AppState, term: &str) -> ApiResult<Json<SearchResults>> {
    let results = state.catalog.search_venues(term, time::now()).await?;
    Ok(Json(results))
}

/// GET /venues/:id
pub async fn show_venue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<VenueDetail>> {
    let id = record_id("venue", &id)?;
    let detail = state.catalog.venue_detail(id, time::now()).await?;
    Ok(Json(detail))
}

/// GET /venues/create
pub async fn create_venue_form() -> Json<FormPage<VenueForm>> {
    Json(FormPage::blank(VenueForm::default()))
}

/// POST /venues/create
pub async fn create_venue(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let form = VenueForm::from_fields(&FormFields::from(pairs));
    created(state.catalog.create_venue(&form).await)
}

/// GET /venues/:id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<FormPage<VenueForm>>> {
    let id = record_id("venue", &id)?;
    let form = state.catalog.venue_form(id).await?;
    Ok(Json(FormPage::edit(id, form)))
}

/// POST /venues/:id/edit
pub async fn edit_venue(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> ApiResult<Response> {
    let id = record_id("venue", &id)?;
    let form = VenueForm::from_fields(&FormFields::from(pairs));
    let outcome = state.catalog.update_venue(id, &form).await?;
    Ok(outcome.into_response())
}

/// DELETE /venues/:id
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let id = record_id("venue", &id)?;
    let outcome = state.catalog.delete_venue(id).await?;
    Ok(outcome.into_response())
}

pub fn venue_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", get(search_venues).post(search_venues_form))
        .route("/venues/create", get(create_venue_form).post(create_venue))
        .route("/venues/:id", get(show_venue).delete(delete_venue))
        .route("/venues/:id/edit", get(edit_venue_form).post(edit_venue))
}
