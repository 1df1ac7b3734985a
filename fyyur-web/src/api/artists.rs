//! Artist endpoints

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
use crate::forms::{ArtistForm, FormFields};
use crate::services::catalog::{ArtistDetail, ArtistSummary};
use crate::services::search::SearchResults;
use crate::AppState;

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> ApiResult<Json<Vec<ArtistSummary>>> {
    let artists = state.catalog.list_artists().await?;
    Ok(Json(artists))
}

/// GET /artists/search?search_term=...
pub async fn search_artists(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<SearchResults>> {
    run_search(&state, &query.search_term).await
}

/// POST /artists/search
pub async fn search_artists_form(
    State(state): State<AppState>,
    Form(query): Form<SearchQuery>,
) -> ApiResult<Json<SearchResults>> {
    run_search(&state, &query.search_term).await
}

async fn run_search(state: &AppState, term: &str) -> ApiResult<Json<SearchResults>> {
    let results = state.catalog.search_artists(term, time::now()).await?;
    Ok(Json(results))
}

/// GET /artists/:id
pub async fn show_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ArtistDetail>> {
    let id = record_id("artist", &id)?;
    let detail = state.catalog.artist_detail(id, time::now()).await?;
    Ok(Json(detail))
}

/// GET /artists/create
pub async fn create_artist_form() -> Json<FormPage<ArtistForm>> {
    Json(FormPage::blank(ArtistForm::default()))
}

/// POST /artists/create
pub async fn create_artist(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let form = ArtistForm::from_fields(&FormFields::from(pairs));
    created(state.catalog.create_artist(&form).await)
}

/// GET /artists/:id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<FormPage<ArtistForm>>> {
    let id = record_id("artist", &id)?;
    let form = state.catalog.artist_form(id).await?;
    Ok(Json(FormPage::edit(id, form)))
}

/// POST /artists/:id/edit
pub async fn edit_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> ApiResult<Response> {
    let id = record_id("artist", &id)?;
    let form = ArtistForm::from_fields(&FormFields::from(pairs));
    let outcome = state.catalog.update_artist(id, &form).await?;
    Ok(outcome.into_response())
}

/// DELETE /artists/:id
pub async fn delete_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let id = record_id("artist", &id)?;
    let outcome = state.catalog.delete_artist(id).await?;
    Ok(outcome.into_response())
}

pub fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", get(search_artists).post(search_artists_form))
        .route("/artists/create", get(create_artist_form).post(create_artist))
        .route("/artists/:id", get(show_artist).delete(delete_artist))
        .route("/artists/:id/edit", get(edit_artist_form).post(edit_artist))
}
