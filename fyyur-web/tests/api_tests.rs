//! Integration tests for fyyur-web API endpoints
//!
//! Each test drives the full router against a fresh in-memory SQLite
//! database.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use async_trait::async_trait;
use fyyur_common::db::{
    init_memory_database, Artist, ArtistFields, NewShow, Show, ShowDetail, Venue, VenueFields,
};
use fyyur_common::{Error, Result};
use fyyur_web::db::{RecordStore, SqliteStore};
use fyyur_web::{build_router, AppState};
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: router plus the pool behind it
async fn setup_app() -> (Router, SqlitePool) {
    let pool = init_memory_database()
        .await
        .expect("Should create in-memory database");
    let state = AppState::new(Arc::new(SqliteStore::new(pool.clone())));
    (build_router(state), pool)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, pairs: &[(&str, &str)]) -> Request<Body> {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

/// Test helper: send a request and parse the JSON body
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn create_venue(app: &Router, name: &str, city: &str, state: &str) -> i64 {
    let (status, body) = send(
        app,
        post_form(
            "/venues/create",
            &[
                ("name", name),
                ("city", city),
                ("state", state),
                ("address", "1015 Folsom Street"),
                ("phone", "123-123-1234"),
                ("genres", "Jazz"),
                ("genres", "Reggae"),
                ("website_link", "https://www.themusicalhop.com"),
                ("seeking_talent", "y"),
            ],
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["record"]["id"].as_i64().unwrap()
}

async fn create_artist(app: &Router, name: &str) -> i64 {
    let (status, body) = send(
        app,
        post_form(
            "/artists/create",
            &[
                ("name", name),
                ("city", "San Francisco"),
                ("state", "CA"),
                ("phone", "326-123-5000"),
                ("genres", "Rock n Roll"),
            ],
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["record"]["id"].as_i64().unwrap()
}

async fn create_show(app: &Router, venue_id: i64, artist_id: i64, start: &str) -> (StatusCode, Value) {
    send(
        app,
        post_form(
            "/shows/create",
            &[
                ("venue_id", &venue_id.to_string()),
                ("artist_id", &artist_id.to_string()),
                ("start_time", start),
            ],
        ),
    )
    .await
}

async fn show_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM show")
        .fetch_one(pool)
        .await
        .unwrap()
}

// =============================================================================
// Health and pages
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "fyyur-web");
    assert!(body["version"].is_string());
    assert!(body["build"]["git_hash"].is_string());
}

#[tokio::test]
async fn test_home_page_is_html() {
    let (app, _pool) = setup_app().await;

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_unknown_route_is_404_page() {
    let (app, _pool) = setup_app().await;

    let response = app.oneshot(get("/no/such/page")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Venues
// =============================================================================

#[tokio::test]
async fn test_venue_listing_groups_by_city_and_state() {
    let (app, _pool) = setup_app().await;
    create_venue(&app, "The Musical Hop", "San Francisco", "CA").await;
    create_venue(&app, "The Dueling Pianos Bar", "New York", "NY").await;
    create_venue(&app, "Park Square Live Music & Coffee", "San Francisco", "CA").await;
    create_venue(&app, "Hollywood Bowl", "Los Angeles", "CA").await;

    let (status, body) = send(&app, get("/venues")).await;

    assert_eq!(status, StatusCode::OK);
    let areas = body.as_array().unwrap();
    assert_eq!(areas.len(), 3);
    assert_eq!(areas[0]["city"], "San Francisco");
    assert_eq!(areas[0]["venues"].as_array().unwrap().len(), 2);
    assert_eq!(areas[1]["city"], "New York");
    assert_eq!(areas[2]["city"], "Los Angeles");
    assert_eq!(areas[2]["state"], "CA");
}

#[tokio::test]
async fn test_venue_search_get_and_post() {
    let (app, _pool) = setup_app().await;
    create_venue(&app, "The Musical Hop", "San Francisco", "CA").await;
    create_venue(&app, "Park Square Live Music & Coffee", "San Francisco", "CA").await;

    let (status, body) = send(&app, get("/venues/search?search_term=Hop")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["search_term"], "Hop");
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "The Musical Hop");

    let (_, body) = send(&app, post_form("/venues/search", &[("search_term", "Music")])).await;
    assert_eq!(body["search_term"], "Music");
    assert_eq!(body["count"], 2);

    let (_, body) = send(&app, post_form("/venues/search", &[("search_term", "music")])).await;
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn test_create_venue_without_name_persists_nothing() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(
        &app,
        post_form(
            "/venues/create",
            &[
                ("name", ""),
                ("city", "San Francisco"),
                ("state", "CA"),
                ("address", "1015 Folsom Street"),
                ("genres", "Jazz"),
            ],
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], "invalid");
    assert_eq!(body["errors"][0]["field"], "name");
    assert_eq!(body["notices"][0], "name This field is required.");

    let (_, listing) = send(&app, get("/venues")).await;
    assert!(listing.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_venue_reports_notice() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(
        &app,
        post_form(
            "/venues/create",
            &[
                ("name", "The Musical Hop"),
                ("city", "San Francisco"),
                ("state", "CA"),
                ("address", "1015 Folsom Street"),
                ("genres", "Jazz"),
                ("genres", "Folk"),
            ],
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["notice"], "Venue The Musical Hop was successfully listed!");
    assert_eq!(body["record"]["genres"], serde_json::json!(["Jazz", "Folk"]));
    assert_eq!(body["record"]["seeking_talent"], false);
}

#[tokio::test]
async fn test_venue_detail_splits_past_and_upcoming() {
    let (app, _pool) = setup_app().await;
    let venue_id = create_venue(&app, "The Musical Hop", "San Francisco", "CA").await;
    let artist_id = create_artist(&app, "Guns N Petals").await;
    create_show(&app, venue_id, artist_id, "2019-05-21 21:30:00").await;
    create_show(&app, venue_id, artist_id, "2099-04-01 20:00:00").await;

    let (status, body) = send(&app, get(&format!("/venues/{}", venue_id))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "The Musical Hop");
    assert_eq!(body["past_shows_count"], 1);
    assert_eq!(body["upcoming_shows_count"], 1);
    assert_eq!(body["past_shows"][0]["artist_name"], "Guns N Petals");
    assert_eq!(body["past_shows"][0]["start_time"], "2019-05-21T21:30:00Z");
}

#[tokio::test]
async fn test_venue_edit_round_trip() {
    let (app, _pool) = setup_app().await;
    let venue_id = create_venue(&app, "The Musical Hop", "San Francisco", "CA").await;

    let (status, page) = send(&app, get(&format!("/venues/{}/edit", venue_id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["form"]["name"], "The Musical Hop");
    assert!(page["choices"]["states"].as_array().unwrap().len() > 50);

    let (status, body) = send(
        &app,
        post_form(
            &format!("/venues/{}/edit", venue_id),
            &[
                ("name", "The Musical Hop"),
                ("city", "Oakland"),
                ("state", "CA"),
                ("address", "1 Broadway"),
                ("genres", "Blues"),
            ],
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notice"], "Venue The Musical Hop has been updated successfully.");
    let (_, detail) = send(&app, get(&format!("/venues/{}", venue_id))).await;
    assert_eq!(detail["city"], "Oakland");
    assert_eq!(detail["genres"], serde_json::json!(["Blues"]));
    assert_eq!(detail["website"], Value::Null);
}

#[tokio::test]
async fn test_delete_venue_cascades_to_shows() {
    let (app, pool) = setup_app().await;
    let hop = create_venue(&app, "The Musical Hop", "San Francisco", "CA").await;
    let park = create_venue(&app, "Park Square Live Music & Coffee", "San Francisco", "CA").await;
    let artist_id = create_artist(&app, "Guns N Petals").await;
    create_show(&app, hop, artist_id, "2099-04-01 20:00:00").await;
    create_show(&app, park, artist_id, "2099-04-08 20:00:00").await;

    let (status, body) = send(&app, delete(&format!("/venues/{}", hop))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notice"], "Venue The Musical Hop has been deleted.");
    assert_eq!(show_count(&pool).await, 1);
    let (status, _) = send(&app, get(&format!("/venues/{}", hop))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_venue_is_404() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(&app, get("/venues/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, _) = send(&app, get("/venues/999/edit")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, delete("/venues/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, get("/venues/not-a-number")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Artists
// =============================================================================

#[tokio::test]
async fn test_artist_listing_and_search() {
    let (app, _pool) = setup_app().await;
    create_artist(&app, "Guns N Petals").await;
    create_artist(&app, "Matt Quevedo").await;
    create_artist(&app, "The Wild Sax Band").await;

    let (status, body) = send(&app, get("/artists")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
    assert!(body[0].get("num_upcoming_shows").is_none());

    let (_, body) = send(&app, post_form("/artists/search", &[("search_term", "A")])).await;
    assert_eq!(body["search_term"], "A");
    assert_eq!(body["count"], 3);

    let (_, body) = send(&app, get("/artists/search?search_term=band")).await;
    assert_eq!(body["search_term"], "band");
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "The Wild Sax Band");
}

#[tokio::test]
async fn test_artist_requires_phone() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(
        &app,
        post_form(
            "/artists/create",
            &[
                ("name", "Matt Quevedo"),
                ("city", "New York"),
                ("state", "NY"),
                ("genres", "Jazz"),
            ],
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"][0]["field"], "phone");
}

#[tokio::test]
async fn test_artist_upcoming_counts_follow_artist() {
    let (app, _pool) = setup_app().await;
    let venue_id = create_venue(&app, "The Musical Hop", "San Francisco", "CA").await;
    let petals = create_artist(&app, "Guns N Petals").await;
    let sax = create_artist(&app, "The Wild Sax Band").await;
    create_show(&app, venue_id, sax, "2099-04-01 20:00:00").await;
    create_show(&app, venue_id, sax, "2099-04-08 20:00:00").await;

    let (_, body) = send(&app, get("/artists/search?search_term=")).await;
    let data = body["data"].as_array().unwrap();
    let count_for = |id: i64| {
        data.iter()
            .find(|entry| entry["id"] == id)
            .map(|entry| entry["num_upcoming_shows"].clone())
            .unwrap()
    };

    assert_eq!(count_for(petals), 0);
    assert_eq!(count_for(sax), 2);
}

#[tokio::test]
async fn test_delete_artist_cascades_to_shows() {
    let (app, pool) = setup_app().await;
    let venue_id = create_venue(&app, "The Musical Hop", "San Francisco", "CA").await;
    let artist_id = create_artist(&app, "Guns N Petals").await;
    create_show(&app, venue_id, artist_id, "2099-04-01 20:00:00").await;

    let (status, body) = send(&app, delete(&format!("/artists/{}", artist_id))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notice"], "Artist Guns N Petals has been deleted.");
    assert_eq!(show_count(&pool).await, 0);
}

// =============================================================================
// Shows
// =============================================================================

#[tokio::test]
async fn test_create_show_and_list() {
    let (app, _pool) = setup_app().await;
    let venue_id = create_venue(&app, "The Musical Hop", "San Francisco", "CA").await;
    let artist_id = create_artist(&app, "Guns N Petals").await;

    let (status, body) = create_show(&app, venue_id, artist_id, "2099-04-01T20:00:00Z").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["notice"], "Show was successfully listed!");

    let (status, body) = send(&app, get("/shows")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["venue_name"], "The Musical Hop");
    assert_eq!(body[0]["artist_name"], "Guns N Petals");
    assert_eq!(body[0]["start_time"], "2099-04-01T20:00:00Z");
}

#[tokio::test]
async fn test_show_with_unknown_venue_is_not_created() {
    let (app, pool) = setup_app().await;
    let artist_id = create_artist(&app, "Guns N Petals").await;

    let (status, body) = create_show(&app, 999, artist_id, "2099-04-01 20:00:00").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert_eq!(body["notice"], "An error occurred. Show could not be listed.");
    assert_eq!(show_count(&pool).await, 0);
}

#[tokio::test]
async fn test_show_with_bad_start_time_is_invalid() {
    let (app, pool) = setup_app().await;

    let (status, body) = create_show(&app, 1, 1, "next tuesday").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"][0]["field"], "start_time");
    assert_eq!(show_count(&pool).await, 0);
}

#[tokio::test]
async fn test_blank_show_form_defaults_start_time() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(&app, get("/shows/create")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["form"]["start_time"].as_str().unwrap().is_empty());
    assert_eq!(body["form"]["venue_id"], "");
}

// =============================================================================
// Store failures
// =============================================================================

/// Store whose database is gone: every call fails, and `list_artists` panics
struct BrokenStore;

fn pool_closed<T>() -> Result<T> {
    Err(Error::Database(sqlx::Error::PoolClosed))
}

#[async_trait]
impl RecordStore for BrokenStore {
    async fn list_venues(&self) -> Result<Vec<Venue>> {
        pool_closed()
    }
    async fn get_venue(&self, _id: i64) -> Result<Option<Venue>> {
        pool_closed()
    }
    async fn insert_venue(&self, _fields: &VenueFields) -> Result<Venue> {
        pool_closed()
    }
    async fn update_venue(&self, _id: i64, _fields: &VenueFields) -> Result<Option<Venue>> {
        pool_closed()
    }
    async fn delete_venue(&self, _id: i64) -> Result<bool> {
        pool_closed()
    }
    async fn list_artists(&self) -> Result<Vec<Artist>> {
        panic!("artist table vanished");
    }
    async fn get_artist(&self, _id: i64) -> Result<Option<Artist>> {
        pool_closed()
    }
    async fn insert_artist(&self, _fields: &ArtistFields) -> Result<Artist> {
        pool_closed()
    }
    async fn update_artist(&self, _id: i64, _fields: &ArtistFields) -> Result<Option<Artist>> {
        pool_closed()
    }
    async fn delete_artist(&self, _id: i64) -> Result<bool> {
        pool_closed()
    }
    async fn list_shows(&self) -> Result<Vec<ShowDetail>> {
        pool_closed()
    }
    async fn shows_for_venue(&self, _venue_id: i64) -> Result<Vec<ShowDetail>> {
        pool_closed()
    }
    async fn shows_for_artist(&self, _artist_id: i64) -> Result<Vec<ShowDetail>> {
        pool_closed()
    }
    async fn insert_show(&self, _show: &NewShow) -> Result<Show> {
        pool_closed()
    }
}

fn broken_app() -> Router {
    build_router(AppState::new(Arc::new(BrokenStore)))
}

async fn assert_failure_page(app: Router, uri: &str) {
    let response = app.oneshot(get(uri)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(!page.contains("pool"));
    assert!(!page.contains("vanished"));
}

#[tokio::test]
async fn test_failed_venue_create_reports_notice() {
    let app = broken_app();

    let (status, body) = send(
        &app,
        post_form(
            "/venues/create",
            &[
                ("name", "The Musical Hop"),
                ("city", "San Francisco"),
                ("state", "CA"),
                ("address", "1015 Folsom Street"),
                ("genres", "Jazz"),
            ],
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert_eq!(body["notice"], "An error occurred. Venue The Musical Hop could not be listed.");
}

#[tokio::test]
async fn test_failed_read_renders_failure_page() {
    assert_failure_page(broken_app(), "/venues").await;
    assert_failure_page(broken_app(), "/venues/1").await;
}

#[tokio::test]
async fn test_panicking_handler_renders_failure_page() {
    assert_failure_page(broken_app(), "/artists").await;
}
