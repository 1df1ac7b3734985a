//! SQLite-backed record store

use async_trait::async_trait;
use fyyur_common::db::{Artist, ArtistFields, NewShow, Show, ShowDetail, Venue, VenueFields};
use fyyur_common::Result;
use sqlx::SqlitePool;

use super::{artists, shows, venues, RecordStore};

/// Record store over a `SqlitePool` (foreign keys on, cascade deletes)
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn list_venues(&self) -> Result<Vec<Venue>> {
        venues::list_venues(&self.pool).await
    }

    async fn get_venue(&self, id: i64) -> Result<Option<Venue>> {
        venues::load_venue(&self.pool, id).await
    }

    async fn insert_venue(&self, fields: &VenueFields) -> Result<Venue> {
        venues::insert_venue(&self.pool, fields).await
    }

    async fn update_venue(&self, id: i64, fields: &VenueFields) -> Result<Option<Venue>> {
        venues::update_venue(&self.pool, id, fields).await
    }

    async fn delete_venue(&self, id: i64) -> Result<bool> {
        venues::delete_venue(&self.pool, id).await
    }

    async fn list_artists(&self) -> Result<Vec<Artist>> {
        artists::list_artists(&self.pool).await
    }

    async fn get_artist(&self, id: i64) -> Result<Option<Artist>> {
        artists::load_artist(&self.pool, id).await
    }

    async fn insert_artist(&self, fields: &ArtistFields) -> Result<Artist> {
        artists::insert_artist(&self.pool, fields).await
    }

    async fn update_artist(&self, id: i64, fields: &ArtistFields) -> Result<Option<Artist>> {
        artists::update_artist(&self.pool, id, fields).await
    }

    async fn delete_artist(&self, id: i64) -> Result<bool> {
        artists::delete_artist(&self.pool, id).await
    }

    async fn list_shows(&self) -> Result<Vec<ShowDetail>> {
        shows::list_shows(&self.pool).await
    }

    async fn shows_for_venue(&self, venue_id: i64) -> Result<Vec<ShowDetail>> {
        shows::shows_for_venue(&self.pool, venue_id).await
    }

    async fn shows_for_artist(&self, artist_id: i64) -> Result<Vec<ShowDetail>> {
        shows::shows_for_artist(&self.pool, artist_id).await
    }

    async fn insert_show(&self, show: &NewShow) -> Result<Show> {
        shows::insert_show(&self.pool, show).await
    }
}
