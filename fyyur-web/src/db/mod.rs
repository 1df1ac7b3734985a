//! Record store: persistent storage of venues, artists and shows
//!
//! Handlers never touch a global connection. They receive an
//! `Arc<dyn RecordStore>` through `AppState`, which is either the SQLite
//! implementation or the in-memory one used by tests.

use async_trait::async_trait;
use fyyur_common::db::{Artist, ArtistFields, NewShow, Show, ShowDetail, Venue, VenueFields};
use fyyur_common::Result;

pub mod artists;
pub mod memory;
pub mod shows;
pub mod sqlite;
pub mod venues;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Transactional create/read/update/delete over the three entity tables
///
/// Every mutation is all-or-nothing. `update_*` and `delete_*` report a
/// missing id as `Ok(None)` / `Ok(false)` rather than an error. Deleting a
/// venue or artist also deletes its shows.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn list_venues(&self) -> Result<Vec<Venue>>;
    async fn get_venue(&self, id: i64) -> Result<Option<Venue>>;
    async fn insert_venue(&self, fields: &VenueFields) -> Result<Venue>;
    async fn update_venue(&self, id: i64, fields: &VenueFields) -> Result<Option<Venue>>;
    async fn delete_venue(&self, id: i64) -> Result<bool>;

    async fn list_artists(&self) -> Result<Vec<Artist>>;
    async fn get_artist(&self, id: i64) -> Result<Option<Artist>>;
    async fn insert_artist(&self, fields: &ArtistFields) -> Result<Artist>;
    async fn update_artist(&self, id: i64, fields: &ArtistFields) -> Result<Option<Artist>>;
    async fn delete_artist(&self, id: i64) -> Result<bool>;

    /// All shows, ordered by start time
    async fn list_shows(&self) -> Result<Vec<ShowDetail>>;
    async fn shows_for_venue(&self, venue_id: i64) -> Result<Vec<ShowDetail>>;
    async fn shows_for_artist(&self, artist_id: i64) -> Result<Vec<ShowDetail>>;

    /// Fails with a constraint violation when either referenced record is missing
    async fn insert_show(&self, show: &NewShow) -> Result<Show>;
}
