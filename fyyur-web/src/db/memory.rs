//! In-memory record store
//!
//! Mirrors the SQLite store's rules (foreign keys on show insert, cascade on
//! delete, id order for listings) so services and handlers can be tested
//! without a database.

use async_trait::async_trait;
use fyyur_common::db::{Artist, ArtistFields, NewShow, Show, ShowDetail, Venue, VenueFields};
use fyyur_common::{Error, Result};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::RecordStore;

#[derive(Default)]
struct Tables {
    venues: BTreeMap<i64, Venue>,
    artists: BTreeMap<i64, Artist>,
    shows: BTreeMap<i64, Show>,
    last_venue_id: i64,
    last_artist_id: i64,
    last_show_id: i64,
}

impl Tables {
    fn detail(&self, show: &Show) -> Option<ShowDetail> {
        let venue = self.venues.get(&show.venue_id)?;
        let artist = self.artists.get(&show.artist_id)?;
        Some(ShowDetail {
            id: show.id,
            venue_id: venue.id,
            venue_name: venue.name.clone(),
            venue_image_link: venue.image_link.clone(),
            artist_id: artist.id,
            artist_name: artist.name.clone(),
            artist_image_link: artist.image_link.clone(),
            start_time: show.start_time,
        })
    }

    fn details<F>(&self, keep: F) -> Vec<ShowDetail>
    where
        F: Fn(&Show) -> bool,
    {
        let mut details: Vec<ShowDetail> = self
            .shows
            .values()
            .filter(|show| keep(show))
            .filter_map(|show| self.detail(show))
            .collect();
        details.sort_by(|a, b| a.start_time.cmp(&b.start_time).then(a.id.cmp(&b.id)));
        details
    }
}

/// Record store held entirely in process memory
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_venues(&self) -> Result<Vec<Venue>> {
        Ok(self.tables.read().await.venues.values().cloned().collect())
    }

    async fn get_venue(&self, id: i64) -> Result<Option<Venue>> {
        Ok(self.tables.read().await.venues.get(&id).cloned())
    }

    async fn insert_venue(&self, fields: &VenueFields) -> Result<Venue> {
        let mut tables = self.tables.write().await;
        tables.last_venue_id += 1;
        let venue = Venue::from_fields(tables.last_venue_id, fields.clone());
        tables.venues.insert(venue.id, venue.clone());
        Ok(venue)
    }

    async fn update_venue(&self, id: i64, fields: &VenueFields) -> Result<Option<Venue>> {
        let mut tables = self.tables.write().await;
        Ok(tables.venues.get_mut(&id).map(|venue| {
            *venue = Venue::from_fields(id, fields.clone());
            venue.clone()
        }))
    }

    async fn delete_venue(&self, id: i64) -> Result<bool> {
        let mut tables = self.tables.write().await;
        if tables.venues.remove(&id).is_none() {
            return Ok(false);
        }
        tables.shows.retain(|_, show| show.venue_id != id);
        Ok(true)
    }

    async fn list_artists(&self) -> Result<Vec<Artist>> {
        Ok(self.tables.read().await.artists.values().cloned().collect())
    }

    async fn get_artist(&self, id: i64) -> Result<Option<Artist>> {
        Ok(self.tables.read().await.artists.get(&id).cloned())
    }

    async fn insert_artist(&self, fields: &ArtistFields) -> Result<Artist> {
        let mut tables = self.tables.write().await;
        tables.last_artist_id += 1;
        let artist = Artist::from_fields(tables.last_artist_id, fields.clone());
        tables.artists.insert(artist.id, artist.clone());
        Ok(artist)
    }

    async fn update_artist(&self, id: i64, fields: &ArtistFields) -> Result<Option<Artist>> {
        let mut tables = self.tables.write().await;
        Ok(tables.artists.get_mut(&id).map(|artist| {
            *artist = Artist::from_fields(id, fields.clone());
            artist.clone()
        }))
    }

    async fn delete_artist(&self, id: i64) -> Result<bool> {
        let mut tables = self.tables.write().await;
        if tables.artists.remove(&id).is_none() {
            return Ok(false);
        }
        tables.shows.retain(|_, show| show.artist_id != id);
        Ok(true)
    }

    async fn list_shows(&self) -> Result<Vec<ShowDetail>> {
        Ok(self.tables.read().await.details(|_| true))
    }

    async fn shows_for_venue(&self, venue_id: i64) -> Result<Vec<ShowDetail>> {
        Ok(self.tables.read().await.details(|show| show.venue_id == venue_id))
    }

    async fn shows_for_artist(&self, artist_id: i64) -> Result<Vec<ShowDetail>> {
        Ok(self.tables.read().await.details(|show| show.artist_id == artist_id))
    }

    async fn insert_show(&self, show: &NewShow) -> Result<Show> {
        let mut tables = self.tables.write().await;
        if !tables.venues.contains_key(&show.venue_id) {
            return Err(Error::Constraint(format!("venue {} does not exist", show.venue_id)));
        }
        if !tables.artists.contains_key(&show.artist_id) {
            return Err(Error::Constraint(format!("artist {} does not exist", show.artist_id)));
        }

        tables.last_show_id += 1;
        let created = Show {
            id: tables.last_show_id,
            venue_id: show.venue_id,
            artist_id: show.artist_id,
            start_time: show.start_time,
        };
        tables.shows.insert(created.id, created.clone());
        Ok(created)
    }
}
