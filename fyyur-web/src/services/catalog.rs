//! CRUD catalog: validates input, mutates the record store, builds views
//!
//! Reads that miss return `Error::NotFound`. Mutations return a
//! [`MutationOutcome`]; a store failure during a mutation is logged and turned
//! into the generic failure notice, never propagated as an error.

use chrono::{DateTime, Utc};
use fyyur_common::db::{Artist, Show, Venue};
use fyyur_common::time::to_iso8601;
use fyyur_common::{Error, Result};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

use super::outcome::MutationOutcome;
use super::search::{self, SearchResults};
use super::show_classifier::{ArtistShow, ShowBreakdown, VenueShow};
use super::venue_grouper::{group_by_area, VenueArea};
use crate::db::RecordStore;
use crate::forms::{ArtistForm, ShowForm, VenueForm};

/// Venue page: the venue's own fields plus its classified shows
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    #[serde(flatten)]
    pub shows: ShowBreakdown<VenueShow>,
}

/// Artist page: the artist's own fields plus its classified shows
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    #[serde(flatten)]
    pub shows: ShowBreakdown<ArtistShow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistSummary {
    pub id: i64,
    pub name: String,
}

/// Row of the `/shows` listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn RecordStore>,
}

impl Catalog {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    // ------------------------------------------------------------------
    // Venues
    // ------------------------------------------------------------------

    pub async fn venue_areas(&self, now: DateTime<Utc>) -> Result<Vec<VenueArea>> {
        let venues = self.store.list_venues().await?;
        let shows = self.store.list_shows().await?;
        Ok(group_by_area(&venues, &shows, now))
    }

    pub async fn search_venues(&self, term: &str, now: DateTime<Utc>) -> Result<SearchResults> {
        let venues = self.store.list_venues().await?;
        let shows = self.store.list_shows().await?;
        Ok(search::search_venues(&venues, &shows, term, now))
    }

    pub async fn venue_detail(&self, id: i64, now: DateTime<Utc>) -> Result<VenueDetail> {
        let venue = self.require_venue(id).await?;
        let shows = self.store.shows_for_venue(id).await?;
        Ok(VenueDetail {
            venue,
            shows: ShowBreakdown::classify(&shows, now),
        })
    }

    /// Edit form pre-populated with the venue's current values
    pub async fn venue_form(&self, id: i64) -> Result<VenueForm> {
        let venue = self.require_venue(id).await?;
        Ok(VenueForm::from_venue(&venue))
    }

    pub async fn create_venue(&self, form: &VenueForm) -> MutationOutcome<Venue> {
        let fields = match form.validate() {
            Ok(fields) => fields,
            Err(errors) => return MutationOutcome::ValidationFailed(errors),
        };

        match self.store.insert_venue(&fields).await {
            Ok(venue) => {
                info!("Venue {} ({}) listed", venue.id, venue.name);
                MutationOutcome::Success {
                    notice: format!("Venue {} was successfully listed!", venue.name),
                    record: venue,
                }
            }
            Err(e) => {
                error!("Failed to list venue {}: {}", fields.name, e);
                MutationOutcome::PersistenceFailed {
                    notice: format!("An error occurred. Venue {} could not be listed.", fields.name),
                }
            }
        }
    }

    /// Full replace of the venue's fields; unknown id is `Err(NotFound)`
    pub async fn update_venue(&self, id: i64, form: &VenueForm) -> Result<MutationOutcome<Venue>> {
        self.require_venue(id).await?;

        let fields = match form.validate() {
            Ok(fields) => fields,
            Err(errors) => return Ok(MutationOutcome::ValidationFailed(errors)),
        };

        let outcome = match self.store.update_venue(id, &fields).await {
            Ok(Some(venue)) => {
                info!("Venue {} ({}) updated", venue.id, venue.name);
                MutationOutcome::Success {
                    notice: format!("Venue {} has been updated successfully.", venue.name),
                    record: venue,
                }
            }
            Ok(None) => return Err(Error::NotFound(format!("venue {}", id))),
            Err(e) => {
                error!("Failed to update venue {}: {}", id, e);
                MutationOutcome::PersistenceFailed {
                    notice: format!("An error occurred. Venue {} could not be updated.", fields.name),
                }
            }
        };
        Ok(outcome)
    }

    /// Delete a venue and, by cascade, its shows
    pub async fn delete_venue(&self, id: i64) -> Result<MutationOutcome<Venue>> {
        let venue = self.require_venue(id).await?;

        let outcome = match self.store.delete_venue(id).await {
            Ok(true) => {
                info!("Venue {} ({}) deleted", venue.id, venue.name);
                MutationOutcome::Success {
                    notice: format!("Venue {} has been deleted.", venue.name),
                    record: venue,
                }
            }
            Ok(false) => return Err(Error::NotFound(format!("venue {}", id))),
            Err(e) => {
                error!("Failed to delete venue {}: {}", id, e);
                MutationOutcome::PersistenceFailed {
                    notice: format!("An error occurred. Venue {} could not be deleted.", venue.name),
                }
            }
        };
        Ok(outcome)
    }

    async fn require_venue(&self, id: i64) -> Result<Venue> {
        self.store
            .get_venue(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("venue {}", id)))
    }

    // ------------------------------------------------------------------
    // Artists
    // ------------------------------------------------------------------

    pub async fn list_artists(&self) -> Result<Vec<ArtistSummary>> {
        let artists = self.store.list_artists().await?;
        Ok(artists
            .into_iter()
            .map(|a| ArtistSummary { id: a.id, name: a.name })
            .collect())
    }

    pub async fn search_artists(&self, term: &str, now: DateTime<Utc>) -> Result<SearchResults> {
        let artists = self.store.list_artists().await?;
        let shows = self.store.list_shows().await?;
        Ok(search::search_artists(&artists, &shows, term, now))
    }

    pub async fn artist_detail(&self, id: i64, now: DateTime<Utc>) -> Result<ArtistDetail> {
        let artist = self.require_artist(id).await?;
        let shows = self.store.shows_for_artist(id).await?;
        Ok(ArtistDetail {
            artist,
            shows: ShowBreakdown::classify(&shows, now),
        })
    }

    pub async fn artist_form(&self, id: i64) -> Result<ArtistForm> {
        let artist = self.require_artist(id).await?;
        Ok(ArtistForm::from_artist(&artist))
    }

    pub async fn create_artist(&self, form: &ArtistForm) -> MutationOutcome<Artist> {
        let fields = match form.validate() {
            Ok(fields) => fields,
            Err(errors) => return MutationOutcome::ValidationFailed(errors),
        };

        match self.store.insert_artist(&fields).await {
            Ok(artist) => {
                info!("Artist {} ({}) listed", artist.id, artist.name);
                MutationOutcome::Success {
                    notice: format!("Artist {} was successfully listed!", artist.name),
                    record: artist,
                }
            }
            Err(e) => {
                error!("Failed to list artist {}: {}", fields.name, e);
                MutationOutcome::PersistenceFailed {
                    notice: format!("An error occurred. Artist {} could not be listed.", fields.name),
                }
            }
        }
    }

    pub async fn update_artist(&self, id: i64, form: &ArtistForm) -> Result<MutationOutcome<Artist>> {
        self.require_artist(id).await?;

        let fields = match form.validate() {
            Ok(fields) => fields,
            Err(errors) => return Ok(MutationOutcome::ValidationFailed(errors)),
        };

        let outcome = match self.store.update_artist(id, &fields).await {
            Ok(Some(artist)) => {
                info!("Artist {} ({}) updated", artist.id, artist.name);
                MutationOutcome::Success {
                    notice: format!("Artist {} has been updated successfully.", artist.name),
                    record: artist,
                }
            }
            Ok(None) => return Err(Error::NotFound(format!("artist {}", id))),
            Err(e) => {
                error!("Failed to update artist {}: {}", id, e);
                MutationOutcome::PersistenceFailed {
                    notice: format!("An error occurred. Artist {} could not be updated.", fields.name),
                }
            }
        };
        Ok(outcome)
    }

    /// Delete an artist and, by cascade, its shows
    pub async fn delete_artist(&self, id: i64) -> Result<MutationOutcome<Artist>> {
        let artist = self.require_artist(id).await?;

        let outcome = match self.store.delete_artist(id).await {
            Ok(true) => {
                info!("Artist {} ({}) deleted", artist.id, artist.name);
                MutationOutcome::Success {
                    notice: format!("Artist {} has been deleted.", artist.name),
                    record: artist,
                }
            }
            Ok(false) => return Err(Error::NotFound(format!("artist {}", id))),
            Err(e) => {
                error!("Failed to delete artist {}: {}", id, e);
                MutationOutcome::PersistenceFailed {
                    notice: format!("An error occurred. Artist {} could not be deleted.", artist.name),
                }
            }
        };
        Ok(outcome)
    }

    async fn require_artist(&self, id: i64) -> Result<Artist> {
        self.store
            .get_artist(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("artist {}", id)))
    }

    // ------------------------------------------------------------------
    // Shows
    // ------------------------------------------------------------------

    pub async fn list_shows(&self) -> Result<Vec<ShowListing>> {
        let shows = self.store.list_shows().await?;
        Ok(shows
            .into_iter()
            .map(|show| ShowListing {
                start_time: to_iso8601(&show.start_time),
                venue_id: show.venue_id,
                venue_name: show.venue_name,
                artist_id: show.artist_id,
                artist_name: show.artist_name,
                artist_image_link: show.artist_image_link,
            })
            .collect())
    }

    /// Unknown venue or artist ids surface as a persistence failure
    pub async fn create_show(&self, form: &ShowForm) -> MutationOutcome<Show> {
        let new_show = match form.validate() {
            Ok(new_show) => new_show,
            Err(errors) => return MutationOutcome::ValidationFailed(errors),
        };

        match self.store.insert_show(&new_show).await {
            Ok(show) => {
                info!(
                    "Show {} listed (venue {}, artist {})",
                    show.id, show.venue_id, show.artist_id
                );
                MutationOutcome::Success {
                    notice: "Show was successfully listed!".to_string(),
                    record: show,
                }
            }
            Err(e) => {
                if e.is_constraint_violation() {
                    warn!(
                        "Rejected show for venue {} / artist {}: {}",
                        new_show.venue_id, new_show.artist_id, e
                    );
                } else {
                    error!("Failed to list show: {}", e);
                }
                MutationOutcome::PersistenceFailed {
                    notice: "An error occurred. Show could not be listed.".to_string(),
                }
            }
        }
    }
}
