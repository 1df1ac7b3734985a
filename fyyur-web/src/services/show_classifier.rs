//! Show classifier: past vs upcoming buckets
//!
//! A show is upcoming when `start_time >= now` and past when
//! `start_time < now`. A show starting exactly now is upcoming. Buckets are
//! derived at read time and never stored.

use chrono::{DateTime, Utc};
use fyyur_common::db::ShowDetail;
use fyyur_common::time::to_iso8601;
use serde::Serialize;
use std::collections::HashMap;

/// Anything with a start time
pub trait Scheduled {
    fn start_time(&self) -> DateTime<Utc>;
}

impl Scheduled for ShowDetail {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

pub fn is_upcoming<S: Scheduled>(show: &S, now: DateTime<Utc>) -> bool {
    show.start_time() >= now
}

/// Split shows into (past, upcoming), each ordered by start time
pub fn partition<'a, S: Scheduled>(shows: &'a [S], now: DateTime<Utc>) -> (Vec<&'a S>, Vec<&'a S>) {
    let (mut upcoming, mut past): (Vec<&S>, Vec<&S>) =
        shows.iter().partition(|show| is_upcoming(*show, now));
    past.sort_by_key(|show| show.start_time());
    upcoming.sort_by_key(|show| show.start_time());
    (past, upcoming)
}

/// Upcoming show count of every venue that has at least one show
pub fn upcoming_by_venue(shows: &[ShowDetail], now: DateTime<Utc>) -> HashMap<i64, usize> {
    let mut counts = HashMap::new();
    for show in shows.iter().filter(|show| is_upcoming(*show, now)) {
        *counts.entry(show.venue_id).or_insert(0) += 1;
    }
    counts
}

/// Upcoming show count of every artist that has at least one show
pub fn upcoming_by_artist(shows: &[ShowDetail], now: DateTime<Utc>) -> HashMap<i64, usize> {
    let mut counts = HashMap::new();
    for show in shows.iter().filter(|show| is_upcoming(*show, now)) {
        *counts.entry(show.artist_id).or_insert(0) += 1;
    }
    counts
}

/// A show as listed on a venue page: the counterpart is the artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueShow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl From<&ShowDetail> for VenueShow {
    fn from(show: &ShowDetail) -> Self {
        Self {
            artist_id: show.artist_id,
            artist_name: show.artist_name.clone(),
            artist_image_link: show.artist_image_link.clone(),
            start_time: to_iso8601(&show.start_time),
        }
    }
}

/// A show as listed on an artist page: the counterpart is the venue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}

impl From<&ShowDetail> for ArtistShow {
    fn from(show: &ShowDetail) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: show.venue_name.clone(),
            venue_image_link: show.venue_image_link.clone(),
            start_time: to_iso8601(&show.start_time),
        }
    }
}

/// Past and upcoming shows of one venue or artist, with counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowBreakdown<T> {
    pub past_shows: Vec<T>,
    pub upcoming_shows: Vec<T>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl<T> ShowBreakdown<T>
where
    T: for<'a> From<&'a ShowDetail>,
{
    pub fn classify(shows: &[ShowDetail], now: DateTime<Utc>) -> Self {
        let (past, upcoming) = partition(shows, now);
        let past_shows: Vec<T> = past.into_iter().map(T::from).collect();
        let upcoming_shows: Vec<T> = upcoming.into_iter().map(T::from).collect();

        Self {
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
