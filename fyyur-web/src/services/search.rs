//! Search service: case-insensitive substring match on names

use chrono::{DateTime, Utc};
use fyyur_common::db::{Artist, ShowDetail, Venue};
use serde::Serialize;
use std::collections::HashMap;

use super::show_classifier::{upcoming_by_artist, upcoming_by_venue};
use super::ListingSummary;

/// Search response: the term searched for, number of matches and one
/// summary per match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub search_term: String,
    pub count: usize,
    pub data: Vec<ListingSummary>,
}

/// True when `name` contains `term`, ignoring case
///
/// The empty term is a substring of every name.
pub fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

fn search<'a, I>(entries: I, term: &str, upcoming: &HashMap<i64, usize>) -> SearchResults
where
    I: IntoIterator<Item = (i64, &'a str)>,
{
    let data: Vec<ListingSummary> = entries
        .into_iter()
        .filter(|(_, name)| name_matches(name, term))
        .map(|(id, name)| ListingSummary {
            id,
            name: name.to_string(),
            num_upcoming_shows: upcoming.get(&id).copied().unwrap_or(0),
        })
        .collect();

    SearchResults {
        search_term: term.to_string(),
        count: data.len(),
        data,
    }
}

pub fn search_venues(
    venues: &[Venue],
    shows: &[ShowDetail],
    term: &str,
    now: DateTime<Utc>,
) -> SearchResults {
    let upcoming = upcoming_by_venue(shows, now);
    search(
        venues.iter().map(|v| (v.id, v.name.as_str())),
        term,
        &upcoming,
    )
}

pub fn search_artists(
    artists: &[Artist],
    shows: &[ShowDetail],
    term: &str,
    now: DateTime<Utc>,
) -> SearchResults {
    let upcoming = upcoming_by_artist(shows, now);
    search(
        artists.iter().map(|a| (a.id, a.name.as_str())),
        term,
        &upcoming,
    )
}
