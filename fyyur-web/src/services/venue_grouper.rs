//! Venue grouper: venues bucketed by (city, state) for the listing page

use chrono::{DateTime, Utc};
use fyyur_common::db::{ShowDetail, Venue};
use serde::Serialize;
use std::collections::HashMap;

use super::show_classifier::upcoming_by_venue;
use super::ListingSummary;

/// One (city, state) bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<ListingSummary>,
}

/// Group venues by their full (city, state) pair
///
/// Areas appear in first-seen order and venues keep their input order inside
/// an area. Two cities in the same state are separate areas.
pub fn group_by_area(venues: &[Venue], shows: &[ShowDetail], now: DateTime<Utc>) -> Vec<VenueArea> {
    let upcoming = upcoming_by_venue(shows, now);
    let mut areas: Vec<VenueArea> = Vec::new();
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();

    for venue in venues {
        let summary = ListingSummary {
            id: venue.id,
            name: venue.name.clone(),
            num_upcoming_shows: upcoming.get(&venue.id).copied().unwrap_or(0),
        };

        let key = (venue.city.as_str(), venue.state.as_str());
        let position = match index.get(&key).copied() {
            Some(position) => position,
            None => {
                areas.push(VenueArea {
                    city: venue.city.clone(),
                    state: venue.state.clone(),
                    venues: Vec::new(),
                });
                index.insert(key, areas.len() - 1);
                areas.len() - 1
            }
        };
        areas[position].venues.push(summary);
    }

    areas
}
