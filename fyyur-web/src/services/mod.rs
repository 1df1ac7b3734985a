//! View-building services and the CRUD catalog

use serde::Serialize;

pub mod catalog;
pub mod outcome;
pub mod search;
pub mod show_classifier;
pub mod venue_grouper;

pub use catalog::Catalog;
pub use outcome::MutationOutcome;

/// `{id, name, num_upcoming_shows}` entry used by listings and search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}
