//! HTTP API handlers for fyyur-web

pub mod artists;
pub mod health;
pub mod notice;
pub mod shows;
pub mod ui;
pub mod venues;

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::forms::choices::{GENRES, STATES};

pub use health::health_routes;
pub use ui::{not_found, serve_index};

/// `search_term` from the query string or the form body
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search_term: String,
}

/// Allowed values for the state and genre fields
#[derive(Debug, Serialize)]
pub struct Choices {
    pub states: &'static [&'static str],
    pub genres: &'static [&'static str],
}

impl Choices {
    pub fn all() -> Self {
        Self {
            states: STATES,
            genres: GENRES,
        }
    }
}

/// Form page payload: current form values plus the allowed choices
#[derive(Debug, Serialize)]
pub struct FormPage<F> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub form: F,
    pub choices: Choices,
}

impl<F> FormPage<F> {
    pub fn blank(form: F) -> Self {
        Self {
            id: None,
            form,
            choices: Choices::all(),
        }
    }

    pub fn edit(id: i64, form: F) -> Self {
        Self {
            id: Some(id),
            form,
            choices: Choices::all(),
        }
    }
}

/// Record id from a path segment; anything but an integer is an unknown record
pub(crate) fn record_id(kind: &str, raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::NotFound(format!("{} {}", kind, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_parses_integers() {
        assert_eq!(record_id("venue", "12").unwrap(), 12);
    }

    #[test]
    fn test_non_integer_record_id_is_not_found() {
        assert!(matches!(record_id("venue", "abc"), Err(ApiError::NotFound(_))));
    }
}
