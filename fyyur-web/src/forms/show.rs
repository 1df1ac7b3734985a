//! Show form

use chrono::{DateTime, Utc};
use fyyur_common::db::NewShow;
use fyyur_common::time;
use serde::{Deserialize, Serialize};

use super::{Checker, FieldError, FormFields};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            artist_id: fields.text("artist_id"),
            venue_id: fields.text("venue_id"),
            start_time: fields.text("start_time"),
        }
    }

    /// Blank form whose start time defaults to `now`
    pub fn blank(now: DateTime<Utc>) -> Self {
        Self {
            start_time: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<NewShow, Vec<FieldError>> {
        let mut check = Checker::default();

        let artist_id = record_id(&mut check, "artist_id", &self.artist_id);
        let venue_id = record_id(&mut check, "venue_id", &self.venue_id);

        let start_time = if self.start_time.is_empty() {
            check.fail("start_time", "This field is required.");
            None
        } else {
            let parsed = time::parse_timestamp(&self.start_time);
            if parsed.is_none() {
                check.fail("start_time", "Not a valid datetime value.");
            }
            parsed
        };

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) => check.finish(NewShow {
                venue_id,
                artist_id,
                start_time,
            }),
            _ => Err(check.into_errors()),
        }
    }
}

fn record_id(check: &mut Checker, field: &'static str, value: &str) -> Option<i64> {
    if value.is_empty() {
        check.fail(field, "This field is required.");
        return None;
    }
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            check.fail(field, "Not a valid id.");
            None
        }
    }
}
