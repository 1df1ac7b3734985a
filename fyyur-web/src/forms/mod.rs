//! Typed form input and validation
//!
//! Submitted `application/x-www-form-urlencoded` bodies arrive as raw
//! key/value pairs (repeated keys allowed, e.g. several `genres`). Each
//! endpoint copies the pairs into its own form struct and validates it into
//! the model's field set before anything reaches the store.

use serde::Serialize;

pub mod artist;
pub mod choices;
pub mod show;
pub mod venue;

pub use artist::ArtistForm;
pub use show::ShowForm;
pub use venue::VenueForm;

/// Validation failure for one form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// User-facing notice text, e.g. `name This field is required.`
    pub fn notice(&self) -> String {
        format!("{} {}", self.field, self.message)
    }
}

/// Raw submitted key/value pairs
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value for `key`, trimmed; empty string when absent
    pub fn text(&self, key: &str) -> String {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.trim().to_string())
            .unwrap_or_default()
    }

    /// Every non-blank value for `key`, in submission order
    pub fn all(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect()
    }

    /// HTML checkbox semantics: present means checked unless explicitly falsy
    pub fn checkbox(&self, key: &str) -> bool {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| {
                !matches!(
                    v.trim().to_ascii_lowercase().as_str(),
                    "false" | "n" | "no" | "off" | "0"
                )
            })
            .unwrap_or(false)
    }
}

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::new(pairs)
    }
}

/// Collects field errors in form order
#[derive(Debug, Default)]
pub(crate) struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    pub(crate) fn fail(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Non-blank value or a "required" error
    pub(crate) fn required(&mut self, field: &'static str, value: &str) -> String {
        if value.is_empty() {
            self.fail(field, "This field is required.");
        }
        value.to_string()
    }

    pub(crate) fn state(&mut self, field: &'static str, value: &str) -> String {
        if value.is_empty() {
            self.fail(field, "This field is required.");
        } else if !choices::is_state(value) {
            self.fail(field, "Not a valid choice.");
        }
        value.to_string()
    }

    pub(crate) fn genres(&mut self, field: &'static str, values: &[String]) -> Vec<String> {
        if values.is_empty() {
            self.fail(field, "This field is required.");
        } else if let Some(bad) = values.iter().find(|g| !choices::is_genre(g)) {
            self.fail(field, format!("'{}' is not a valid choice.", bad));
        }
        values.to_vec()
    }

    /// Phone in `NNN-NNN-NNNN` form; blank allowed unless `required`
    pub(crate) fn phone(&mut self, field: &'static str, value: &str, required: bool) -> Option<String> {
        if value.is_empty() {
            if required {
                self.fail(field, "This field is required.");
            }
            return None;
        }
        if !is_phone_number(value) {
            self.fail(field, "Invalid phone number, expected format xxx-xxx-xxxx.");
        }
        Some(value.to_string())
    }

    /// Optional absolute http(s) URL
    pub(crate) fn link(&mut self, field: &'static str, value: &str) -> Option<String> {
        if value.is_empty() {
            return None;
        }
        let valid = url::Url::parse(value)
            .map(|parsed| matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some())
            .unwrap_or(false);
        if !valid {
            self.fail(field, "Invalid URL.");
        }
        Some(value.to_string())
    }

    pub(crate) fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    pub(crate) fn finish<T>(self, value: T) -> Result<T, Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self.errors)
        }
    }
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn is_phone_number(value: &str) -> bool {
    let groups: Vec<&str> = value.split('-').collect();
    groups.len() == 3
        && groups
            .iter()
            .zip([3, 3, 4])
            .all(|(group, len)| group.len() == len && group.chars().all(|c| c.is_ascii_digit()))
}
