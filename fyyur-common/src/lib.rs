//! # Fyyur Common Library
//!
//! Shared code for the Fyyur listing service:
//! - Entity models (venues, artists, shows)
//! - SQLite schema initialization
//! - Bootstrap configuration loading
//! - Error type and time helpers

pub mod config;
pub mod db;
pub mod error;
pub mod time;

pub use error::{Error, Result};
