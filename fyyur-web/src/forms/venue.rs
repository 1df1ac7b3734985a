//! Venue form

use fyyur_common::db::{Venue, VenueFields};
use serde::{Deserialize, Serialize};

use super::{optional, Checker, FieldError, FormFields};

/// Venue form as submitted (create and edit share it)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl VenueForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name"),
            city: fields.text("city"),
            state: fields.text("state"),
            address: fields.text("address"),
            phone: fields.text("phone"),
            genres: fields.all("genres"),
            image_link: fields.text("image_link"),
            facebook_link: fields.text("facebook_link"),
            website_link: fields.text("website_link"),
            seeking_talent: fields.checkbox("seeking_talent"),
            seeking_description: fields.text("seeking_description"),
        }
    }

    /// Form pre-populated with a stored venue, for the edit page
    pub fn from_venue(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone().unwrap_or_default(),
            genres: venue.genres.clone(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            website_link: venue.website.clone().unwrap_or_default(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<VenueFields, Vec<FieldError>> {
        let mut check = Checker::default();

        let fields = VenueFields {
            name: check.required("name", &self.name),
            city: check.required("city", &self.city),
            state: check.state("state", &self.state),
            address: check.required("address", &self.address),
            phone: check.phone("phone", &self.phone, false),
            genres: check.genres("genres", &self.genres),
            image_link: check.link("image_link", &self.image_link),
            facebook_link: check.link("facebook_link", &self.facebook_link),
            website: check.link("website_link", &self.website_link),
            seeking_talent: self.seeking_talent,
            seeking_description: optional(&self.seeking_description),
        };

        check.finish(fields)
    }
}
