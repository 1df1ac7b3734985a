//! Artist form

use fyyur_common::db::{Artist, ArtistFields};
use serde::{Deserialize, Serialize};

use super::{optional, Checker, FieldError, FormFields};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name"),
            city: fields.text("city"),
            state: fields.text("state"),
            phone: fields.text("phone"),
            genres: fields.all("genres"),
            image_link: fields.text("image_link"),
            facebook_link: fields.text("facebook_link"),
            website_link: fields.text("website_link"),
            seeking_venue: fields.checkbox("seeking_venue"),
            seeking_description: fields.text("seeking_description"),
        }
    }

    pub fn from_artist(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            genres: artist.genres.clone(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            website_link: artist.website.clone().unwrap_or_default(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<ArtistFields, Vec<FieldError>> {
        let mut check = Checker::default();

        let fields = ArtistFields {
            name: check.required("name", &self.name),
            city: check.required("city", &self.city),
            state: check.state("state", &self.state),
            phone: check.phone("phone", &self.phone, true).unwrap_or_default(),
            genres: check.genres("genres", &self.genres),
            image_link: check.link("image_link", &self.image_link),
            facebook_link: check.link("facebook_link", &self.facebook_link),
            website: check.link("website_link", &self.website_link),
            seeking_venue: self.seeking_venue,
            seeking_description: optional(&self.seeking_description),
        };

        check.finish(fields)
    }
}
