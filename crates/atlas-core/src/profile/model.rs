//! Profile domain model.
//!
//! A profile is a directory record describing a person: address with map
//! coordinates, contact details, interests, portrait image and bio.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::form::ProfileFormData;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns true for the exact `(0, 0)` pair, which the form treats as "not set".
    pub fn is_unset(&self) -> bool {
        self.lat == 0.0 && self.lng == 0.0
    }
}

/// Postal address plus the coordinates used to place the profile on the map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
}

/// A stored directory record.
///
/// `id` and `created_at` are assigned once by the repository and never change;
/// everything else is content replaced wholesale by an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Opaque unique identifier (UUID v4).
    pub id: String,
    pub name: String,
    /// Portrait image URL.
    pub image: String,
    /// Free-text bio.
    pub description: String,
    pub address: Address,
    pub contact: Contact,
    /// Display-ordered interests. Duplicates are allowed.
    pub interests: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Builds a new record from form data with a fresh id and the current time.
    pub fn new(form: ProfileFormData) -> Self {
        Self::with_identity(Uuid::new_v4().to_string(), Utc::now(), form)
    }

    /// Builds a record with an explicit identity. Used by seeding and tests.
    pub fn with_identity(id: String, created_at: DateTime<Utc>, form: ProfileFormData) -> Self {
        let ProfileFormData {
            name,
            image,
            description,
            address,
            contact,
            interests,
        } = form;

        Self {
            id,
            name,
            image,
            description,
            address,
            contact,
            interests,
            created_at,
        }
    }

    /// Replaces every content field with the submitted form data.
    ///
    /// `id` and `created_at` are left untouched.
    pub fn apply(&mut self, form: ProfileFormData) {
        let id = std::mem::take(&mut self.id);
        *self = Self::with_identity(id, self.created_at, form);
    }

    /// Returns the `city, state` label shown above the map.
    pub fn location_label(&self) -> String {
        format!("{}, {}", self.address.city, self.address.state)
    }
}
