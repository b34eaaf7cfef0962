//! Form payload accepted by create and update.

use serde::{Deserialize, Serialize};

use super::model::{Address, Contact, Coordinates, Profile};

/// Portrait shown until the administrator supplies an image URL.
pub const DEFAULT_IMAGE_URL: &str = "https://source.unsplash.com/random/200x200/?portrait";

/// Country prefilled on a blank form.
pub const DEFAULT_COUNTRY: &str = "United States";

/// A profile without its repository-assigned identity (`id`, `createdAt`).
///
/// The admin form always submits the full shape, so an update replaces every
/// field carried here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileFormData {
    pub name: String,
    pub image: String,
    pub description: String,
    pub address: Address,
    pub contact: Contact,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl Default for ProfileFormData {
    fn default() -> Self {
        Self {
            name: String::new(),
            image: DEFAULT_IMAGE_URL.to_string(),
            description: String::new(),
            address: Address {
                country: DEFAULT_COUNTRY.to_string(),
                coordinates: Coordinates::default(),
                ..Address::default()
            },
            contact: Contact::default(),
            interests: Vec::new(),
        }
    }
}

impl ProfileFormData {
    /// Appends an interest after trimming it. Blank input is ignored.
    ///
    /// Returns whether an interest was added.
    pub fn add_interest(&mut self, interest: &str) -> bool {
        let trimmed = interest.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.interests.push(trimmed.to_string());
        true
    }

    /// Removes the interest at `index`, if any.
    pub fn remove_interest(&mut self, index: usize) -> Option<String> {
        (index < self.interests.len()).then(|| self.interests.remove(index))
    }
}

/// Prefills the edit form from a stored record.
impl From<&Profile> for ProfileFormData {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            image: profile.image.clone(),
            description: profile.description.clone(),
            address: profile.address.clone(),
            contact: profile.contact.clone(),
            interests: profile.interests.clone(),
        }
    }
}
