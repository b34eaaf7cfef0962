//! Map viewport derived from the current selection.

use serde::{Deserialize, Serialize};

use crate::profile::{Coordinates, Profile};

/// Geographic centre of the contiguous United States.
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    lat: 39.8283,
    lng: -98.5795,
};
pub const DEFAULT_ZOOM: u8 = 4;
/// Zoom used when focused on a single profile.
pub const FOCUSED_ZOOM: u8 = 13;

/// Where the map is centred and how far it is zoomed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapViewport {
    pub center: Coordinates,
    pub zoom: u8,
}

impl Default for MapViewport {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl MapViewport {
    /// Focuses on the selected profile, or shows the whole country.
    pub fn for_selection(selected: Option<&Profile>) -> Self {
        match selected {
            Some(profile) => Self {
                center: profile.address.coordinates,
                zoom: FOCUSED_ZOOM,
            },
            None => Self::default(),
        }
    }
}

/// A map pin for one visible profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub profile_id: String,
    pub name: String,
    pub position: Coordinates,
}

/// One marker per profile, in the profiles' order.
pub fn markers(profiles: &[Profile]) -> Vec<MapMarker> {
    profiles
        .iter()
        .map(|p| MapMarker {
            profile_id: p.id.clone(),
            name: p.name.clone(),
            position: p.address.coordinates,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileFormData;

    #[test]
    fn test_default_viewport_without_selection() {
        let viewport = MapViewport::for_selection(None);
        assert_eq!(viewport.center, DEFAULT_CENTER);
        assert_eq!(viewport.zoom, DEFAULT_ZOOM);
    }

    #[test]
    fn test_focused_viewport() {
        let mut form = ProfileFormData::default();
        form.address.coordinates = Coordinates::new(30.27, -97.74);
        let profile = Profile::new(form);

        let viewport = MapViewport::for_selection(Some(&profile));
        assert_eq!(viewport.center, Coordinates::new(30.27, -97.74));
        assert_eq!(viewport.zoom, FOCUSED_ZOOM);

        let pins = markers(std::slice::from_ref(&profile));
        assert_eq!(pins.len(), 1);
        assert_eq!(pins[0].profile_id, profile.id);
    }
}
