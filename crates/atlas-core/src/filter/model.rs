//! Filter criteria.

use serde::{Deserialize, Serialize};

/// The `{searchTerm, location}` pair used to derive a visible subset.
///
/// Empty strings and `None` both mean "no constraint".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFilters {
    /// Matched against name, description and interests.
    #[serde(default)]
    pub search_term: Option<String>,
    /// Matched against city, state and country.
    #[serde(default)]
    pub location: Option<String>,
}

impl ProfileFilters {
    pub fn new(search_term: Option<String>, location: Option<String>) -> Self {
        Self {
            search_term,
            location,
        }
    }

    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            location: None,
        }
    }

    pub fn location(location: impl Into<String>) -> Self {
        Self {
            search_term: None,
            location: Some(location.into()),
        }
    }

    /// The search term, if present and non-empty.
    pub fn active_search_term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|s| !s.is_empty())
    }

    /// The location term, if present and non-empty.
    pub fn active_location(&self) -> Option<&str> {
        self.location.as_deref().filter(|s| !s.is_empty())
    }

    /// Returns true when at least one criterion constrains the result.
    pub fn is_active(&self) -> bool {
        self.active_search_term().is_some() || self.active_location().is_some()
    }

    pub fn clear(&mut self) {
        self.search_term = None;
        self.location = None;
    }
}
