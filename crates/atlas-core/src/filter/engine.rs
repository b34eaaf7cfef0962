//! Pure derivation of the visible profile subset.

use super::model::ProfileFilters;
use crate::profile::Profile;

/// Returns the profiles matching `filters`, preserving their relative order.
///
/// The result is a fresh vector of owned records; mutating it cannot affect
/// the source slice. Both criteria present means both must match.
pub fn filter_profiles(profiles: &[Profile], filters: &ProfileFilters) -> Vec<Profile> {
    let term = filters.active_search_term().map(str::to_lowercase);
    let location = filters.active_location().map(str::to_lowercase);

    let filtered: Vec<Profile> = profiles
        .iter()
        .filter(|profile| term.as_deref().is_none_or(|t| matches_search(profile, t)))
        .filter(|profile| {
            location
                .as_deref()
                .is_none_or(|l| matches_location(profile, l))
        })
        .cloned()
        .collect();

    tracing::debug!(
        total = profiles.len(),
        visible = filtered.len(),
        "Derived filtered profiles"
    );

    filtered
}

/// `term` must already be lowercased.
fn matches_search(profile: &Profile, term: &str) -> bool {
    contains_ci(&profile.name, term)
        || contains_ci(&profile.description, term)
        || profile.interests.iter().any(|i| contains_ci(i, term))
}

/// `term` must already be lowercased.
fn matches_location(profile: &Profile, term: &str) -> bool {
    let address = &profile.address;
    contains_ci(&address.city, term)
        || contains_ci(&address.state, term)
        || contains_ci(&address.country, term)
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
