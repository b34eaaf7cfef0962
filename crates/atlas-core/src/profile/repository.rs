//! Profile repository trait.
//!
//! Defines the interface for the authoritative profile collection.

use super::form::ProfileFormData;
use super::model::Profile;
use crate::error::Result;

/// The single owner of the profile collection.
///
/// All reads and writes of the canonical set pass through this trait. Reads
/// hand out owned copies, so callers can never mutate the stored collection
/// through a returned value.
///
/// # Implementation Notes
///
/// Implementations must guarantee:
/// - Ids are unique across the live collection at all times
/// - Iteration order is insertion order; updates keep a record's position
/// - `id` and `created_at` never change after creation
#[async_trait::async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Returns a snapshot of all profiles in iteration order.
    async fn list(&self) -> Vec<Profile>;

    /// Finds a profile by its ID.
    ///
    /// # Returns
    ///
    /// - `Some(Profile)`: Profile found
    /// - `None`: No profile with this id
    async fn find_by_id(&self, id: &str) -> Option<Profile>;

    /// Stores a new profile with a fresh id and creation time, appended at the end.
    async fn create(&self, form: ProfileFormData) -> Profile;

    /// Replaces the content of an existing profile.
    ///
    /// # Returns
    ///
    /// - `Ok(Profile)`: The updated record
    /// - `Err(AtlasError::NotFound)`: No profile with this id
    async fn update(&self, id: &str, form: ProfileFormData) -> Result<Profile>;

    /// Removes a profile. Missing ids are a no-op.
    ///
    /// # Returns
    ///
    /// Whether a record was removed.
    async fn delete(&self, id: &str) -> bool;

    /// Appends already-identified profiles (seeding).
    ///
    /// The load is all-or-nothing: if any id collides with a stored profile or
    /// with another entry in `profiles`, nothing is stored.
    ///
    /// # Returns
    ///
    /// - `Ok(usize)`: Number of profiles loaded
    /// - `Err(AtlasError::DuplicateId)`: First colliding id
    async fn bulk_load(&self, profiles: Vec<Profile>) -> Result<usize>;

    /// Number of stored profiles.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
