//! In-memory profile repository.
//!
//! Holds the ordered profile collection for the lifetime of the process.
//! Nothing is persisted.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use atlas_core::error::{AtlasError, Result};
use atlas_core::profile::{Profile, ProfileFormData, ProfileRepository};

/// Ordered, process-lifetime profile store.
///
/// The collection sits behind a `RwLock` and is only ever touched through the
/// [`ProfileRepository`] operations; every read returns owned clones.
#[derive(Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<Vec<Profile>>>,
}

impl InMemoryProfileRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `profiles`.
    ///
    /// # Errors
    ///
    /// Returns `AtlasError::DuplicateId` if `profiles` contains an id twice.
    pub async fn with_profiles(profiles: Vec<Profile>) -> Result<Self> {
        let repository = Self::new();
        repository.bulk_load(profiles).await?;
        Ok(repository)
    }
}

fn has_unique_ids(profiles: &[Profile]) -> bool {
    let mut seen = HashSet::with_capacity(profiles.len());
    profiles.iter().all(|p| seen.insert(p.id.as_str()))
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn list(&self) -> Vec<Profile> {
        self.profiles.read().await.clone()
    }

    async fn find_by_id(&self, id: &str) -> Option<Profile> {
        let profiles = self.profiles.read().await;
        profiles.iter().find(|p| p.id == id).cloned()
    }

    async fn create(&self, form: ProfileFormData) -> Profile {
        let profile = Profile::new(form);

        let mut profiles = self.profiles.write().await;
        profiles.push(profile.clone());
        debug_assert!(has_unique_ids(&profiles), "duplicate id after create");

        tracing::info!(id = %profile.id, name = %profile.name, "Created profile");
        profile
    }

    async fn update(&self, id: &str, form: ProfileFormData) -> Result<Profile> {
        let mut profiles = self.profiles.write().await;

        let Some(profile) = profiles.iter_mut().find(|p| p.id == id) else {
            tracing::warn!(id, "Update target not found");
            return Err(AtlasError::profile_not_found(id));
        };

        profile.apply(form);
        tracing::info!(id, name = %profile.name, "Updated profile");
        Ok(profile.clone())
    }

    async fn delete(&self, id: &str) -> bool {
        let mut profiles = self.profiles.write().await;

        match profiles.iter().position(|p| p.id == id) {
            Some(index) => {
                profiles.remove(index);
                tracing::info!(id, "Deleted profile");
                true
            }
            None => {
                tracing::debug!(id, "Delete target not found, ignoring");
                false
            }
        }
    }

    async fn bulk_load(&self, incoming: Vec<Profile>) -> Result<usize> {
        let mut profiles = self.profiles.write().await;

        let mut seen: HashSet<&str> = profiles.iter().map(|p| p.id.as_str()).collect();
        if let Some(duplicate) = incoming.iter().find(|p| !seen.insert(p.id.as_str())) {
            return Err(AtlasError::DuplicateId {
                id: duplicate.id.clone(),
            });
        }

        let count = incoming.len();
        profiles.extend(incoming);
        tracing::info!(count, total = profiles.len(), "Bulk loaded profiles");
        Ok(count)
    }

    async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }
}
