use std::sync::Arc;

use tokio::sync::RwLock;

use crate::profile::{Profile, ProfileRepository};

/// Tracks zero or one "active" profile for detail and map focus.
///
/// Only the id is stored. Every read resolves it against the repository, so
/// the returned profile always reflects the latest committed mutation, and a
/// deleted profile reads back as `None`.
pub struct SelectionCoordinator {
    repository: Arc<dyn ProfileRepository>,
    active_id: RwLock<Option<String>>,
}

impl SelectionCoordinator {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self {
            repository,
            active_id: RwLock::new(None),
        }
    }

    /// Sets the active profile.
    ///
    /// An id that does not resolve to a stored profile clears the selection.
    ///
    /// # Returns
    ///
    /// The newly selected profile, or `None` if the selection is now empty.
    pub async fn select(&self, id: Option<&str>) -> Option<Profile> {
        let resolved = match id {
            Some(id) => self.repository.find_by_id(id).await,
            None => None,
        };

        let mut active = self.active_id.write().await;
        *active = resolved.as_ref().map(|p| p.id.clone());

        match (&resolved, id) {
            (Some(profile), _) => tracing::debug!(id = %profile.id, "Selected profile"),
            (None, Some(id)) => tracing::debug!(id, "Selection target not found, cleared"),
            (None, None) => tracing::debug!("Selection cleared"),
        }

        resolved
    }

    /// Resolves the tracked id against the repository's current state.
    ///
    /// If the tracked profile no longer exists the stale id is dropped.
    pub async fn current_selection(&self) -> Option<Profile> {
        let id = self.active_id.read().await.clone()?;

        match self.repository.find_by_id(&id).await {
            Some(profile) => Some(profile),
            None => {
                self.drop_stale(&id).await;
                None
            }
        }
    }

    /// Resolves the tracked id within an already-read list of profiles.
    ///
    /// Lets a caller derive several views from one `list()` read without a
    /// mutation landing between them. A stale id is dropped as in
    /// [`current_selection`](Self::current_selection).
    pub async fn resolve_in(&self, profiles: &[Profile]) -> Option<Profile> {
        let id = self.active_id.read().await.clone()?;

        match profiles.iter().find(|p| p.id == id) {
            Some(profile) => Some(profile.clone()),
            None => {
                self.drop_stale(&id).await;
                None
            }
        }
    }

    async fn drop_stale(&self, id: &str) {
        let mut active = self.active_id.write().await;
        // Another select may have landed while the lookup ran.
        if active.as_deref() == Some(id) {
            *active = None;
        }
        tracing::debug!(id, "Selected profile no longer exists, cleared");
    }

    /// The tracked id, without resolving it.
    pub async fn selected_id(&self) -> Option<String> {
        self.active_id.read().await.clone()
    }

    pub async fn clear(&self) {
        self.select(None).await;
    }
}
