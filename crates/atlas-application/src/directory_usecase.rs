//! Directory use case.
//!
//! Ties the repository, filter engine, selection coordinator and mutation
//! pipeline together behind one handle that list, map, detail and admin
//! surfaces share. All views are derived on read; nothing here caches a
//! filtered list or a resolved selection.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use tokio::sync::RwLock;

use atlas_core::config::LatencyConfig;
use atlas_core::error::Result;
use atlas_core::filter::{ProfileFilters, filter_profiles};
use atlas_core::profile::{Profile, ProfileFormData, ProfileRepository, validate};
use atlas_core::selection::map::markers;
use atlas_core::selection::{MapMarker, MapViewport, SelectionCoordinator};
use atlas_infrastructure::InMemoryProfileRepository;

use crate::mutation::{Mutation, MutationHandle, MutationPipeline, MutationStatus};

/// A form submitted from the admin surface.
#[derive(Debug, Clone, PartialEq)]
pub enum FormSubmission {
    Create(ProfileFormData),
    Update { id: String, form: ProfileFormData },
}

impl FormSubmission {
    pub fn form(&self) -> &ProfileFormData {
        match self {
            FormSubmission::Create(form) | FormSubmission::Update { form, .. } => form,
        }
    }
}

impl From<FormSubmission> for Mutation {
    fn from(submission: FormSubmission) -> Self {
        match submission {
            FormSubmission::Create(form) => Mutation::Create(form),
            FormSubmission::Update { id, form } => Mutation::Update { id, form },
        }
    }
}

/// Map surface state: where to look and which pins to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub viewport: MapViewport,
    pub markers: Vec<MapMarker>,
}

/// Everything a rendering surface needs, derived in one read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorySnapshot {
    pub loading: bool,
    pub filters: ProfileFilters,
    pub visible: Vec<Profile>,
    pub selected: Option<Profile>,
    pub map: MapView,
    pub mutation_status: MutationStatus,
}

/// Shared facade over the directory.
///
/// A new directory reports `loading` until its first
/// [`load_seed`](Self::load_seed) finishes.
pub struct DirectoryUseCase {
    repository: Arc<dyn ProfileRepository>,
    selection: SelectionCoordinator,
    pipeline: MutationPipeline,
    filters: RwLock<ProfileFilters>,
    latency: LatencyConfig,
    loading: AtomicBool,
}

impl DirectoryUseCase {
    pub fn new(repository: Arc<dyn ProfileRepository>, latency: LatencyConfig) -> Self {
        Self {
            selection: SelectionCoordinator::new(repository.clone()),
            pipeline: MutationPipeline::new(repository.clone(), latency.clone()),
            repository,
            filters: RwLock::new(ProfileFilters::default()),
            latency,
            loading: AtomicBool::new(true),
        }
    }

    /// A directory backed by a fresh in-memory repository.
    pub fn in_memory(latency: LatencyConfig) -> Self {
        Self::new(Arc::new(InMemoryProfileRepository::new()), latency)
    }

    pub fn repository(&self) -> &Arc<dyn ProfileRepository> {
        &self.repository
    }

    pub fn pipeline(&self) -> &MutationPipeline {
        &self.pipeline
    }

    // ============================================================================
    // Bootstrap
    // ============================================================================

    /// Populates the repository with seed profiles after the simulated
    /// initial-load latency. `is_loading` is true for the duration and
    /// cleared afterwards, whether or not the load succeeded.
    ///
    /// # Errors
    ///
    /// Returns `AtlasError::DuplicateId` if the seed collides with stored ids.
    pub async fn load_seed(&self, profiles: Vec<Profile>) -> Result<usize> {
        self.loading.store(true, Ordering::SeqCst);
        tokio::time::sleep(self.latency.initial_load()).await;

        let result = self.repository.bulk_load(profiles).await;
        self.loading.store(false, Ordering::SeqCst);

        let count = result?;
        tracing::info!(count, "Directory seeded");
        Ok(count)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    // ============================================================================
    // Reads
    // ============================================================================

    pub async fn profiles(&self) -> Vec<Profile> {
        self.repository.list().await
    }

    pub async fn find_profile(&self, id: &str) -> Option<Profile> {
        self.repository.find_by_id(id).await
    }

    pub async fn filters(&self) -> ProfileFilters {
        self.filters.read().await.clone()
    }

    pub async fn set_filters(&self, filters: ProfileFilters) {
        tracing::debug!(?filters, "Filters changed");
        *self.filters.write().await = filters;
    }

    pub async fn reset_filters(&self) {
        self.filters.write().await.clear();
    }

    /// The current collection narrowed by the current filters.
    pub async fn filtered_profiles(&self) -> Vec<Profile> {
        let filters = self.filters().await;
        let profiles = self.repository.list().await;
        filter_profiles(&profiles, &filters)
    }

    // ============================================================================
    // Selection
    // ============================================================================

    pub async fn select(&self, id: Option<&str>) -> Option<Profile> {
        self.selection.select(id).await
    }

    pub async fn selected_profile(&self) -> Option<Profile> {
        self.selection.current_selection().await
    }

    /// Viewport focused on the selection, with a pin per visible profile.
    pub async fn map_view(&self) -> MapView {
        let selected = self.selected_profile().await;
        let visible = self.filtered_profiles().await;
        MapView {
            viewport: MapViewport::for_selection(selected.as_ref()),
            markers: markers(&visible),
        }
    }

    pub async fn snapshot(&self) -> DirectorySnapshot {
        let filters = self.filters().await;
        let profiles = self.repository.list().await;
        let visible = filter_profiles(&profiles, &filters);
        // Resolve against the same read as `visible`.
        let selected = self.selection.resolve_in(&profiles).await;

        DirectorySnapshot {
            loading: self.is_loading(),
            map: MapView {
                viewport: MapViewport::for_selection(selected.as_ref()),
                markers: markers(&visible),
            },
            filters,
            visible,
            selected,
            mutation_status: self.pipeline.status(),
        }
    }

    // ============================================================================
    // Writes
    // ============================================================================

    /// Validates the form and, only if it passes, submits it to the pipeline.
    ///
    /// # Errors
    ///
    /// Returns `AtlasError::Validation` with the field errors; nothing is
    /// submitted in that case.
    pub fn submit_form(&self, submission: FormSubmission) -> Result<MutationHandle> {
        validate(submission.form()).into_result()?;
        Ok(self.pipeline.submit(submission.into()))
    }

    /// Submits a delete. Deleting a missing id settles with `removed: false`.
    pub fn delete_profile(&self, id: impl Into<String>) -> MutationHandle {
        self.pipeline.submit(Mutation::Delete { id: id.into() })
    }

    pub fn mutation_status(&self) -> MutationStatus {
        self.pipeline.status()
    }
}
