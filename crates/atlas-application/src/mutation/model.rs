//! Mutation pipeline value types.

use serde::Serialize;
use strum::{Display, EnumString};

use atlas_core::error::Result;
use atlas_core::profile::{Profile, ProfileFormData};

/// A repository write waiting to be submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Create(ProfileFormData),
    Update { id: String, form: ProfileFormData },
    Delete { id: String },
}

impl Mutation {
    pub fn kind(&self) -> MutationKind {
        match self {
            Mutation::Create(_) => MutationKind::Create,
            Mutation::Update { .. } => MutationKind::Update,
            Mutation::Delete { .. } => MutationKind::Delete,
        }
    }

    /// The targeted profile id, if the mutation addresses an existing record.
    pub fn target_id(&self) -> Option<&str> {
        match self {
            Mutation::Create(_) => None,
            Mutation::Update { id, .. } | Mutation::Delete { id } => Some(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

/// What a settled mutation did to the repository.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    Created(Profile),
    Updated(Profile),
    /// `removed` is false when the id was already gone.
    Deleted { id: String, removed: bool },
}

impl MutationOutcome {
    /// The stored record after a create or update.
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            MutationOutcome::Created(profile) | MutationOutcome::Updated(profile) => Some(profile),
            MutationOutcome::Deleted { .. } => None,
        }
    }
}

/// The settled result of a mutation: its outcome or the typed failure
/// (`NotFound` for an update of a missing id, `Cancelled` for a cancelled one).
pub type Settlement = Result<MutationOutcome>;

/// `idle | pending | settled`, used by callers to drive spinners and
/// disabled controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MutationStatus {
    Idle,
    Pending,
    Settled,
}
