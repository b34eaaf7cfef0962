//! Mutation pipeline: repository writes behind a simulated network round-trip.
//!
//! # Module Structure
//!
//! - `model`: Mutation requests, outcomes and the tri-state status
//! - `pipeline`: The scheduler and the per-submission handle

mod model;
mod pipeline;

pub use model::{Mutation, MutationKind, MutationOutcome, MutationStatus, Settlement};
pub use pipeline::{MutationHandle, MutationPipeline};
