//! Application layer for Atlas.
//!
//! This crate provides the use cases that coordinate the domain and
//! infrastructure layers: the mutation pipeline and the directory facade
//! shared by list, map, detail and admin surfaces.

pub mod directory_usecase;
pub mod mutation;

#[cfg(test)]
mod directory_usecase_test;

pub use directory_usecase::{DirectorySnapshot, DirectoryUseCase, FormSubmission, MapView};
pub use mutation::{Mutation, MutationHandle, MutationOutcome, MutationPipeline, MutationStatus};
