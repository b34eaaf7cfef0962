//! Domain layer for Atlas.
//!
//! Owns the profile schema and validation rules, the repository contract,
//! the pure filter engine and the selection coordinator. Everything here is
//! I/O free; concrete storage lives in `atlas-infrastructure`.

pub mod config;
pub mod error;
pub mod filter;
pub mod profile;
pub mod selection;

// Re-export common error type
pub use error::AtlasError;
