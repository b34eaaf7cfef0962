//! Filter engine: `(profiles, criteria) -> visible subset`.

mod engine;
mod model;

pub use engine::filter_profiles;
pub use model::ProfileFilters;
