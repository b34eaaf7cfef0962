//! Profile domain module.
//!
//! # Module Structure
//!
//! - `model`: Profile, Address, Coordinates and Contact entities
//! - `form`: Form payload accepted by create and update
//! - `validation`: Form-boundary validation rules
//! - `repository`: Repository trait owning the collection

mod form;
mod model;
mod repository;
pub mod validation;

// Re-export public API
pub use form::{DEFAULT_COUNTRY, DEFAULT_IMAGE_URL, ProfileFormData};
pub use model::{Address, Contact, Coordinates, Profile};
pub use repository::ProfileRepository;
pub use validation::{ValidationReport, validate};
