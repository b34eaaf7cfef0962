//! Form-boundary validation.
//!
//! Every rule is evaluated independently so the form can highlight all
//! offending inputs at once. Keys are dot-separated field paths
//! (`address.street`, `contact.email`).

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::form::ProfileFormData;
use crate::error::{AtlasError, Result};

/// `local@domain.tld`: no whitespace, one `@`, a `.` somewhere after it.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub const FIELD_NAME: &str = "name";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_STREET: &str = "address.street";
pub const FIELD_CITY: &str = "address.city";
pub const FIELD_STATE: &str = "address.state";
pub const FIELD_ZIP_CODE: &str = "address.zipCode";
pub const FIELD_COORDINATES: &str = "address.coordinates";
pub const FIELD_EMAIL: &str = "contact.email";

/// Outcome of [`validate`]: a field-path to message map.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub field_errors: BTreeMap<String, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }

    /// One-line `field: message; ...` rendering used in error messages.
    pub fn summary(&self) -> String {
        self.field_errors
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Converts a failing report into [`AtlasError::Validation`].
    pub fn into_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(AtlasError::Validation(self))
        }
    }

    fn require(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.field_errors
                .insert(field.to_string(), message.to_string());
        }
    }
}

/// Returns true when `email` looks like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validates a form payload. Pure: no side effects.
pub fn validate(form: &ProfileFormData) -> ValidationReport {
    let mut report = ValidationReport::default();

    report.require(FIELD_NAME, &form.name, "Name is required");
    report.require(FIELD_DESCRIPTION, &form.description, "Description is required");
    report.require(FIELD_STREET, &form.address.street, "Street is required");
    report.require(FIELD_CITY, &form.address.city, "City is required");
    report.require(FIELD_STATE, &form.address.state, "State is required");
    report.require(FIELD_ZIP_CODE, &form.address.zip_code, "Zip code is required");

    if !is_valid_email(&form.contact.email) {
        report
            .field_errors
            .insert(FIELD_EMAIL.to_string(), "Valid email is required".to_string());
    }

    // Only the exact zero pair is rejected; no range check.
    if form.address.coordinates.is_unset() {
        report.field_errors.insert(
            FIELD_COORDINATES.to_string(),
            "Valid coordinates are required".to_string(),
        );
    }

    report
}
