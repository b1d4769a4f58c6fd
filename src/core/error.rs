//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! for each domain:
//!
//! - [`CatalogError`] - Bundled resource catalog loading and validation
//! - [`SubmitError`] - Application form submission

use std::fmt;

use crate::models::FormError;

/// Errors raised while loading the bundled resource catalog.
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// JSON deserialization failed
    Parse(String),
    /// Two records share the same id
    DuplicateId(String),
    /// A record's category is not in the closed category set
    UnknownCategory { id: String, category: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "Failed to parse resource catalog: {}", msg),
            Self::DuplicateId(id) => write!(f, "Duplicate resource id: {}", id),
            Self::UnknownCategory { id, category } => {
                write!(f, "Resource {} has unknown category: {}", id, category)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Application submission errors.
///
/// Currently only client-side validation can fail; network and server
/// failure variants belong to the future backend integration and will be
/// added alongside it.
#[derive(Debug, Clone)]
pub enum SubmitError {
    /// Required form fields are missing
    Invalid(FormError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SubmitError {}
