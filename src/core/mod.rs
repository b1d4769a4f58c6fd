//! Core logic: catalog loading, resource filtering, and form submission.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod submit;

pub use error::{CatalogError, SubmitError};
pub use filter::filter_resources;
