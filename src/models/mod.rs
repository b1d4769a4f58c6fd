//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Route`], [`StudyDestination`] - Hash-based navigation
//! - [`Resource`], [`ResourceKind`] - Static resource catalog records
//! - [`DropdownId`], [`DropdownItem`], [`MenuEvent`] - Navbar state transitions
//! - [`ApplicationForm`], [`SubmitStatus`], [`FormError`] - Apply-online form

mod application;
mod navigation;
mod resource;
mod route;

pub use application::{ApplicationForm, FormError, SubmitStatus};
pub use navigation::{
    DropdownId, DropdownItem, MenuEvent, menu_transition, navbar_visible, toggle_dropdown,
};
pub use resource::{Resource, ResourceKind};
pub use route::{Route, StudyDestination};
