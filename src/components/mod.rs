//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`navbar`] - Top info bar, desktop dropdowns, mobile drawer
//! - [`footer`] - Site footer with link columns and contact info
//! - [`pages`] - One component per route
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod footer;
pub mod icons;
pub mod navbar;
pub mod pages;
pub mod router;

pub use router::AppRouter;
