//! Shared test utilities for the i18n-sync workspace.
//!
//! This crate provides standardised fixtures so crate test suites do not
//! each hand-roll temporary translation folders. It is a dev-dependency
//! only and is never published.
//!
//! # Modules
//!
//! - [`folder`]: [`TestFolder`] builder for a project with a translation folder
//! - [`json`]: helpers to inspect written translation files

pub mod folder;
pub mod json;

pub use folder::TestFolder;
