//! daybook - Personal diary
//!
//! Dated diary entries with text and an image, kept as a single JSON
//! collection in a local slot store, with text/day search and export.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DaybookError;
