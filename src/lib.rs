//! # Paper Catalog
//!
//! Turns a dump of academic paper metadata into the catalog document a static
//! website renders: every paper classified into topic categories, given a
//! short `surname-year` id, and summarized per category.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (RawPaper, OutputPaper, CatalogDocument, Topic)
//! - [`topics`]: Keyword rules, DOI overrides and the classifier
//! - [`catalog`]: Record transformation, aggregation, loading and writing
//! - [`utils`]: Identifier generation
//! - [`config`]: Configuration management
//! - [`ui`]: Terminal output for run summaries

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod topics;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use error::{CatalogError, Result};
pub use models::{CatalogDocument, OutputPaper, RawPaper, Topic};
pub use topics::{ClassificationMode, Classifier};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
