//! Core data models for paper records and the exported catalog.

mod catalog;
mod de;
mod paper;
mod topic;

pub use catalog::{CatalogDocument, CatalogMeta, CategorySummary};
pub use paper::{ExternalIds, OutputPaper, RawAuthor, RawJournal, RawPaper, RawPaperBuilder};
pub use topic::Topic;
