//! Utility modules supporting catalog builds.
//!
//! - [`IdGenerator`]: hands out unique `surname-year` ids in input order
//! - [`base_id`]: the unsuffixed id for a paper
//! - [`surname_of`]: reduce an author name to an id-safe surname
//!
//! # Identifiers
//!
//! ```rust
//! use paper_catalog::models::RawPaperBuilder;
//! use paper_catalog::utils::IdGenerator;
//!
//! let paper = RawPaperBuilder::new("A lahar").author("Jane Feng").year(2026).build();
//! let mut ids = IdGenerator::new();
//! assert_eq!(ids.next_id(&paper), "feng-2026");
//! assert_eq!(ids.next_id(&paper), "feng-2026b");
//! ```

mod ids;

pub use ids::{base_id, surname_of, IdGenerator};
