//! Topic classification for paper records.
//!
//! - [`TopicRule`]: keywords filing a paper under one [`Topic`](crate::models::Topic)
//! - [`default_rules`]: the built-in rule table, in priority order
//! - [`Classifier`]: applies DOI overrides, then keyword rules
//!
//! # Example
//!
//! ```rust
//! use paper_catalog::models::Topic;
//! use paper_catalog::topics::{ClassificationMode, Classifier};
//!
//! let classifier = Classifier::new(ClassificationMode::Single);
//! let assignment = classifier.classify_text("A lahar triggered by rainfall", "");
//! assert_eq!(assignment.primary(), Topic::DebrisFlow);
//! ```

mod classifier;
mod rules;

pub use classifier::{AssignmentSource, ClassificationMode, Classifier, TopicAssignment};
pub use rules::{default_overrides, default_rules, TopicRule};
