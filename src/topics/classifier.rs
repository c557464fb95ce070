//! Keyword classifier assigning topics to papers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

use super::rules::{default_overrides, default_rules, TopicRule};
use crate::models::{RawPaper, Topic};

/// How many topics a paper may be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationMode {
    /// Only the first matching rule counts
    Single,
    /// Every matching rule counts, the first one is primary
    #[default]
    Multi,
}

/// Where a topic assignment came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentSource {
    /// Manual DOI override
    Override,
    /// At least one keyword rule matched
    Keywords,
    /// Nothing matched, filed under the catch-all
    Fallback,
}

/// The topics assigned to one paper. Never empty; the first topic is primary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicAssignment {
    topics: Vec<Topic>,
    source: AssignmentSource,
}

impl TopicAssignment {
    fn new(topics: Vec<Topic>, source: AssignmentSource) -> Self {
        if topics.is_empty() {
            return Self::fallback();
        }
        Self { topics, source }
    }

    fn fallback() -> Self {
        Self {
            topics: vec![Topic::Other],
            source: AssignmentSource::Fallback,
        }
    }

    /// The highest-priority topic
    pub fn primary(&self) -> Topic {
        self.topics[0]
    }

    /// Every assigned topic, primary first
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn source(&self) -> AssignmentSource {
        self.source
    }

    /// Returns true if the paper sits in more than one category
    pub fn is_multi(&self) -> bool {
        self.topics.len() > 1
    }

    pub fn contains(&self, topic: Topic) -> bool {
        self.topics.contains(&topic)
    }
}

/// Assigns topics by case-insensitive substring search over title and abstract.
///
/// Rules are tried in order; earlier rules shadow later ones for the primary
/// topic. A DOI override, when present, replaces keyword matching entirely and
/// yields its full topic list in either mode.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<TopicRule>,
    overrides: HashMap<String, Vec<Topic>>,
    mode: ClassificationMode,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(ClassificationMode::default())
    }
}

impl Classifier {
    /// Classifier with the built-in rules and DOI overrides
    pub fn new(mode: ClassificationMode) -> Self {
        Self::with_rules(default_rules(), mode).with_overrides(default_overrides())
    }

    /// Classifier with a custom rule table and no overrides
    pub fn with_rules(rules: Vec<TopicRule>, mode: ClassificationMode) -> Self {
        Self {
            rules,
            overrides: HashMap::new(),
            mode,
        }
    }

    /// Add DOI overrides; later entries replace earlier ones for the same DOI
    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<Topic>)>,
    {
        for (doi, topics) in overrides {
            if topics.is_empty() {
                warn!(doi = %doi, "Ignoring override without topics");
                continue;
            }
            self.overrides.insert(doi, topics);
        }
        self
    }

    pub fn mode(&self) -> ClassificationMode {
        self.mode
    }

    pub fn rules(&self) -> &[TopicRule] {
        &self.rules
    }

    /// Number of DOI overrides in effect
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Classify a paper, honouring DOI overrides
    pub fn classify(&self, paper: &RawPaper) -> TopicAssignment {
        if let Some(topics) = paper.doi().and_then(|doi| self.overrides.get(doi)) {
            debug!(doi = ?paper.doi(), ?topics, "Using manual topic override");
            return TopicAssignment::new(topics.clone(), AssignmentSource::Override);
        }

        self.classify_text(
            paper.title.as_deref().unwrap_or_default(),
            paper.r#abstract.as_deref().unwrap_or_default(),
        )
    }

    /// Classify a title and abstract by keyword rules alone
    pub fn classify_text(&self, title: &str, r#abstract: &str) -> TopicAssignment {
        let text = format!("{} {}", title, r#abstract).to_lowercase();
        let mut matched: Vec<Topic> = Vec::new();

        for rule in &self.rules {
            if matched.contains(&rule.topic) || !rule.matches(&text) {
                continue;
            }
            matched.push(rule.topic);
            if self.mode == ClassificationMode::Single {
                break;
            }
        }

        if matched.is_empty() {
            return TopicAssignment::fallback();
        }
        TopicAssignment::new(matched, AssignmentSource::Keywords)
    }
}
