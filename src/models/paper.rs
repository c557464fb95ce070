//! Paper records: the raw source shape and the exported catalog shape.

use serde::{Deserialize, Serialize};

use super::de::{
    lenient_authors, lenient_count, lenient_external_ids, lenient_string, lenient_year,
    value_to_text,
};
use super::Topic;

/// An author entry as found in the source dump.
///
/// Most records carry `{"name": "..."}` objects, older ones plain strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAuthor {
    Named {
        #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Plain(String),
    Other(serde_json::Value),
}

impl RawAuthor {
    /// Create a `{name}` author entry
    pub fn named(name: impl Into<String>) -> Self {
        RawAuthor::Named {
            name: Some(name.into()),
        }
    }

    /// Returns the author's name, if the entry carries one
    pub fn name(&self) -> Option<String> {
        match self {
            RawAuthor::Named { name } => name.clone(),
            RawAuthor::Plain(s) => Some(s.clone()),
            RawAuthor::Other(value) => value_to_text(value),
        }
    }
}

/// A journal as found in the source dump: `{"name": "..."}`, a plain string or junk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawJournal {
    Named {
        #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Plain(String),
    Other(serde_json::Value),
}

impl RawJournal {
    /// Returns the journal name, empty for any unrecognised shape
    pub fn name(&self) -> String {
        match self {
            RawJournal::Named { name } => name.clone().unwrap_or_default(),
            RawJournal::Plain(s) => s.clone(),
            RawJournal::Other(_) => String::new(),
        }
    }
}

/// External identifiers attached to a source record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalIds {
    #[serde(
        rename = "DOI",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub doi: Option<String>,
}

/// A paper metadata record from the source dump.
///
/// Every field is optional; absent and `null` values are treated the same.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPaper {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub r#abstract: Option<String>,

    #[serde(default, deserialize_with = "lenient_authors", skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<RawAuthor>>,

    #[serde(default, deserialize_with = "lenient_year", skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<RawJournal>,

    #[serde(
        rename = "externalIds",
        default,
        deserialize_with = "lenient_external_ids",
        skip_serializing_if = "Option::is_none"
    )]
    pub external_ids: Option<ExternalIds>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub imrad_summary: Option<String>,

    #[serde(
        rename = "citationCount",
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub citation_count: Option<u64>,

    #[serde(
        rename = "paperId",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub paper_id: Option<String>,
}

impl RawPaper {
    /// Returns the DOI, ignoring empty strings
    pub fn doi(&self) -> Option<&str> {
        self.external_ids
            .as_ref()
            .and_then(|ids| ids.doi.as_deref())
            .filter(|doi| !doi.is_empty())
    }

    /// Returns the first listed author
    pub fn first_author(&self) -> Option<&RawAuthor> {
        self.authors.as_ref().and_then(|authors| authors.first())
    }

    /// Returns the publication year, 0 when unknown
    pub fn year_or_zero(&self) -> i32 {
        self.year.unwrap_or(0)
    }
}

/// Builder for constructing RawPaper records
#[derive(Debug, Clone, Default)]
pub struct RawPaperBuilder {
    paper: RawPaper,
}

impl RawPaperBuilder {
    /// Create a new builder with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            paper: RawPaper {
                title: Some(title.into()),
                ..Default::default()
            },
        }
    }

    /// Set abstract
    pub fn abstract_text(mut self, abstract_text: impl Into<String>) -> Self {
        self.paper.r#abstract = Some(abstract_text.into());
        self
    }

    /// Append a `{name}` author
    pub fn author(mut self, name: impl Into<String>) -> Self {
        self.paper
            .authors
            .get_or_insert_with(Vec::new)
            .push(RawAuthor::named(name));
        self
    }

    /// Set publication year
    pub fn year(mut self, year: i32) -> Self {
        self.paper.year = Some(year);
        self
    }

    /// Set DOI
    pub fn doi(mut self, doi: impl Into<String>) -> Self {
        self.paper.external_ids = Some(ExternalIds {
            doi: Some(doi.into()),
        });
        self
    }

    /// Set journal name
    pub fn journal(mut self, journal: impl Into<String>) -> Self {
        self.paper.journal = Some(RawJournal::Named {
            name: Some(journal.into()),
        });
        self
    }

    /// Set landing page URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.paper.url = Some(url.into());
        self
    }

    /// Set IMRaD summary
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.paper.imrad_summary = Some(summary.into());
        self
    }

    /// Set citation count
    pub fn citations(mut self, count: u64) -> Self {
        self.paper.citation_count = Some(count);
        self
    }

    /// Set Semantic Scholar paper ID
    pub fn paper_id(mut self, id: impl Into<String>) -> Self {
        self.paper.paper_id = Some(id.into());
        self
    }

    /// Build the RawPaper
    pub fn build(self) -> RawPaper {
        self.paper
    }
}

/// A paper as exported to the catalog document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputPaper {
    /// Short `surname-year` identifier, unique within the catalog
    pub id: String,

    pub title: String,

    pub authors: Vec<String>,

    /// Publication year, 0 when unknown
    pub year: i32,

    /// Primary topic
    pub category: Topic,

    /// Every matched topic, primary first (multi-topic mode only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Topic>>,

    pub journal: String,

    pub doi: String,

    /// DOI resolver link when a DOI is known, else the source URL
    pub url: String,

    pub r#abstract: String,

    pub summary: String,

    pub citation_count: u64,

    pub semantic_scholar_id: String,
}
