//! The exported catalog document.

use serde::{Deserialize, Serialize};

use super::{OutputPaper, Topic};

/// Per-topic summary shown as a category tab on the website
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub key: Topic,
    pub name: String,
    pub icon: String,
    pub color: String,
    /// Number of papers whose topic set contains `key`
    pub count: usize,
}

impl CategorySummary {
    /// Build a summary from the topic's static metadata
    pub fn new(topic: Topic, count: usize) -> Self {
        Self {
            key: topic,
            name: topic.name().to_string(),
            icon: topic.icon().to_string(),
            color: topic.color().to_string(),
            count,
        }
    }
}

/// Dataset-wide metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMeta {
    pub total_papers: usize,
    /// `[min, max]` over all non-zero years
    pub year_range: [i32; 2],
    /// Local timestamp of the run, ISO-8601 without offset
    pub generated_at: String,
}

/// The complete document written to the output file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub categories: Vec<CategorySummary>,
    pub papers: Vec<OutputPaper>,
    pub meta: CatalogMeta,
}

impl CatalogDocument {
    /// Look up a category summary by topic
    pub fn category(&self, topic: Topic) -> Option<&CategorySummary> {
        self.categories.iter().find(|c| c.key == topic)
    }

    /// Find a paper by its catalog id
    pub fn paper(&self, id: &str) -> Option<&OutputPaper> {
        self.papers.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> CatalogDocument {
        CatalogDocument {
            categories: vec![CategorySummary::new(Topic::Glacier, 1)],
            papers: vec![OutputPaper {
                id: "müller-2020".to_string(),
                title: "Icequakes at Gornergletscher — a review".to_string(),
                authors: vec!["Anna Müller".to_string(), "李 明".to_string()],
                year: 2020,
                category: Topic::Glacier,
                categories: Some(vec![Topic::Glacier, Topic::Methods]),
                journal: "J. Glaciol.".to_string(),
                doi: "10.1/g".to_string(),
                url: "https://doi.org/10.1/g".to_string(),
                r#abstract: "Abstract".to_string(),
                summary: String::new(),
                citation_count: 5,
                semantic_scholar_id: "s2".to_string(),
            }],
            meta: CatalogMeta {
                total_papers: 1,
                year_range: [2020, 2020],
                generated_at: "2026-01-01T00:00:00.000000".to_string(),
            },
        }
    }

    #[test]
    fn test_document_survives_json_boundary() {
        let doc = sample_document();
        let json = serde_json::to_string_pretty(&doc).unwrap();
        let parsed: CatalogDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_document_field_names() {
        let value = serde_json::to_value(sample_document()).unwrap();
        assert_eq!(value["meta"]["totalPapers"], 1);
        assert_eq!(value["meta"]["yearRange"], serde_json::json!([2020, 2020]));
        assert_eq!(value["categories"][0]["key"], "glacier");
        assert_eq!(value["categories"][0]["name"], "Glacier & Cryoseismology");
        assert_eq!(value["papers"][0]["categories"], serde_json::json!(["glacier", "methods"]));
    }

    #[test]
    fn test_lookups() {
        let doc = sample_document();
        assert_eq!(doc.category(Topic::Glacier).map(|c| c.count), Some(1));
        assert!(doc.category(Topic::River).is_none());
        assert!(doc.paper("müller-2020").is_some());
    }
}
