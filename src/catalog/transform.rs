//! Mapping source records onto the exported paper shape.

use crate::models::{OutputPaper, RawAuthor, RawJournal, RawPaper};
use crate::topics::{ClassificationMode, TopicAssignment};

const DOI_RESOLVER: &str = "https://doi.org/";

/// Link for a paper: the DOI resolver when a DOI is known, else the source URL
pub fn paper_url(paper: &RawPaper) -> String {
    match paper.doi() {
        Some(doi) => format!("{}{}", DOI_RESOLVER, doi),
        None => paper.url.clone().unwrap_or_default(),
    }
}

/// Build the exported record for one paper. Absent fields become `""` or `0`.
pub fn transform_paper(
    paper: &RawPaper,
    id: String,
    assignment: &TopicAssignment,
    mode: ClassificationMode,
) -> OutputPaper {
    let authors = author_names(paper.authors.as_deref().unwrap_or_default());

    // Single mode only lists categories when an override supplied several
    let categories = match mode {
        ClassificationMode::Single if !assignment.is_multi() => None,
        _ => Some(assignment.topics().to_vec()),
    };

    OutputPaper {
        id,
        title: paper.title.clone().unwrap_or_default(),
        authors,
        year: paper.year_or_zero(),
        category: assignment.primary(),
        categories,
        journal: paper
            .journal
            .as_ref()
            .map(RawJournal::name)
            .unwrap_or_default(),
        doi: paper.doi().unwrap_or_default().to_string(),
        url: paper_url(paper),
        r#abstract: paper.r#abstract.clone().unwrap_or_default(),
        summary: paper.imrad_summary.clone().unwrap_or_default(),
        citation_count: paper.citation_count.unwrap_or(0),
        semantic_scholar_id: paper.paper_id.clone().unwrap_or_default(),
    }
}

/// Author names as plain strings; entries without a name become `""`
pub fn author_names(authors: &[RawAuthor]) -> Vec<String> {
    authors
        .iter()
        .map(|author| author.name().unwrap_or_default())
        .collect()
}
