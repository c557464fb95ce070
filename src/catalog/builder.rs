//! Aggregation of classified papers into a catalog document.

use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{debug, warn};

use super::transform::transform_paper;
use crate::models::{CatalogDocument, CatalogMeta, CategorySummary, OutputPaper, RawPaper, Topic};
use crate::topics::{AssignmentSource, Classifier};
use crate::utils::IdGenerator;

/// Counters collected while papers are added
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Papers added
    pub papers: usize,
    /// Papers filed under more than one topic
    pub multi_tagged: usize,
    /// Papers classified by a DOI override
    pub overridden: usize,
}

/// Newest first, then by title
pub fn compare_papers(a: &OutputPaper, b: &OutputPaper) -> Ordering {
    b.year.cmp(&a.year).then_with(|| a.title.cmp(&b.title))
}

/// `[min, max]` over all non-zero years, `None` when no paper is dated
pub fn year_range(papers: &[OutputPaper]) -> Option<[i32; 2]> {
    let mut years = papers.iter().map(|p| p.year).filter(|&y| y != 0);
    let first = years.next()?;
    Some(years.fold([first, first], |[min, max], y| [min.min(y), max.max(y)]))
}

/// Local time formatted like `2026-02-11T09:15:02.123456`
pub fn generation_timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// Classifies, identifies and collects papers in input order.
///
/// Ids are handed out as papers are pushed, so push order decides which
/// duplicate keeps the bare `surname-year` id.
#[derive(Debug)]
pub struct CatalogBuilder {
    classifier: Classifier,
    ids: IdGenerator,
    papers: Vec<OutputPaper>,
    counts: HashMap<Topic, usize>,
    stats: BuildStats,
}

impl CatalogBuilder {
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            ids: IdGenerator::new(),
            papers: Vec::new(),
            counts: HashMap::new(),
            stats: BuildStats::default(),
        }
    }

    /// Classify and add one paper, returning its exported form
    pub fn push(&mut self, paper: &RawPaper) -> &OutputPaper {
        let assignment = self.classifier.classify(paper);
        let id = self.ids.next_id(paper);
        debug!(id = %id, topics = ?assignment.topics(), source = ?assignment.source(), "Classified paper");

        for topic in assignment.topics() {
            *self.counts.entry(*topic).or_insert(0) += 1;
        }
        self.stats.papers += 1;
        if assignment.is_multi() {
            self.stats.multi_tagged += 1;
        }
        if assignment.source() == AssignmentSource::Override {
            self.stats.overridden += 1;
        }

        let output = transform_paper(paper, id, &assignment, self.classifier.mode());
        self.papers.push(output);
        &self.papers[self.papers.len() - 1]
    }

    /// Add every paper in order
    pub fn extend<'a, I>(&mut self, papers: I)
    where
        I: IntoIterator<Item = &'a RawPaper>,
    {
        for paper in papers {
            self.push(paper);
        }
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Number of papers filed under `topic`
    pub fn count(&self, topic: Topic) -> usize {
        self.counts.get(&topic).copied().unwrap_or(0)
    }

    /// Category summaries in display order, including empty categories
    pub fn categories(&self) -> Vec<CategorySummary> {
        Topic::ALL
            .iter()
            .map(|&topic| CategorySummary::new(topic, self.count(topic)))
            .collect()
    }

    /// Finish the catalog stamped with the current local time
    pub fn finish(self) -> CatalogDocument {
        self.finish_at(generation_timestamp())
    }

    /// Finish the catalog with an explicit generation timestamp
    pub fn finish_at(self, generated_at: impl Into<String>) -> CatalogDocument {
        let categories = self.categories();
        let mut papers = self.papers;
        papers.sort_by(compare_papers);

        let year_range = year_range(&papers).unwrap_or_else(|| {
            warn!("No paper carries a publication year; year range defaults to [0, 0]");
            [0, 0]
        });

        CatalogDocument {
            categories,
            meta: CatalogMeta {
                total_papers: papers.len(),
                year_range,
                generated_at: generated_at.into(),
            },
            papers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawPaperBuilder;
    use crate::topics::ClassificationMode;

    fn build(papers: &[RawPaper], mode: ClassificationMode) -> CatalogDocument {
        let mut builder = CatalogBuilder::new(Classifier::new(mode));
        builder.extend(papers);
        builder.finish_at("2026-01-01T00:00:00.000000")
    }

    #[test]
    fn test_papers_sorted_by_year_desc_then_title() {
        let papers = vec![
            RawPaperBuilder::new("b paper").year(2019).build(),
            RawPaperBuilder::new("a paper").year(2019).build(),
            RawPaperBuilder::new("Z paper").year(2019).build(),
            RawPaperBuilder::new("old").year(1990).build(),
            RawPaperBuilder::new("undated").build(),
            RawPaperBuilder::new("new").year(2024).build(),
        ];
        let doc = build(&papers, ClassificationMode::Multi);
        let titles: Vec<&str> = doc.papers.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "Z paper", "a paper", "b paper", "old", "undated"]);

        for pair in doc.papers.windows(2) {
            assert_ne!(compare_papers(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn test_meta() {
        let papers = vec![
            RawPaperBuilder::new("a").year(2001).build(),
            RawPaperBuilder::new("b").build(),
            RawPaperBuilder::new("c").year(1982).build(),
            RawPaperBuilder::new("d").year(2026).build(),
        ];
        let doc = build(&papers, ClassificationMode::Multi);
        assert_eq!(doc.meta.total_papers, 4);
        assert_eq!(doc.meta.total_papers, doc.papers.len());
        assert_eq!(doc.meta.year_range, [1982, 2026]);
        assert_eq!(doc.meta.generated_at, "2026-01-01T00:00:00.000000");
    }

    #[test]
    fn test_year_range_without_dates() {
        let doc = build(&[RawPaperBuilder::new("a").build()], ClassificationMode::Multi);
        assert_eq!(doc.meta.year_range, [0, 0]);
        assert_eq!(year_range(&[]), None);
    }

    #[test]
    fn test_category_counts_follow_topic_sets() {
        let papers = vec![
            RawPaperBuilder::new("Lahar after rainfall").build(),
            RawPaperBuilder::new("Rockfall on a glacier").build(),
            RawPaperBuilder::new("Traffic").build(),
        ];
        let doc = build(&papers, ClassificationMode::Multi);

        let keys: Vec<Topic> = doc.categories.iter().map(|c| c.key).collect();
        assert_eq!(keys, Topic::ALL.to_vec());

        for category in &doc.categories {
            let expected = doc
                .papers
                .iter()
                .filter(|p| p.categories.as_ref().unwrap().contains(&category.key))
                .count();
            assert_eq!(category.count, expected, "count for {}", category.key);
        }
        assert_eq!(doc.category(Topic::Hydrology).unwrap().count, 1);
        assert_eq!(doc.category(Topic::River).unwrap().count, 0);
        assert_eq!(doc.category(Topic::Other).unwrap().count, 1);
    }

    #[test]
    fn test_single_mode_counts_primary_only() {
        let papers = vec![RawPaperBuilder::new("Lahar after rainfall").build()];
        let doc = build(&papers, ClassificationMode::Single);
        assert_eq!(doc.category(Topic::DebrisFlow).unwrap().count, 1);
        assert_eq!(doc.category(Topic::Hydrology).unwrap().count, 0);
    }

    #[test]
    fn test_single_mode_counts_every_override_topic() {
        let papers = vec![RawPaperBuilder::new("Lahar").doi("10.1029/JB087iB07p05422").build()];
        let doc = build(&papers, ClassificationMode::Single);
        assert_eq!(doc.papers[0].category, Topic::Landslide);
        assert_eq!(doc.category(Topic::Landslide).unwrap().count, 1);
        assert_eq!(doc.category(Topic::Volcano).unwrap().count, 1);
        assert_eq!(doc.category(Topic::DebrisFlow).unwrap().count, 0);
    }

    #[test]
    fn test_stats() {
        let mut builder = CatalogBuilder::new(Classifier::new(ClassificationMode::Multi));
        builder.push(&RawPaperBuilder::new("Lahar after rainfall").build());
        builder.push(&RawPaperBuilder::new("x").doi("10.1029/JB087iB07p05422").build());
        builder.push(&RawPaperBuilder::new("Traffic").build());

        assert_eq!(
            builder.stats(),
            &BuildStats {
                papers: 3,
                multi_tagged: 2,
                overridden: 1,
            }
        );
        assert_eq!(builder.count(Topic::Landslide), 1);
    }

    #[test]
    fn test_ids_assigned_in_input_order_before_sorting() {
        let papers = vec![
            RawPaperBuilder::new("Zeta").author("Jane Feng").year(2026).build(),
            RawPaperBuilder::new("Alpha").author("Wei Feng").year(2026).build(),
        ];
        let doc = build(&papers, ClassificationMode::Multi);
        // Sorted by title, but the first input keeps the bare id
        assert_eq!(doc.papers[0].title, "Alpha");
        assert_eq!(doc.papers[0].id, "feng-2026b");
        assert_eq!(doc.papers[1].id, "feng-2026");
    }

    #[test]
    fn test_generation_timestamp_shape() {
        let ts = generation_timestamp();
        assert_eq!(ts.len(), "2026-02-11T09:15:02.123456".len());
        assert_eq!(&ts[10..11], "T");
    }
}
