//! Building the catalog document from a source dump.
//!
//! A run is strictly sequential: load every record, classify and transform
//! them in input order, aggregate, then write the document in one go. Any
//! failure before the write leaves the output file untouched.

mod builder;
mod io;
mod transform;

pub use builder::{compare_papers, generation_timestamp, year_range, BuildStats, CatalogBuilder};
pub use io::{load_source, render_document, write_document};
pub use transform::{author_names, paper_url, transform_paper};

use std::path::PathBuf;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::models::CatalogDocument;

/// Outcome of a catalog run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Records read from the source file
    pub loaded: usize,
    pub stats: BuildStats,
    pub document: CatalogDocument,
    /// Where the document was written, `None` for dry runs
    pub output: Option<PathBuf>,
}

/// Load, classify, aggregate and (unless `dry_run`) write the catalog
pub fn run(config: &Config, dry_run: bool) -> Result<RunSummary> {
    let classifier = config.classifier()?;

    let raw_papers = load_source(&config.paths.input)?;
    info!(
        count = raw_papers.len(),
        source = %config.paths.input.display(),
        "Loaded papers from source"
    );

    let mut builder = CatalogBuilder::new(classifier);
    builder.extend(&raw_papers);
    let stats = builder.stats().clone();
    let document = builder.finish();

    let output = if dry_run {
        info!("Dry run, catalog not written");
        None
    } else {
        write_document(&document, &config.paths.output)?;
        info!(
            output = %config.paths.output.display(),
            papers = document.papers.len(),
            "Catalog written"
        );
        Some(config.paths.output.clone())
    };

    Ok(RunSummary {
        loaded: raw_papers.len(),
        stats,
        document,
        output,
    })
}
