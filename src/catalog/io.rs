//! Reading the source dump and writing the catalog file.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use crate::error::{CatalogError, Result};
use crate::models::{CatalogDocument, RawPaper};

/// Load the source JSON array of paper records
#[instrument]
pub fn load_source(path: &Path) -> Result<Vec<RawPaper>> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;

    let papers: Vec<RawPaper> =
        serde_json::from_str(&content).map_err(|source| CatalogError::ParseSource {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(count = papers.len(), "Parsed source records");
    Ok(papers)
}

/// Render the document as indented JSON with non-ASCII text kept literal
pub fn render_document(document: &CatalogDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "catalog.json".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}

/// Write the document, replacing any existing file.
///
/// The JSON goes to a sibling staging file first and is renamed into place,
/// so a failed write leaves the previous catalog untouched.
#[instrument(skip(document), fields(papers = document.papers.len()))]
pub fn write_document(document: &CatalogDocument, path: &Path) -> Result<()> {
    let json = render_document(document)?;
    let staging = staging_path(path);

    let write_err = |source| CatalogError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    if let Err(err) = fs::write(&staging, json.as_bytes()) {
        let _ = fs::remove_file(&staging);
        return Err(write_err(err));
    }
    if let Err(err) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(write_err(err));
    }

    debug!(bytes = json.len(), "Catalog written");
    Ok(())
}
