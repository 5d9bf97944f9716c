//! End-to-end generation: load, classify, render, write.
//!
//! Each stage runs once, in order. The first error aborts the run and no
//! output is written unless rendering succeeded.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::LibraryResult;
use crate::library::Catalog;
use crate::render::{render_page, RenderOptions};
use crate::writer::write_document;

/// Default input catalog path
pub const DEFAULT_INPUT: &str = "config.json";

/// Default output page path
pub const DEFAULT_OUTPUT: &str = "output/index.html";

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub output: PathBuf,
    pub movies: usize,
    pub tv_shows: usize,
    pub skipped: usize,
    pub bytes: usize,
}

impl std::fmt::Display for GenerateSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Wrote {} ({} movies, {} TV episodes, {} skipped)",
            self.output.display(),
            self.movies,
            self.tv_shows,
            self.skipped
        )
    }
}

/// Render the catalog at `input` into a page at `output`
pub fn generate(input: &Path, output: &Path, opts: &RenderOptions) -> LibraryResult<GenerateSummary> {
    info!(input = %input.display(), "Loading media catalog");
    let catalog = Catalog::load(input)?;

    let html = render_page(&catalog, opts)?;
    write_document(output, &html)?;

    info!(output = %output.display(), bytes = html.len(), "Generated library page");

    Ok(GenerateSummary {
        output: output.to_path_buf(),
        movies: catalog.movies.len(),
        tv_shows: catalog.tv_shows.len(),
        skipped: catalog.skipped,
        bytes: html.len(),
    })
}
