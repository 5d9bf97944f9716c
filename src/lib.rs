//! medialib - Static HTML page for a movie and TV catalog
//!
//! Reads a JSON mapping of media records and renders a single HTML page
//! listing them in two categories, "Movies" and "TV Shows", with a
//! client-side title filter.
//!
//! # Pipeline
//!
//! A single synchronous pass, failing on the first error:
//! - Load the JSON catalog (`library::catalog`)
//! - Classify records by `match_type`, preserving input order
//! - Render one card per record into the page shell (`render`)
//! - Write the page, creating the output directory if needed (`writer`)
//!
//! # Modules
//!
//! - `library`: Record decoding and classification
//! - `render`: Card and page markup
//! - `writer`: Output file handling
//! - `pipeline`: End-to-end `generate`
//! - `config`: Path and render settings resolution
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Render config.json to output/index.html
//! medialib
//!
//! # Custom paths
//! medialib render --config media.json --output site/index.html
//!
//! # Inspect what would be rendered
//! medialib list
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod library;
pub mod pipeline;
pub mod render;
pub mod writer;

// Re-export main types at crate root for convenience
pub use error::{ErrorKind, LibraryError, LibraryResult};
pub use library::{Catalog, Episode, MatchType, MediaRecord, Movie, Ordinal};
pub use pipeline::{generate, GenerateSummary};
pub use render::{render_card, render_page, RenderOptions};
pub use writer::write_document;
