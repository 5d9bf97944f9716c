//! Media catalog input.
//!
//! # Input Layout
//!
//! ```text
//! {
//!   "<any key>": { "match_type": "movie", "title": "...", "year": 2010, "poster_path": "/x.jpg" },
//!   "<any key>": { "match_type": "episode", "series_name": "...", "season": 1,
//!                  "episode": 5, "episode_name": "...", "poster_path": "/y.jpg" }
//! }
//! ```
//!
//! Keys are unused. Values with any other `match_type` are dropped.

pub mod catalog;
pub mod record;

pub use catalog::{load_records, parse_records, Catalog};
pub use record::{Episode, MatchType, MediaRecord, Movie, Ordinal};
