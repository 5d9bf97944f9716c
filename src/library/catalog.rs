//! Catalog loading and classification.
//!
//! The input is a JSON object whose values are media records. Keys are
//! ignored; iteration order of the object is the order of the output.

use std::io::ErrorKind as IoErrorKind;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info};

use super::record::{Episode, MediaRecord, Movie};
use crate::error::{LibraryError, LibraryResult};

/// Load the raw record mapping from disk
pub fn load_records(path: &Path) -> LibraryResult<Map<String, Value>> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == IoErrorKind::NotFound {
            LibraryError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LibraryError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_records(&content, path)
}

/// Parse catalog JSON text. `path` is only used for error messages.
pub fn parse_records(content: &str, path: &Path) -> LibraryResult<Map<String, Value>> {
    let value: Value = serde_json::from_str(content).map_err(|source| LibraryError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(map) => {
            debug!(records = map.len(), path = %path.display(), "Loaded media catalog");
            Ok(map)
        }
        _ => Err(LibraryError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

/// Records split into the two rendered categories
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub movies: Vec<Movie>,
    pub tv_shows: Vec<Episode>,

    /// Number of records with an unrecognized `match_type`
    pub skipped: usize,
}

impl Catalog {
    /// Classify records, preserving their relative order within each category
    pub fn classify<'a>(records: impl IntoIterator<Item = &'a Value>) -> Self {
        let mut catalog = Self::default();

        for value in records {
            match MediaRecord::from_value(value) {
                MediaRecord::Movie(movie) => catalog.movies.push(movie),
                MediaRecord::Episode(episode) => catalog.tv_shows.push(episode),
                MediaRecord::Unknown => catalog.skipped += 1,
            }
        }

        info!(
            movies = catalog.movies.len(),
            tv_shows = catalog.tv_shows.len(),
            skipped = catalog.skipped,
            "Classified media records"
        );

        catalog
    }

    /// Classify the values of a loaded record mapping
    pub fn from_records(records: &Map<String, Value>) -> Self {
        Self::classify(records.values())
    }

    /// Load and classify in one step
    pub fn load(path: &Path) -> LibraryResult<Self> {
        let records = load_records(path)?;
        Ok(Self::from_records(&records))
    }

    /// Total number of classified records
    pub fn len(&self) -> usize {
        self.movies.len() + self.tv_shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty() && self.tv_shows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_classify_preserves_order() {
        let map = records(json!({
            "z": {"match_type": "movie", "title": "Zodiac"},
            "a": {"match_type": "episode", "series_name": "Alias", "season": 1, "episode": 1},
            "m": {"match_type": "movie", "title": "Memento"},
            "b": {"match_type": "episode", "series_name": "Bones", "season": 2, "episode": 3},
        }));

        let catalog = Catalog::from_records(&map);

        let movies: Vec<_> = catalog.movies.iter().filter_map(|m| m.title.as_deref()).collect();
        assert_eq!(movies, vec!["Zodiac", "Memento"]);

        let shows: Vec<_> = catalog
            .tv_shows
            .iter()
            .filter_map(|e| e.series_name.as_deref())
            .collect();
        assert_eq!(shows, vec!["Alias", "Bones"]);
        assert_eq!(catalog.skipped, 0);
    }

    #[test]
    fn test_classify_skips_unknown() {
        let map = records(json!({
            "1": {"match_type": "actor", "name": "Someone"},
            "2": {"title": "No type"},
            "3": {"match_type": "movie", "title": "Heat"},
            "4": [1, 2, 3],
        }));

        let catalog = Catalog::from_records(&map);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.skipped, 3);
        assert!(catalog.len() <= map.len());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_records(&Map::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.skipped, 0);
    }

    #[test]
    fn test_parse_records_errors() {
        let path = Path::new("catalog.json");

        let err = parse_records("{not json", path).unwrap_err();
        assert!(matches!(err, LibraryError::Parse { .. }));

        let err = parse_records("[1, 2]", path).unwrap_err();
        assert!(matches!(err, LibraryError::NotAnObject { .. }));

        assert!(parse_records("{}", path).unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_records(Path::new("/nonexistent/medialib/catalog.json")).unwrap_err();
        assert!(matches!(err, LibraryError::NotFound { .. }));
    }
}
