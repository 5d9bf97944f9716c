//! Media records decoded from the input catalog.
//!
//! Each JSON value is decoded once, at load time, into a [`MediaRecord`].
//! Decoding never fails: fields that are absent or of an unexpected shape
//! become `None` and are rendered as empty text later on.

use serde_json::{Map, Value};

use crate::error::{LibraryError, LibraryResult};

/// Kind of media a record describes, taken from its `match_type`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// `"movie"`
    Movie,

    /// `"episode"`
    Episode,

    /// Anything else, including a missing discriminator
    Unknown,
}

impl From<Option<&Value>> for MatchType {
    fn from(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("movie") => MatchType::Movie,
            Some("episode") => MatchType::Episode,
            _ => MatchType::Unknown,
        }
    }
}

/// A movie record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Movie {
    pub title: Option<String>,

    /// Release year, kept as text since the catalog may hold a number or a string
    pub year: Option<String>,

    /// Partial poster URL path, e.g. `/abc.jpg`
    pub poster_path: Option<String>,
}

impl Movie {
    /// One-line description, e.g. `Inception (2010)`
    pub fn describe(&self) -> String {
        let title = self.title.as_deref().unwrap_or_default();
        match self.year.as_deref() {
            Some(year) => format!("{} ({})", title, year),
            None => title.to_string(),
        }
    }
}

/// A TV episode record
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    pub series_name: Option<String>,
    pub season: Ordinal,
    pub episode: Ordinal,
    pub episode_name: Option<String>,
    pub poster_path: Option<String>,
}

impl Episode {
    /// `S01E05` style code. Fails like rendering does on a bad number.
    pub fn code(&self) -> LibraryResult<String> {
        Ok(format!(
            "S{}E{}",
            self.season.padded("season")?,
            self.episode.padded("episode")?
        ))
    }

    /// One-line description, e.g. `Dark S01E05: Truths`
    pub fn describe(&self) -> LibraryResult<String> {
        Ok(format!(
            "{} {}: {}",
            self.series_name.as_deref().unwrap_or_default(),
            self.code()?,
            self.episode_name.as_deref().unwrap_or_default()
        ))
    }
}

/// A season or episode number as found in the catalog.
///
/// Validity is checked when the number is formatted, not when it is decoded,
/// so a bad number only fails the run if the record is actually rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Ordinal {
    Number(u64),
    Missing,
    /// Raw JSON text of a value that is not a non-negative integer
    Invalid(String),
}

impl Ordinal {
    fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Ordinal::Missing,
            Some(v) => match v.as_u64() {
                Some(n) => Ordinal::Number(n),
                None => Ordinal::Invalid(v.to_string()),
            },
        }
    }

    /// Zero-pad to at least two digits. Wider numbers are never truncated.
    pub fn padded(&self, field: &'static str) -> LibraryResult<String> {
        match self {
            Ordinal::Number(n) => Ok(format!("{:02}", n)),
            Ordinal::Missing => Err(LibraryError::Format {
                field,
                value: "null".to_string(),
            }),
            Ordinal::Invalid(raw) => Err(LibraryError::Format {
                field,
                value: raw.clone(),
            }),
        }
    }
}

impl From<u64> for Ordinal {
    fn from(n: u64) -> Self {
        Ordinal::Number(n)
    }
}

/// One entry of the media catalog
#[derive(Debug, Clone, PartialEq)]
pub enum MediaRecord {
    Movie(Movie),
    Episode(Episode),
    Unknown,
}

impl MediaRecord {
    /// Decode a catalog value. Non-object values decode as [`MediaRecord::Unknown`].
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return MediaRecord::Unknown;
        };

        match MatchType::from(obj.get("match_type")) {
            MatchType::Movie => MediaRecord::Movie(Movie {
                title: text_field(obj, "title"),
                year: text_field(obj, "year"),
                poster_path: text_field(obj, "poster_path"),
            }),
            MatchType::Episode => MediaRecord::Episode(Episode {
                series_name: text_field(obj, "series_name"),
                season: Ordinal::from_value(obj.get("season")),
                episode: Ordinal::from_value(obj.get("episode")),
                episode_name: text_field(obj, "episode_name"),
                poster_path: text_field(obj, "poster_path"),
            }),
            MatchType::Unknown => MediaRecord::Unknown,
        }
    }
}

/// Read a scalar field as text. Strings are taken as-is, other scalars in JSON form.
fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_movie() {
        let record = MediaRecord::from_value(&json!({
            "match_type": "movie",
            "title": "Inception",
            "year": 2010,
            "poster_path": "/abc.jpg"
        }));

        assert_eq!(
            record,
            MediaRecord::Movie(Movie {
                title: Some("Inception".to_string()),
                year: Some("2010".to_string()),
                poster_path: Some("/abc.jpg".to_string()),
            })
        );
    }

    #[test]
    fn test_decode_year_as_string() {
        let record = MediaRecord::from_value(&json!({"match_type": "movie", "year": "1999"}));
        let MediaRecord::Movie(movie) = record else {
            panic!("Expected movie");
        };
        assert_eq!(movie.year.as_deref(), Some("1999"));
        assert!(movie.title.is_none());
        assert!(movie.poster_path.is_none());
    }

    #[test]
    fn test_decode_episode_numbers() {
        let record = MediaRecord::from_value(&json!({
            "match_type": "episode",
            "series_name": "Dark",
            "season": 1,
            "episode": "two",
        }));
        let MediaRecord::Episode(ep) = record else {
            panic!("Expected episode");
        };
        assert_eq!(ep.season, Ordinal::Number(1));
        assert_eq!(ep.episode, Ordinal::Invalid("\"two\"".to_string()));
        assert!(ep.episode_name.is_none());
    }

    #[test]
    fn test_unknown_records() {
        assert_eq!(
            MediaRecord::from_value(&json!({"match_type": "actor", "name": "Someone"})),
            MediaRecord::Unknown
        );
        assert_eq!(MediaRecord::from_value(&json!({"title": "No type"})), MediaRecord::Unknown);
        assert_eq!(MediaRecord::from_value(&json!("movie")), MediaRecord::Unknown);
        assert_eq!(MediaRecord::from_value(&json!({"match_type": "Movie"})), MediaRecord::Unknown);
    }

    #[test]
    fn test_ordinal_padding() {
        assert_eq!(Ordinal::Number(3).padded("season").unwrap(), "03");
        assert_eq!(Ordinal::Number(12).padded("season").unwrap(), "12");
        assert_eq!(Ordinal::Number(107).padded("episode").unwrap(), "107");
        assert!(Ordinal::Missing.padded("season").is_err());
        assert!(Ordinal::from_value(Some(&json!(-1))).padded("season").is_err());
        assert!(Ordinal::from_value(Some(&json!(2.5))).padded("episode").is_err());
    }

    #[test]
    fn test_describe() {
        let movie = Movie {
            title: Some("Heat".to_string()),
            year: Some("1995".to_string()),
            poster_path: None,
        };
        assert_eq!(movie.describe(), "Heat (1995)");
        assert_eq!(Movie::default().describe(), "");

        let MediaRecord::Episode(ep) = MediaRecord::from_value(&json!({
            "match_type": "episode",
            "series_name": "Dark",
            "season": 1,
            "episode": 5,
            "episode_name": "Truths"
        })) else {
            panic!("Expected episode");
        };
        assert_eq!(ep.describe().unwrap(), "Dark S01E05: Truths");
    }

    #[test]
    fn test_describe_bad_number_is_format_error() {
        let MediaRecord::Episode(ep) = MediaRecord::from_value(&json!({
            "match_type": "episode",
            "series_name": "Dark",
            "season": "one",
            "episode": 1
        })) else {
            panic!("Expected episode");
        };

        let err = ep.describe().unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Format);
    }
}
