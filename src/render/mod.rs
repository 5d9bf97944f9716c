//! HTML rendering for the media library page.
//!
//! Markup is built with `maud`, so every interpolated field is escaped.
//! The stylesheet and filter script are fixed assets emitted verbatim.

pub mod card;
pub mod page;

pub use card::{render_card, render_episode, render_movie};
pub use page::render_page;

/// Default poster image base URL (TMDB, 500px wide)
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Default `<title>` of the generated page
pub const DEFAULT_PAGE_TITLE: &str = "Media Library";

/// Default logo text in the page header
pub const DEFAULT_HEADING: &str = "MEDIA LIBRARY";

/// Placeholder embedded in the poster URL when a record has no `poster_path`
pub const MISSING_POSTER: &str = "None";

/// Settings that affect rendered output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix joined with each record's `poster_path`
    pub image_base_url: String,

    pub page_title: String,

    pub heading: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            page_title: DEFAULT_PAGE_TITLE.to_string(),
            heading: DEFAULT_HEADING.to_string(),
        }
    }
}

impl RenderOptions {
    /// Full poster URL for a record
    pub fn poster_url(&self, poster_path: Option<&str>) -> String {
        format!(
            "{}{}",
            self.image_base_url,
            poster_path.unwrap_or(MISSING_POSTER)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poster_url() {
        let opts = RenderOptions::default();
        assert_eq!(
            opts.poster_url(Some("/abc.jpg")),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        // Absent paths stay visible in the URL
        assert_eq!(opts.poster_url(None), "https://image.tmdb.org/t/p/w500None");
    }
}
