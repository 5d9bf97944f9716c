//! Per-record cards.

use maud::{html, Markup};

use super::RenderOptions;
use crate::error::LibraryResult;
use crate::library::{Episode, MediaRecord, Movie};

/// Render one record as a card. Unknown records render as empty markup.
pub fn render_card(record: &MediaRecord, opts: &RenderOptions) -> LibraryResult<Markup> {
    match record {
        MediaRecord::Movie(movie) => Ok(render_movie(movie, opts)),
        MediaRecord::Episode(episode) => render_episode(episode, opts),
        MediaRecord::Unknown => Ok(html! {}),
    }
}

pub fn render_movie(movie: &Movie, opts: &RenderOptions) -> Markup {
    let title = movie.title.as_deref().unwrap_or_default();
    let year = movie.year.as_deref().unwrap_or_default();

    html! {
        div class="card" data-title=(title) {
            img src=(opts.poster_url(movie.poster_path.as_deref())) alt=(title);
            div class="card-body" {
                div class="card-title" { (title) }
                div class="card-text" { (year) }
            }
        }
    }
}

/// Render an episode card.
///
/// Fails with a format error if season or episode is not a non-negative integer.
pub fn render_episode(episode: &Episode, opts: &RenderOptions) -> LibraryResult<Markup> {
    let series_name = episode.series_name.as_deref().unwrap_or_default();
    let episode_name = episode.episode_name.as_deref().unwrap_or_default();
    let code = episode.code()?;

    Ok(html! {
        div class="card" data-title=(format!("{} {}", series_name, episode_name)) {
            img src=(opts.poster_url(episode.poster_path.as_deref())) alt=(series_name);
            div class="card-body" {
                div class="card-title" { (series_name) }
                div class="card-text" { (code) ": " (episode_name) }
            }
        }
    })
}
