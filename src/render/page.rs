//! The full library document.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::card::{render_episode, render_movie};
use super::RenderOptions;
use crate::error::LibraryResult;
use crate::library::Catalog;

const STYLES: &str = include_str!("assets/style.css");

/// Client-side filter: hides cards whose `data-title` does not contain the query
const FILTER_SCRIPT: &str = include_str!("assets/filter.js");

/// Render the complete HTML document for a classified catalog.
///
/// Output depends only on the catalog and options, so repeated runs over the
/// same input are byte-identical.
pub fn render_page(catalog: &Catalog, opts: &RenderOptions) -> LibraryResult<String> {
    let movie_cards: Vec<Markup> = catalog
        .movies
        .iter()
        .map(|movie| render_movie(movie, opts))
        .collect();

    let show_cards = catalog
        .tv_shows
        .iter()
        .map(|episode| render_episode(episode, opts))
        .collect::<LibraryResult<Vec<_>>>()?;

    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (opts.page_title) }
                style { (PreEscaped(STYLES)) }
            }
            body {
                div class="container" {
                    div class="header" {
                        div class="logo" { (opts.heading) }
                    }
                    div class="filter" {
                        input type="text" id="filterInput" onkeyup="filterMedia()" placeholder="Filter by title...";
                    }
                    (category("movies", "Movies", &movie_cards))
                    (category("tv-shows", "TV Shows", &show_cards))
                }
                script { (PreEscaped(FILTER_SCRIPT)) }
            }
        }
    };

    Ok(page.into_string())
}

fn category(id: &str, heading: &str, cards: &[Markup]) -> Markup {
    html! {
        div class="category" id=(id) {
            h2 class="category-title" { (heading) }
            div class="cards" {
                @for card in cards {
                    (card)
                }
            }
        }
    }
}
