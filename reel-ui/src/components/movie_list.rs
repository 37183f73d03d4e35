//! Movie list component
//!
//! Shared by the search results region and the favorites page: one
//! clickable row per movie, labeled by its display text.

use crate::components::ChromelessButton;
use dioxus::prelude::*;
use reel_common::MovieRef;

/// Clickable movie rows (pure, props-based)
///
/// Duplicate entries in the source data are rendered verbatim, so rows are
/// keyed by position rather than id.
#[component]
pub fn MovieListView(movies: Vec<MovieRef>, on_select: EventHandler<MovieRef>) -> Element {
    let rows: Vec<(usize, MovieRef, String)> = movies
        .into_iter()
        .enumerate()
        .map(|(index, movie)| {
            let label = movie.title_text();
            (index, movie, label)
        })
        .collect();

    rsx! {
        ul { class: "flex flex-col divide-y divide-gray-800",
            for (index, movie, label) in rows {
                li { key: "{index}",
                    ChromelessButton {
                        class: Some(
                            "w-full text-left px-4 py-3 text-gray-300 hover:bg-gray-800 hover:text-white transition-colors"
                                .to_string(),
                        ),
                        onclick: move |_| on_select.call(movie.clone()),
                        "{label}"
                    }
                }
            }
        }
    }
}
