//! Favorites view component - pure rendering, no data fetching

use crate::components::MovieListView;
use dioxus::prelude::*;
use reel_common::MovieRef;

/// Favorites view (pure, props-based)
///
/// Blank until the first load completes, a placeholder message when the
/// list is empty, rows otherwise.
#[component]
pub fn FavoritesView(
    movies: Vec<MovieRef>,
    loaded: bool,
    on_select: EventHandler<MovieRef>,
) -> Element {
    rsx! {
        div { class: "flex flex-col gap-6",
            h1 { class: "text-3xl font-bold text-white", "Favorites" }
            if loaded {
                if movies.is_empty() {
                    p { class: "text-gray-400",
                        "You have not yet added any movies to your Favorite list"
                    }
                } else {
                    MovieListView { movies, on_select }
                }
            }
        }
    }
}
