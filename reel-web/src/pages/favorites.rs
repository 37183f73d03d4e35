use crate::state::use_app_state;
use crate::Route;
use dioxus::prelude::*;
use reel_common::{MovieRef, Page};
use reel_ui::{FavoritesView, PageContainer};
use tracing::warn;

#[component]
pub fn Favorites() -> Element {
    let mut state = use_app_state();

    let movies: Vec<MovieRef> = state
        .favorites
        .read()
        .entries()
        .iter()
        .map(MovieRef::from_favorite)
        .collect();

    let on_select = move |movie: MovieRef| {
        let Some(id) = movie.external_id().map(str::to_string) else {
            warn!("Favorite without an external id");
            return;
        };
        state.current_movie.set(Some(movie));
        state.nav.write().activate(Page::Movie, false);
        navigator().push(Route::Movie { id });
    };

    let loaded = *state.favorites_loaded.read();

    rsx! {
        PageContainer {
            FavoritesView {
                movies,
                loaded,
                on_select,
            }
        }
    }
}
