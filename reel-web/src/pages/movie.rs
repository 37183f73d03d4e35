use crate::pages::{page_route, ApiContext};
use crate::state::use_app_state;
use dioxus::prelude::*;
use reel_common::{DetailPhase, FavoriteButton, MovieRef, Page};
use reel_ui::{MovieDetailView, PageContainer};
use tracing::warn;

#[component]
pub fn Movie(id: String) -> Element {
    let api = use_context::<ApiContext>();
    let mut state = use_app_state();

    let movies_api = api.movies.clone();
    let route_id = id.clone();
    let detail = use_resource(move || {
        let movies_api = movies_api.clone();
        let id = route_id.clone();
        async move {
            // Reached by URL alone (or with a stale selection): seed a
            // minimal reference so the favorite flow has an id to work with.
            let known = state
                .current_movie
                .peek()
                .as_ref()
                .and_then(|movie| movie.external_id().map(str::to_string));
            if known.as_deref() != Some(id.as_str()) {
                state.current_movie.set(Some(MovieRef {
                    imdb_id: Some(id.clone()),
                    ..Default::default()
                }));
            }

            let result = movies_api.lookup(&id).await;

            if let Ok(detail) = &result {
                // Without a stored name or title the heading has nothing to
                // show; pull the identity fields out of the response.
                let nameless = state
                    .current_movie
                    .peek()
                    .as_ref()
                    .map_or(true, |movie| movie.name.is_none() && movie.title.is_none());
                if nameless {
                    let mut movie = detail.to_movie_ref();
                    if movie.imdb_id.is_none() {
                        movie.imdb_id = Some(id.clone());
                    }
                    state.current_movie.set(Some(movie));
                }
            }

            result
        }
    });

    let current = state.current_movie.read().clone();
    let heading = current
        .as_ref()
        .map(|movie| movie.title_text())
        .unwrap_or_default();
    let button = FavoriteButton::derive(current.as_ref(), &state.favorites.read());

    let phase = match &*detail.read() {
        Some(Ok(detail)) => DetailPhase::Ready(detail.clone()),
        Some(Err(err)) => DetailPhase::Failed(err.to_string()),
        None => DetailPhase::Loading,
    };

    let back_target = state.nav.read().back_target();
    let back_text = match back_target {
        Page::Home => "Back to Search",
        Page::Favorites => "Back to Favorites",
        Page::Movie => "Back",
    };

    let on_back = move |_| {
        let target = state.nav.peek().back_target();
        state.nav.write().activate(target, false);
        navigator().push(page_route(target));
    };

    let favorites_api = api.favorites.clone();
    let on_add_favorite = move |_| {
        // No selection or no id: nothing to save, no request goes out.
        let Some(movie) = state.current_movie.peek().clone() else {
            return;
        };
        let Some(entry) = movie.to_favorite() else {
            return;
        };

        let favorites_api = favorites_api.clone();
        spawn(async move {
            match favorites_api.add(&entry.name, &entry.oid).await {
                Ok(entries) => {
                    // The echoed entry is the authoritative shape for the
                    // selection from here on.
                    let echoed = entries
                        .iter()
                        .find(|saved| saved.oid == entry.oid)
                        .map(MovieRef::from_favorite);
                    state.favorites.write().replace(entries);
                    state.favorites_loaded.set(true);
                    if let Some(movie) = echoed {
                        state.current_movie.set(Some(movie));
                    }
                }
                Err(e) => warn!("Failed to add favorite: {}", e),
            }
        });
    };

    rsx! {
        PageContainer {
            MovieDetailView {
                heading,
                phase,
                button,
                back_text: back_text.to_string(),
                on_back,
                on_add_favorite,
            }
        }
    }
}
