use crate::pages::ApiContext;
use crate::state::use_app_state;
use crate::Route;
use dioxus::prelude::*;
use reel_common::{MovieRef, Page, SearchPhase};
use reel_ui::{PageContainer, SearchView};
use tracing::warn;

#[component]
pub fn Home() -> Element {
    let api = use_context::<ApiContext>();
    let mut state = use_app_state();

    let movies_api = api.movies.clone();
    let on_submit = move |_: ()| {
        // Read, clear, then trim: a blank submission is a silent no-op and
        // the input always empties on submit.
        let raw = state.search_query.peek().clone();
        state.search_query.set(String::new());
        let query = raw.trim().to_string();
        if query.is_empty() {
            return;
        }

        let ticket = state.searches.write().begin();
        state.search_phase.set(SearchPhase::Searching {
            query: query.clone(),
        });

        let movies_api = movies_api.clone();
        spawn(async move {
            let result = movies_api.search(&query).await;
            // A newer search owns the region now; drop this response.
            if !state.searches.peek().is_current(ticket) {
                return;
            }
            match result {
                Ok(movies) => state.search_phase.set(SearchPhase::Results(movies)),
                Err(err) => state.search_phase.set(SearchPhase::Failed(err.to_string())),
            }
        });
    };

    let on_select = move |movie: MovieRef| {
        let Some(id) = movie.external_id().map(str::to_string) else {
            warn!("Search result without an external id");
            return;
        };
        state.current_movie.set(Some(movie));
        state.nav.write().activate(Page::Movie, false);
        navigator().push(Route::Movie { id });
    };

    let query = state.search_query.read().clone();
    let phase = state.search_phase.read().clone();

    rsx! {
        PageContainer {
            SearchView {
                query,
                on_query_change: move |value: String| state.search_query.set(value),
                on_submit,
                phase,
                on_select,
            }
        }
    }
}
