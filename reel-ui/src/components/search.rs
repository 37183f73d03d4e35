//! Search view component - pure rendering, no data fetching

use crate::components::helpers::ErrorAlert;
use crate::components::{Button, ButtonVariant, MovieListView, TextInput};
use dioxus::prelude::*;
use reel_common::{MovieRef, SearchPhase};

/// Search view (pure, props-based)
///
/// Renders the query form plus a results region that mirrors `SearchPhase`:
/// nothing, the searching placeholder, result rows, or the error text.
#[component]
pub fn SearchView(
    query: String,
    on_query_change: EventHandler<String>,
    on_submit: EventHandler<()>,
    phase: SearchPhase,
    on_select: EventHandler<MovieRef>,
) -> Element {
    rsx! {
        div { class: "flex flex-col gap-6",
            div { class: "flex gap-2",
                TextInput {
                    value: query,
                    on_input: on_query_change,
                    placeholder: "Search for a movie...",
                    id: Some("search-input".to_string()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            on_submit.call(());
                        }
                    },
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| on_submit.call(()),
                    "Search"
                }
            }
            SearchResults { phase, on_select }
        }
    }
}

/// The region below the form; replaced wholesale on every phase change
#[component]
fn SearchResults(phase: SearchPhase, on_select: EventHandler<MovieRef>) -> Element {
    match phase {
        SearchPhase::Idle => rsx! {
            div {}
        },
        SearchPhase::Searching { query } => {
            let placeholder = SearchPhase::searching_text(&query);
            rsx! {
                p { class: "text-gray-400", "{placeholder}" }
            }
        }
        SearchPhase::Results(movies) => rsx! {
            MovieListView { movies, on_select }
        },
        SearchPhase::Failed(message) => rsx! {
            ErrorAlert { message }
        },
    }
}
