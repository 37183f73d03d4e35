//! App-wide state
//!
//! One explicit state object assembled by the layout and provided through
//! context. Pages and handlers read and write the signals; views stay pure
//! and get plain props.

use dioxus::prelude::*;
use reel_common::{FavoriteMovies, MovieRef, PageNav, SearchPhase, SearchSequence};

/// The app's mutable state. Each concern sits in its own signal so views
/// subscribe narrowly.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Movie whose detail page is (or was last) open.
    pub current_movie: Signal<Option<MovieRef>>,
    /// Client-side copy of the favorites list.
    pub favorites: Signal<FavoriteMovies>,
    /// Whether the first favorites load has completed.
    pub favorites_loaded: Signal<bool>,
    /// Search input contents.
    pub search_query: Signal<String>,
    /// What the results region shows.
    pub search_phase: Signal<SearchPhase>,
    /// Ticket counter deciding which search response may render.
    pub searches: Signal<SearchSequence>,
    /// Active page plus the movie page's back target.
    pub nav: Signal<PageNav>,
}

impl AppState {
    /// Clear the search input and results.
    pub fn clear_search(&mut self) {
        self.search_query.set(String::new());
        self.search_phase.set(SearchPhase::Idle);
    }
}

/// Hook that creates the state and provides it through context. Called once
/// from the layout; everything below it uses [`use_app_state`].
pub fn use_app_state_provider() -> AppState {
    let state = AppState {
        current_movie: use_signal(|| None),
        favorites: use_signal(FavoriteMovies::new),
        favorites_loaded: use_signal(|| false),
        search_query: use_signal(String::new),
        search_phase: use_signal(|| SearchPhase::Idle),
        searches: use_signal(SearchSequence::new),
        nav: use_signal(PageNav::new),
    };
    use_context_provider(|| state)
}

/// Hook to access the app state
pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}
