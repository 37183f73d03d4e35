use crate::api::{FavoritesClient, MovieDbClient};
use crate::config::AppConfig;
use crate::state::use_app_state_provider;
use crate::Route;
use dioxus::prelude::*;
use reel_common::{NavEffect, Page};
use reel_ui::{AppLayoutView, NavBarView, NavItem};
use tracing::warn;

/// Shared HTTP clients, built once from the config.
#[derive(Clone)]
pub struct ApiContext {
    pub movies: MovieDbClient,
    pub favorites: FavoritesClient,
}

/// Route for a nav or back target. The movie page is only ever reached
/// with a concrete id, so it never appears as a target here.
pub(crate) fn page_route(page: Page) -> Route {
    match page {
        Page::Home | Page::Movie => Route::Home {},
        Page::Favorites => Route::Favorites {},
    }
}

#[component]
pub fn AppLayout() -> Element {
    let config = use_context_provider(AppConfig::default);
    let api = use_context_provider(|| ApiContext {
        movies: MovieDbClient::new(config.movie_api_url.clone()),
        favorites: FavoritesClient::new(config.favorites_url.clone()),
    });
    let mut state = use_app_state_provider();

    // One favorites load at startup; add responses keep the copy fresh
    // afterwards. No inline alert on failure, the region just stays blank.
    use_effect({
        let favorites_api = api.favorites.clone();
        move || {
            let favorites_api = favorites_api.clone();
            spawn(async move {
                match favorites_api.list().await {
                    Ok(entries) => {
                        state.favorites.write().replace(entries);
                        state.favorites_loaded.set(true);
                    }
                    Err(e) => warn!("Failed to load favorites: {}", e),
                }
            });
        }
    });

    let page = use_route::<Route>().page();
    let nav_items = vec![
        NavItem {
            page: Page::Home,
            label: "Home".to_string(),
            is_active: page == Page::Home,
        },
        NavItem {
            page: Page::Favorites,
            label: "Favorites".to_string(),
            is_active: page == Page::Favorites,
        },
    ];

    rsx! {
        AppLayoutView {
            nav_bar: rsx! {
                NavBarView {
                    nav_items,
                    on_nav_click: move |target: Page| {
                        let effect = state.nav.write().activate(target, true);
                        if effect == NavEffect::ClearSearch {
                            state.clear_search();
                        }
                        navigator().push(page_route(target));
                    },
                }
            },
            Outlet::<Route> {}
        }
    }
}
