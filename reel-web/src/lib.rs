pub mod api;
pub mod config;
pub mod pages;
pub mod state;

use dioxus::prelude::*;
use pages::{AppLayout, Favorites, Home, Movie};
use reel_common::Page;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/favorites")]
    Favorites {},
    #[route("/movie/:id")]
    Movie { id: String },
}

impl Route {
    /// Page a route shows; drives nav highlighting.
    pub fn page(&self) -> Page {
        match self {
            Route::Home {} => Page::Home,
            Route::Favorites {} => Page::Favorites,
            Route::Movie { .. } => Page::Movie,
        }
    }
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
