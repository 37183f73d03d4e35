//! Shared UI components

pub mod app_layout;
pub mod button;
pub mod favorites;
pub mod helpers;
pub mod movie_detail;
pub mod movie_list;
pub mod navbar;
pub mod search;
pub mod text_input;

pub use app_layout::AppLayoutView;
pub use button::{Button, ButtonVariant, ChromelessButton};
pub use favorites::FavoritesView;
pub use helpers::{BackButton, ErrorAlert, PageContainer};
pub use movie_detail::{MovieDetailView, DETAIL_FIELDS};
pub use movie_list::MovieListView;
pub use navbar::{NavBarView, NavItem};
pub use search::SearchView;
pub use text_input::TextInput;
