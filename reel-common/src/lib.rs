mod detail;
mod favorites;
mod movie;
mod nav;
mod search;

pub use detail::{DetailPhase, MovieDetail};
pub use favorites::{Favorite, FavoriteButton, FavoriteMovies};
pub use movie::MovieRef;
pub use nav::{NavEffect, Page, PageNav};
pub use search::{SearchPhase, SearchSequence};
