mod favorites;
mod home;
mod layout;
mod movie;

pub use favorites::Favorites;
pub use home::Home;
pub use layout::AppLayout;
pub use movie::Movie;

pub(crate) use layout::{page_route, ApiContext};
