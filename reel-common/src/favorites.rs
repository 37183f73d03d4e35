use crate::MovieRef;

/// A user-saved movie as the favorites endpoint stores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    /// Display title shown in lists.
    pub name: String,
    /// External movie id the entry was saved under.
    pub oid: String,
}

/// Client-side copy of the favorites list.
///
/// The backend owns the canonical list; this copy is only ever overwritten
/// wholesale by the latest server response, never mutated entry by entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FavoriteMovies {
    entries: Vec<Favorite>,
}

impl FavoriteMovies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with the latest server response.
    pub fn replace(&mut self, entries: Vec<Favorite>) {
        self.entries = entries;
    }

    pub fn entries(&self) -> &[Favorite] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether some entry was saved under the given external id.
    pub fn contains(&self, external_id: &str) -> bool {
        self.entries.iter().any(|entry| entry.oid == external_id)
    }

    /// The entry saved under the given external id, if any.
    pub fn find(&self, external_id: &str) -> Option<&Favorite> {
        self.entries.iter().find(|entry| entry.oid == external_id)
    }

    /// Whether the given movie is already on the list. False when the movie
    /// has no external id to join on, and always false on the empty list.
    pub fn is_favorited(&self, movie: &MovieRef) -> bool {
        match movie.external_id() {
            Some(id) => self.contains(id),
            None => false,
        }
    }
}

/// What the favorite button on the movie page should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteButton {
    /// The current movie is already on the list; affirmative and disabled.
    Favorited,
    /// The current movie can be added; actionable and enabled.
    AddToFavorite,
}

impl FavoriteButton {
    /// Derive the button state from the current selection and the list.
    ///
    /// Recomputed whenever either side changes. Without a selection the
    /// button stays actionable; the add flow separately ignores clicks
    /// when there is nothing identifiable to save.
    pub fn derive(current: Option<&MovieRef>, favorites: &FavoriteMovies) -> Self {
        match current {
            Some(movie) if favorites.is_favorited(movie) => FavoriteButton::Favorited,
            _ => FavoriteButton::AddToFavorite,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FavoriteButton::Favorited => "Favorited",
            FavoriteButton::AddToFavorite => "Add to Favorite",
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, FavoriteButton::AddToFavorite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favorite(name: &str, oid: &str) -> Favorite {
        Favorite {
            name: name.to_string(),
            oid: oid.to_string(),
        }
    }

    fn movie_with_id(id: &str) -> MovieRef {
        MovieRef {
            imdb_id: Some(id.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_replace_overwrites_wholesale() {
        let mut list = FavoriteMovies::new();
        list.replace(vec![favorite("A", "1"), favorite("B", "2")]);
        list.replace(vec![favorite("C", "3")]);
        assert_eq!(list.entries().len(), 1);
        assert!(list.contains("3"));
        assert!(!list.contains("1"));
    }

    #[test]
    fn test_is_favorited_matches_external_id() {
        let mut list = FavoriteMovies::new();
        list.replace(vec![favorite("A", "1")]);
        assert!(list.is_favorited(&movie_with_id("1")));
        assert!(!list.is_favorited(&movie_with_id("2")));
    }

    #[test]
    fn test_is_favorited_empty_list() {
        let list = FavoriteMovies::new();
        assert!(!list.is_favorited(&movie_with_id("1")));
    }

    #[test]
    fn test_is_favorited_without_external_id() {
        let mut list = FavoriteMovies::new();
        list.replace(vec![favorite("A", "1")]);
        let movie = MovieRef {
            name: Some("A".to_string()),
            ..Default::default()
        };
        assert!(!list.is_favorited(&movie));
    }

    #[test]
    fn test_is_favorited_joins_on_oid_first() {
        let mut list = FavoriteMovies::new();
        list.replace(vec![favorite("A", "1")]);
        let movie = MovieRef {
            imdb_id: Some("1".to_string()),
            oid: Some("9".to_string()),
            ..Default::default()
        };
        // The favorite-side id "9" is the join key, and it is not listed.
        assert!(!list.is_favorited(&movie));
    }

    #[test]
    fn test_find_returns_saved_entry() {
        let mut list = FavoriteMovies::new();
        list.replace(vec![favorite("A", "1"), favorite("B", "2")]);
        assert_eq!(list.find("2"), Some(&favorite("B", "2")));
        assert_eq!(list.find("3"), None);
    }

    #[test]
    fn test_button_disabled_once_listed() {
        let mut list = FavoriteMovies::new();
        list.replace(vec![favorite("A", "1")]);

        let listed = movie_with_id("1");
        let button = FavoriteButton::derive(Some(&listed), &list);
        assert_eq!(button, FavoriteButton::Favorited);
        assert_eq!(button.label(), "Favorited");
        assert!(!button.is_enabled());

        let unlisted = movie_with_id("2");
        let button = FavoriteButton::derive(Some(&unlisted), &list);
        assert_eq!(button, FavoriteButton::AddToFavorite);
        assert_eq!(button.label(), "Add to Favorite");
        assert!(button.is_enabled());
    }

    #[test]
    fn test_button_without_selection_stays_actionable() {
        let list = FavoriteMovies::new();
        let button = FavoriteButton::derive(None, &list);
        assert_eq!(button, FavoriteButton::AddToFavorite);
        assert!(button.is_enabled());
    }

    #[test]
    fn test_empty_list_shows_placeholder_and_actionable_button() {
        let mut list = FavoriteMovies::new();
        list.replace(vec![]);
        assert!(list.is_empty());
        let opened = movie_with_id("1");
        assert!(FavoriteButton::derive(Some(&opened), &list).is_enabled());
    }
}
