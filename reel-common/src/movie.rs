use crate::Favorite;

/// A single client-side movie reference.
///
/// Search results, favorites rows and the currently selected movie all
/// collapse into this shape; each source fills a different subset of the
/// fields, so they are all optional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MovieRef {
    /// Display name stored on a favorite entry.
    pub name: Option<String>,
    /// Title as returned by the movie database.
    pub title: Option<String>,
    /// Release year as returned by the movie database.
    pub year: Option<String>,
    /// Id assigned by the movie database.
    pub imdb_id: Option<String>,
    /// Id a favorite entry was saved under; same key space as `imdb_id`.
    pub oid: Option<String>,
}

impl MovieRef {
    /// Reference to a search result row.
    pub fn from_search(title: String, year: String, imdb_id: String) -> Self {
        MovieRef {
            name: None,
            title: Some(title),
            year: Some(year),
            imdb_id: Some(imdb_id),
            oid: None,
        }
    }

    /// Reference to a saved favorite.
    pub fn from_favorite(favorite: &Favorite) -> Self {
        MovieRef {
            name: Some(favorite.name.clone()),
            oid: Some(favorite.oid.clone()),
            ..Default::default()
        }
    }

    /// Text shown for this movie in lists and in the detail heading.
    ///
    /// A favorite's stored display name wins; otherwise "Title (Year)".
    pub fn title_text(&self) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!(
                "{} ({})",
                self.title.as_deref().unwrap_or(""),
                self.year.as_deref().unwrap_or("")
            ),
        }
    }

    /// Join key against the movie database: a favorite's own id wins over
    /// the search result's id. None when neither is usable.
    pub fn external_id(&self) -> Option<&str> {
        self.oid
            .as_deref()
            .filter(|id| !id.is_empty())
            .or_else(|| self.imdb_id.as_deref().filter(|id| !id.is_empty()))
    }

    /// The entry saving this movie would create, or None when the movie has
    /// no external id. Deciding None means no add request goes out at all.
    pub fn to_favorite(&self) -> Option<Favorite> {
        Some(Favorite {
            name: self.title_text(),
            oid: self.external_id()?.to_string(),
        })
    }
}
