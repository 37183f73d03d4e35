use crate::MovieRef;

/// What the movie page's message and detail regions are showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailPhase {
    /// Request in flight; the message region shows the loading text.
    #[default]
    Loading,
    /// Request failed; the message region shows the error text and the
    /// detail region stays hidden.
    Failed(String),
    /// Detail arrived; the message is cleared and the field grid revealed.
    Ready(MovieDetail),
}

/// Flat attribute map parsed from the movie database's detail endpoint.
///
/// Field names follow the endpoint's JSON keys. Lookups never fail: a
/// missing attribute reads as the empty string, so templates render blanks
/// instead of placeholder text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MovieDetail {
    fields: Vec<(String, String)>,
}

impl MovieDetail {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        MovieDetail { fields }
    }

    /// Attribute value by field name, or "" when the response lacks it.
    pub fn field(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    /// Rebuild a movie reference from the detail attributes.
    ///
    /// Covers reaching a movie page without a prior selection (a pasted
    /// URL): Title, Year and imdbID come back out of the response.
    pub fn to_movie_ref(&self) -> MovieRef {
        MovieRef {
            name: None,
            title: self.opt_field("Title"),
            year: self.opt_field("Year"),
            imdb_id: self.opt_field("imdbID"),
            oid: None,
        }
    }

    fn opt_field(&self, name: &str) -> Option<String> {
        let value = self.field(name);
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MovieDetail {
        MovieDetail::new(vec![
            ("Title".to_string(), "Foo".to_string()),
            ("Year".to_string(), "1999".to_string()),
            ("imdbID".to_string(), "tt0000001".to_string()),
            ("Director".to_string(), "Someone".to_string()),
        ])
    }

    #[test]
    fn test_field_present() {
        assert_eq!(sample().field("Director"), "Someone");
    }

    #[test]
    fn test_field_missing_reads_empty() {
        assert_eq!(sample().field("Plot"), "");
    }

    #[test]
    fn test_to_movie_ref_pulls_identity_fields() {
        let movie = sample().to_movie_ref();
        assert_eq!(movie.title_text(), "Foo (1999)");
        assert_eq!(movie.external_id(), Some("tt0000001"));
        assert_eq!(movie.name, None);
        assert_eq!(movie.oid, None);
    }

    #[test]
    fn test_to_movie_ref_skips_empty_fields() {
        let detail = MovieDetail::new(vec![("Title".to_string(), "Foo".to_string())]);
        let movie = detail.to_movie_ref();
        assert_eq!(movie.title, Some("Foo".to_string()));
        assert_eq!(movie.year, None);
        assert_eq!(movie.imdb_id, None);
    }
}
