use crate::MovieRef;

/// What the search results region is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// Nothing submitted yet, or the state was reset.
    #[default]
    Idle,
    /// A request is in flight; the region shows the searching placeholder.
    Searching { query: String },
    /// Results arrived. An empty list renders an empty region.
    Results(Vec<MovieRef>),
    /// The request failed; the region shows the error text.
    Failed(String),
}

impl SearchPhase {
    /// Placeholder text shown as soon as a query is submitted.
    pub fn searching_text(query: &str) -> String {
        format!("Searching for “{query}”...")
    }
}

/// Hands out tickets for submitted searches so that only the latest request
/// may update the results region.
///
/// Responses racing out of order would otherwise let an older search
/// overwrite a newer one's results. Stale tickets are dropped on the error
/// path too.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchSequence {
    issued: u64,
}

impl SearchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new search, invalidating all earlier tickets.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Whether the ticket still belongs to the newest search.
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_searching_text_quotes_query() {
        assert_eq!(
            SearchPhase::searching_text("the matrix"),
            "Searching for “the matrix”..."
        );
    }

    #[test]
    fn test_first_ticket_is_current() {
        let mut seq = SearchSequence::new();
        let ticket = seq.begin();
        assert!(seq.is_current(ticket));
    }

    #[test]
    fn test_newer_search_invalidates_older_ticket() {
        let mut seq = SearchSequence::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_tickets_increase() {
        let mut seq = SearchSequence::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(second > first);
    }
}
