//! HTTP clients for the movie database and the favorites endpoint.
//!
//! Wire shapes stay private here; callers get `reel-common` types back.
//! No retries, no timeouts: one request per call, the caller decides what
//! a failure means for its region of the page.

use reel_common::{Favorite, MovieDetail, MovieRef};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum RequestError {
    /// The server answered with a non-success status.
    #[error("{status} {status_text}")]
    Status { status: u16, status_text: String },
    /// The request never completed (DNS, connection, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The body of a success response was not the expected JSON.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl RequestError {
    fn network(err: reqwest::Error) -> Self {
        RequestError::Network(err.to_string())
    }

    fn decode(err: reqwest::Error) -> Self {
        RequestError::Decode(err.to_string())
    }
}

/// Movie database search response envelope. A response without a result
/// list (no matches) decodes as the empty list.
#[derive(Deserialize)]
struct SearchResponse {
    #[serde(rename = "Search", default)]
    search: Vec<SearchEntry>,
}

#[derive(Deserialize)]
struct SearchEntry {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "imdbID")]
    imdb_id: String,
}

/// Favorites endpoint entry
#[derive(Deserialize)]
struct FavoriteEntry {
    name: String,
    oid: String,
}

impl FavoriteEntry {
    fn into_favorite(self) -> Favorite {
        Favorite {
            name: self.name,
            oid: self.oid,
        }
    }
}

/// Client for the external movie database.
///
/// The base URL is opaque: query parameters are appended to it as-is, so
/// anything the endpoint needs (an API key, say) belongs in the configured
/// value.
#[derive(Clone)]
pub struct MovieDbClient {
    client: Client,
    base_url: String,
}

impl MovieDbClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Search for movies matching a query.
    pub async fn search(&self, query: &str) -> Result<Vec<MovieRef>, RequestError> {
        let url = search_url(&self.base_url, query);
        debug!("GET {}", url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(RequestError::network)?;
        let resp = check_status(resp)?;
        let envelope: SearchResponse = resp.json().await.map_err(RequestError::decode)?;
        Ok(envelope
            .search
            .into_iter()
            .map(|entry| MovieRef::from_search(entry.title, entry.year, entry.imdb_id))
            .collect())
    }

    /// Fetch the full detail object for one movie by external id.
    pub async fn lookup(&self, id: &str) -> Result<MovieDetail, RequestError> {
        let url = lookup_url(&self.base_url, id);
        debug!("GET {}", url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(RequestError::network)?;
        let resp = check_status(resp)?;
        let fields: serde_json::Map<String, serde_json::Value> =
            resp.json().await.map_err(RequestError::decode)?;
        Ok(detail_from_json(fields))
    }
}

/// Client for the favorites endpoint. Both calls return the full updated
/// list; the server owns the canonical copy.
#[derive(Clone)]
pub struct FavoritesClient {
    client: Client,
    base_url: String,
}

impl FavoritesClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch the saved favorites list.
    pub async fn list(&self) -> Result<Vec<Favorite>, RequestError> {
        debug!("GET {}", self.base_url);
        let resp = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(RequestError::network)?;
        let resp = check_status(resp)?;
        let entries: Vec<FavoriteEntry> = resp.json().await.map_err(RequestError::decode)?;
        Ok(entries.into_iter().map(FavoriteEntry::into_favorite).collect())
    }

    /// Save a favorite. The response is the authoritative updated list.
    pub async fn add(&self, name: &str, oid: &str) -> Result<Vec<Favorite>, RequestError> {
        debug!("POST {}", self.base_url);
        let resp = self
            .client
            .post(&self.base_url)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(add_body(name, oid))
            .send()
            .await
            .map_err(RequestError::network)?;
        let resp = check_status(resp)?;
        let entries: Vec<FavoriteEntry> = resp.json().await.map_err(RequestError::decode)?;
        Ok(entries.into_iter().map(FavoriteEntry::into_favorite).collect())
    }
}

/// Search URL: `{base}?s={query}`, query percent-encoded.
fn search_url(base: &str, query: &str) -> String {
    format!("{base}?s={}", urlencoding::encode(query))
}

/// Detail URL keyed by external id: `{base}?i={id}`.
fn lookup_url(base: &str, id: &str) -> String {
    format!("{base}?i={}", urlencoding::encode(id))
}

/// Form body for the add call: `name={name}&oid={oid}`, percent-encoded.
fn add_body(name: &str, oid: &str) -> String {
    format!(
        "name={}&oid={}",
        urlencoding::encode(name),
        urlencoding::encode(oid)
    )
}

fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, RequestError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        warn!("Request failed: {}", status);
        Err(RequestError::Status {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        })
    }
}

fn detail_from_json(fields: serde_json::Map<String, serde_json::Value>) -> MovieDetail {
    let fields = fields
        .into_iter()
        .map(|(name, value)| (name, value_text(value)))
        .collect();
    MovieDetail::new(fields)
}

/// JSON attribute to display text: null reads as "", strings read verbatim,
/// anything else keeps its JSON form.
fn value_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_percent_encodes_query() {
        assert_eq!(
            search_url("https://example.com/", "rocky & bullwinkle"),
            "https://example.com/?s=rocky%20%26%20bullwinkle"
        );
    }

    #[test]
    fn test_lookup_url_percent_encodes_id() {
        assert_eq!(
            lookup_url("https://example.com/", "tt0000001"),
            "https://example.com/?i=tt0000001"
        );
        assert_eq!(lookup_url("/api", "a/b"), "/api?i=a%2Fb");
    }

    #[test]
    fn test_add_body_encodes_fields() {
        assert_eq!(
            add_body("Foo (1999)", "tt0000001"),
            "name=Foo%20%281999%29&oid=tt0000001"
        );
        assert_eq!(add_body("a&b", "1=2"), "name=a%26b&oid=1%3D2");
    }

    #[test]
    fn test_search_envelope_maps_entries() {
        let json = r#"{
            "Search": [
                {"Title": "Foo", "Year": "1999", "imdbID": "tt1"},
                {"Title": "Bar", "imdbID": "tt2"}
            ],
            "totalResults": "2",
            "Response": "True"
        }"#;
        let envelope: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.search.len(), 2);
        assert_eq!(envelope.search[0].title, "Foo");
        assert_eq!(envelope.search[1].year, "");
        assert_eq!(envelope.search[1].imdb_id, "tt2");
    }

    #[test]
    fn test_search_envelope_without_matches_is_empty() {
        let json = r#"{"Response": "False", "Error": "Movie not found!"}"#;
        let envelope: SearchResponse = serde_json::from_str(json).unwrap();
        assert!(envelope.search.is_empty());
    }

    #[test]
    fn test_detail_fields_read_as_text() {
        let json = r#"{
            "Title": "Foo",
            "Year": "1999",
            "Runtime": "100 min",
            "Metascore": null,
            "Ratings": [{"Source": "X", "Value": "9/10"}]
        }"#;
        let fields: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).unwrap();
        let detail = detail_from_json(fields);
        assert_eq!(detail.field("Title"), "Foo");
        assert_eq!(detail.field("Runtime"), "100 min");
        // Null and missing attributes both render blank.
        assert_eq!(detail.field("Metascore"), "");
        assert_eq!(detail.field("Plot"), "");
    }

    #[test]
    fn test_favorite_entries_map() {
        let json = r#"[{"name": "Foo (1999)", "oid": "tt1"}, {"name": "Bar", "oid": "tt2"}]"#;
        let entries: Vec<FavoriteEntry> = serde_json::from_str(json).unwrap();
        let favorites: Vec<Favorite> = entries
            .into_iter()
            .map(FavoriteEntry::into_favorite)
            .collect();
        assert_eq!(favorites.len(), 2);
        assert_eq!(favorites[0].name, "Foo (1999)");
        assert_eq!(favorites[1].oid, "tt2");
    }

    #[test]
    fn test_request_error_display() {
        let err = RequestError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "404 Not Found");

        let err = RequestError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "network error: connection refused");

        let err = RequestError::Decode("expected value at line 1".to_string());
        assert_eq!(err.to_string(), "invalid response: expected value at line 1");
    }
}
