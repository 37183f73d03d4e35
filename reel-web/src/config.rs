//! App configuration

/// Endpoints the app talks to.
///
/// The movie database URL is opaque: whatever the endpoint needs baked in
/// (an API key, say) belongs in the configured value. The favorites
/// endpoint is same-origin by default.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub movie_api_url: String,
    pub favorites_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            movie_api_url: "https://www.omdbapi.com/".to_string(),
            favorites_url: "/favorites".to_string(),
        }
    }
}
