use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Optional path to a puzzle dataset that replaces the embedded one.
    pub catalog_path: Option<String>,
    /// Public URL of the front end, used in share links.
    pub share_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            catalog_path: env::var("PUZZLE_CATALOG_PATH").ok(),
            share_url: env::var("SHARE_URL")
                .unwrap_or_else(|_| "https://mychesspuzzle.com".to_string()),
        }
    }
}
