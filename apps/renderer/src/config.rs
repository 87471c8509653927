use anyhow::Result;

use crate::locale::Locale;

/// Application configuration loaded from environment variables.
/// Everything has a default; the renderer runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub locale: Locale,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            locale: Locale::from_tag(
                &std::env::var("CV_LOCALE").unwrap_or_else(|_| "tr".to_string()),
            ),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
