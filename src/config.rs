// config.rs
use std::str::FromStr;

/// The document upload runs while the property row is locked, so this also
/// bounds how long other contract requests for that property wait.
pub const DEFAULT_DOCUMENT_STORE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub log_level: String,
    pub allowed_origins: Vec<String>,
    // Lease document storage
    pub document_store_url: String,
    pub document_base_url: String,
    pub document_store_token: Option<String>,
    pub document_store_timeout_secs: u64,
}

impl Config {
    pub fn init() -> Config {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let document_store_url = std::env::var("DOCUMENT_STORE_URL").expect("DOCUMENT_STORE_URL must be set");
        let document_base_url = std::env::var("DOCUMENT_BASE_URL").expect("DOCUMENT_BASE_URL must be set");

        let document_store_token = std::env::var("DOCUMENT_STORE_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());
        let document_store_timeout_secs = parse_or(
            std::env::var("DOCUMENT_STORE_TIMEOUT_SECS").ok(),
            DEFAULT_DOCUMENT_STORE_TIMEOUT_SECS,
        );

        let database_max_connections = parse_or(std::env::var("DATABASE_MAX_CONNECTIONS").ok(), 10u32);
        let port = parse_or(std::env::var("PORT").ok(), 8000u16);
        let log_level = std::env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "debug".to_string());

        let allowed_origins = parse_origins(
            &std::env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".to_string()),
        );

        Config {
            database_url,
            database_max_connections,
            port,
            log_level,
            allowed_origins,
            document_store_url,
            document_base_url,
            document_store_token,
            document_store_timeout_secs,
        }
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|value| value.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
