use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub books_api: BooksApiConfig,
    pub views: ViewSettings,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BooksApiConfig {
    pub base_url: String,
    pub max_results: u32,
    pub discovery_query: String,
    /// `None` leaves requests unbounded; a hung search keeps the view loading.
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewSettings {
    pub max_views: usize,
    pub discard_stale_completions: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub allowed_origins: Vec<String>,
}

pub const GOOGLE_BOOKS_API_BASE_URL: &str = "https://www.googleapis.com/books/v1/volumes";

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5733,
                workers: num_cpus::get(),
            },
            books_api: BooksApiConfig::default(),
            views: ViewSettings::default(),
            security: SecurityConfig {
                allowed_origins: vec!["*".to_string()],
            },
        }
    }
}

impl Default for BooksApiConfig {
    fn default() -> Self {
        Self {
            base_url: GOOGLE_BOOKS_API_BASE_URL.to_string(),
            max_results: 10,
            discovery_query: "subject:fiction".to_string(),
            request_timeout_secs: None,
        }
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            max_views: 1024,
            discard_stale_completions: false,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source, starting from defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Server configuration
        if let Some(host) = lookup("HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.server.port = port.parse()?;
        }
        if let Some(workers) = lookup("WORKERS") {
            config.server.workers = workers.parse()?;
        }

        // Books API configuration
        if let Some(base_url) = lookup("BOOKS_API_URL") {
            config.books_api.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(max_results) = lookup("BOOKS_MAX_RESULTS") {
            config.books_api.max_results = max_results.parse()?;
        }
        if let Some(discovery_query) = lookup("DISCOVERY_QUERY") {
            config.books_api.discovery_query = discovery_query;
        }
        if let Some(timeout) = lookup("BOOKS_REQUEST_TIMEOUT_SECS") {
            config.books_api.request_timeout_secs = Some(timeout.parse()?);
        }

        // View configuration
        if let Some(max_views) = lookup("MAX_VIEWS") {
            config.views.max_views = max_views.parse()?;
        }
        if let Some(discard) = lookup("DISCARD_STALE_COMPLETIONS") {
            config.views.discard_stale_completions = discard.parse()?;
        }

        // Security configuration
        if let Some(allowed_origins) = lookup("ALLOWED_ORIGINS") {
            config.security.allowed_origins = allowed_origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        Ok(config)
    }
}
