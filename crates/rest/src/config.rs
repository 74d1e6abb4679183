//! Server configuration for the advocate API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ADVOCATE_SERVER_PORT` | 8080 | Server port |
//! | `ADVOCATE_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `ADVOCATE_LOG_LEVEL` | info | Log level |
//! | `ADVOCATE_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `ADVOCATE_ENABLE_CORS` | true | Enable CORS |
//! | `ADVOCATE_CORS_ORIGINS` | * | Allowed origins |
//! | `ADVOCATE_CORS_METHODS` | GET,OPTIONS | Allowed methods |
//! | `ADVOCATE_CORS_HEADERS` | Content-Type,Accept | Allowed headers |
//! | `ADVOCATE_DATABASE_URL` | advocates.db | SQLite path, or `:memory:` |
//! | `ADVOCATE_DEFAULT_PAGE_SIZE` | 10 | Page size when none is given |
//! | `ADVOCATE_MAX_PAGE_SIZE` | 50 | Upper bound on any page size |
//! | `ADVOCATE_SORT_ORDER` | id | Result order (`id` or `name`) |
//!
//! # Example
//!
//! ```rust
//! use advocate_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! assert_eq!(config.socket_addr(), "0.0.0.0:3000");
//! ```

use advocate_persistence::types::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageLimits, SortOrder};
use clap::{ArgAction, Parser};

/// Server configuration for the advocate API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "advocate-server")]
#[command(about = "Advocate directory search API")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "ADVOCATE_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "ADVOCATE_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "ADVOCATE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "ADVOCATE_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "ADVOCATE_ENABLE_CORS", default_value = "true", action = ArgAction::Set)]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "ADVOCATE_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "ADVOCATE_CORS_METHODS", default_value = "GET,OPTIONS")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "ADVOCATE_CORS_HEADERS", default_value = "Content-Type,Accept")]
    pub cors_headers: String,

    /// SQLite database path, or `:memory:`.
    #[arg(long, env = "ADVOCATE_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Page size used when a request gives none or an invalid one.
    #[arg(long, env = "ADVOCATE_DEFAULT_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub default_page_size: u32,

    /// Upper bound applied to every page size.
    #[arg(long, env = "ADVOCATE_MAX_PAGE_SIZE", default_value_t = MAX_PAGE_SIZE)]
    pub max_page_size: u32,

    /// Order of results (`id` or `name`).
    #[arg(long, env = "ADVOCATE_SORT_ORDER", default_value = "id")]
    pub sort_order: SortOrder,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,OPTIONS".to_string(),
            cors_headers: "Content-Type,Accept".to_string(),
            database_url: None,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            sort_order: SortOrder::Id,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse_from(["advocate-server"]).unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the page size bounds applied to requests.
    pub fn page_limits(&self) -> PageLimits {
        PageLimits::new(self.default_page_size, self.max_page_size)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.default_page_size == 0 {
            errors.push("Default page size cannot be 0".to_string());
        }

        if self.max_page_size == 0 {
            errors.push("Max page size cannot be 0".to_string());
        }

        if self.default_page_size > self.max_page_size {
            errors.push("Default page size cannot exceed max page size".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0, an in-memory database and no CORS.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            database_url: Some(":memory:".to_string()),
            ..Default::default()
        }
    }
}
