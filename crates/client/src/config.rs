use std::{env, time::Duration};

use eventhub_core::listing::DEFAULT_PAGE_SIZE;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL (default: "http://localhost:3000")
    pub base_url: String,
    /// Bearer token sent with every request, if any.
    pub token: Option<String>,
    /// Items per page for list views (default: 10)
    pub page_size: usize,
    /// Request timeout in seconds (default: 30)
    pub timeout_seconds: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EVENTHUB_URL` - API base URL (default: "http://localhost:3000")
    /// - `EVENTHUB_TOKEN` - Session token (default: none)
    /// - `EVENTHUB_PAGE_SIZE` - Items per page (default: 10)
    /// - `EVENTHUB_TIMEOUT_SECONDS` - Request timeout (default: 30)
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("EVENTHUB_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            token: env::var("EVENTHUB_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
            page_size: env::var("EVENTHUB_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE),
            timeout_seconds: env::var("EVENTHUB_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Get request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
