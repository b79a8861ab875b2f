//! Health check operations.

use super::EventhubClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// API health status.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiHealth {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
}

impl EventhubClient {
    /// Check API health.
    pub async fn health(&self) -> Result<ApiHealth> {
        let response = self.get("/health").send().await?;
        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::{test_server, EventhubClient};
    use axum::routing::get;
    use axum::{Json, Router};

    #[tokio::test]
    async fn test_health_decodes_with_and_without_version() {
        let router = Router::new()
            .route(
                "/health",
                get(|| async { Json(serde_json::json!({ "status": "ok", "version": "1.4.0" })) }),
            );
        let client = EventhubClient::new(test_server::spawn(router).await);

        let health = client.health().await.unwrap();

        assert_eq!(health.status, "ok");
        assert_eq!(health.version.as_deref(), Some("1.4.0"));

        let health: super::ApiHealth = serde_json::from_str(r#"{"status":"degraded"}"#).unwrap();
        assert!(health.version.is_none());
    }
}
