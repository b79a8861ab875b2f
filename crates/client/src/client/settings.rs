//! System settings API operations.

use super::EventhubClient;
use crate::error::Result;
use eventhub_core::models::{SystemSettings, UpdateSettingsRequest};

impl EventhubClient {
    /// Get the system-wide settings.
    pub async fn get_settings(&self) -> Result<SystemSettings> {
        let response = self.get("/api/admin/settings").send().await?;
        self.handle_response(response).await
    }

    /// Update the system-wide settings.
    pub async fn update_settings(&self, req: &UpdateSettingsRequest) -> Result<SystemSettings> {
        let response = self
            .put("/api/admin/settings")
            .json(req)
            .send()
            .await?;
        let settings = self.handle_response(response).await?;
        tracing::info!("system settings updated");
        Ok(settings)
    }
}
