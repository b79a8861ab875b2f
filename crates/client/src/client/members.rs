//! Event membership API operations.

use super::EventhubClient;
use crate::error::Result;
use eventhub_core::models::Member;
use uuid::Uuid;

impl EventhubClient {
    /// List users who have joined an event.
    pub async fn list_members(&self, event_id: Uuid) -> Result<Vec<Member>> {
        let response = self
            .get(&format!("/api/events/{}/members", event_id))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Remove a member from an event.
    pub async fn remove_member(&self, event_id: Uuid, user_id: Uuid) -> Result<()> {
        let response = self
            .delete(&format!("/api/events/{}/members/{}", event_id, user_id))
            .send()
            .await?;
        self.handle_empty_response(response).await?;
        tracing::info!(%event_id, %user_id, "member removed");
        Ok(())
    }
}
