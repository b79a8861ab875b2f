//! Invitation API operations.

use super::EventhubClient;
use crate::error::Result;
use eventhub_core::models::{Invitation, InvitationResponse, InviteRequest};
use uuid::Uuid;

impl EventhubClient {
    /// List invitations addressed to the caller.
    pub async fn list_my_invitations(&self) -> Result<Vec<Invitation>> {
        let response = self.get("/api/invitations").send().await?;
        self.handle_response(response).await
    }

    /// List invitations sent for an event.
    pub async fn list_event_invitations(&self, event_id: Uuid) -> Result<Vec<Invitation>> {
        let response = self
            .get(&format!("/api/events/{}/invitations", event_id))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Invite someone to an event by email.
    pub async fn send_invitation(&self, event_id: Uuid, email: &str) -> Result<Invitation> {
        let response = self
            .post(&format!("/api/events/{}/invitations", event_id))
            .json(&InviteRequest {
                email: email.to_string(),
            })
            .send()
            .await?;
        let invitation = self.handle_response(response).await?;
        tracing::info!(%event_id, "invitation sent");
        Ok(invitation)
    }

    /// Accept or decline an invitation.
    pub async fn respond_to_invitation(
        &self,
        id: Uuid,
        answer: InvitationResponse,
    ) -> Result<Invitation> {
        let response = self
            .put(&format!("/api/invitations/{}", id))
            .json(&serde_json::json!({ "response": answer }))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
