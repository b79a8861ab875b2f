//! Event forum API operations.

use super::EventhubClient;
use crate::error::Result;
use eventhub_core::models::{CreatePostRequest, ForumPost};
use uuid::Uuid;

impl EventhubClient {
    /// List forum posts for an event.
    pub async fn list_posts(&self, event_id: Uuid) -> Result<Vec<ForumPost>> {
        let response = self
            .get(&format!("/api/events/{}/posts", event_id))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Post a message in an event's forum.
    pub async fn create_post(&self, event_id: Uuid, body: &str) -> Result<ForumPost> {
        let response = self
            .post(&format!("/api/events/{}/posts", event_id))
            .json(&CreatePostRequest {
                body: body.to_string(),
            })
            .send()
            .await?;
        self.handle_response(response).await
    }
}
