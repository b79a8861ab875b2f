//! Join request API operations.

use super::EventhubClient;
use crate::error::Result;
use eventhub_core::models::{JoinEventRequest, JoinRequest, ReviewDecision};
use uuid::Uuid;

impl EventhubClient {
    /// List join requests for an event.
    pub async fn list_join_requests(&self, event_id: Uuid) -> Result<Vec<JoinRequest>> {
        let response = self
            .get(&format!("/api/events/{}/join-requests", event_id))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Ask to join an event.
    pub async fn request_to_join(
        &self,
        event_id: Uuid,
        message: Option<String>,
    ) -> Result<JoinRequest> {
        let response = self
            .post(&format!("/api/events/{}/join-requests", event_id))
            .json(&JoinEventRequest { message })
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Approve or reject a join request.
    pub async fn review_join_request(
        &self,
        id: Uuid,
        decision: ReviewDecision,
    ) -> Result<JoinRequest> {
        let response = self
            .put(&format!("/api/join-requests/{}", id))
            .json(&serde_json::json!({ "decision": decision }))
            .send()
            .await?;
        let request = self.handle_response(response).await?;
        tracing::info!(join_request_id = %id, ?decision, "join request reviewed");
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::{test_server, EventhubClient};
    use axum::extract::Path;
    use axum::routing::put;
    use axum::{Json, Router};
    use chrono::Utc;
    use eventhub_core::models::{JoinRequest, JoinRequestStatus, ReviewDecision};
    use serde_json::Value;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_review_join_request() {
        let router = Router::new().route(
            "/api/join-requests/{id}",
            put(|Path(id): Path<Uuid>, Json(body): Json<Value>| async move {
                let decision: ReviewDecision =
                    serde_json::from_value(body["decision"].clone()).unwrap();
                Json(JoinRequest {
                    id,
                    event_id: Uuid::nil(),
                    user_id: Uuid::nil(),
                    user_name: "Ravi".to_string(),
                    user_email: "ravi@example.com".to_string(),
                    message: None,
                    status: decision.resulting_status(),
                    requested_at: Utc::now(),
                })
            }),
        );
        let client = EventhubClient::new(test_server::spawn(router).await);
        let id = Uuid::new_v4();

        let reviewed = client
            .review_join_request(id, ReviewDecision::Approve)
            .await
            .unwrap();

        assert_eq!(reviewed.id, id);
        assert_eq!(reviewed.status, JoinRequestStatus::Approved);
    }
}
