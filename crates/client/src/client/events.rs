//! Event API operations.

use super::EventhubClient;
use crate::error::Result;
use eventhub_core::models::{CreateEventRequest, Event, UpdateEventRequest};
use uuid::Uuid;

impl EventhubClient {
    /// List all events visible to the caller.
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let response = self.get("/api/events").send().await?;
        self.handle_response(response).await
    }

    /// Create a new event.
    pub async fn create_event(&self, req: &CreateEventRequest) -> Result<Event> {
        let response = self.post("/api/events").json(req).send().await?;
        let event: Event = self.handle_response(response).await?;
        tracing::info!(event_id = %event.id, "event created");
        Ok(event)
    }

    /// Get event by ID.
    pub async fn get_event(&self, id: Uuid) -> Result<Event> {
        let response = self.get(&format!("/api/events/{}", id)).send().await?;
        self.handle_response(response).await
    }

    /// Update an event.
    pub async fn update_event(&self, id: Uuid, req: &UpdateEventRequest) -> Result<Event> {
        let response = self
            .put(&format!("/api/events/{}", id))
            .json(req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete event by ID.
    pub async fn delete_event(&self, id: Uuid) -> Result<()> {
        let response = self.delete(&format!("/api/events/{}", id)).send().await?;
        self.handle_empty_response(response).await?;
        tracing::info!(event_id = %id, "event deleted");
        Ok(())
    }
}
