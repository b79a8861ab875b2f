//! Reminder API operations.

use super::EventhubClient;
use crate::error::Result;
use eventhub_core::models::{CreateReminderRequest, Reminder};
use uuid::Uuid;

impl EventhubClient {
    /// List the caller's reminders.
    pub async fn list_reminders(&self) -> Result<Vec<Reminder>> {
        let response = self.get("/api/reminders").send().await?;
        self.handle_response(response).await
    }

    /// Schedule a reminder.
    pub async fn create_reminder(&self, req: &CreateReminderRequest) -> Result<Reminder> {
        let response = self.post("/api/reminders").json(req).send().await?;
        self.handle_response(response).await
    }

    /// Delete reminder by ID.
    pub async fn delete_reminder(&self, id: Uuid) -> Result<()> {
        let response = self
            .delete(&format!("/api/reminders/{}", id))
            .send()
            .await?;
        self.handle_empty_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::{test_server, EventhubClient};
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::routing::{delete, get};
    use axum::{Json, Router};
    use chrono::{TimeZone, Utc};
    use eventhub_core::models::{CreateReminderRequest, Reminder};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_create_reminder_sends_payload() {
        let router = Router::new()
            .route(
                "/api/reminders",
                get(|| async { Json(Vec::<Reminder>::new()) }).post(
                    |Json(req): Json<CreateReminderRequest>| async move {
                        (
                            StatusCode::CREATED,
                            Json(Reminder {
                                id: Uuid::new_v4(),
                                event_id: req.event_id,
                                user_id: Uuid::nil(),
                                remind_at: req.remind_at,
                                note: req.note,
                            }),
                        )
                    },
                ),
            )
            .route(
                "/api/reminders/{id}",
                delete(|Path(_id): Path<Uuid>| async { StatusCode::NO_CONTENT }),
            );
        let client = EventhubClient::new(test_server::spawn(router).await);
        let event_id = Uuid::new_v4();
        let remind_at = Utc.with_ymd_and_hms(2024, 8, 3, 17, 0, 0).unwrap();

        assert!(client.list_reminders().await.unwrap().is_empty());

        let reminder = client
            .create_reminder(&CreateReminderRequest {
                event_id,
                remind_at,
                note: Some("Buy tickets".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(reminder.event_id, event_id);
        assert_eq!(reminder.remind_at, remind_at);
        assert_eq!(reminder.note.as_deref(), Some("Buy tickets"));

        assert!(client.delete_reminder(reminder.id).await.is_ok());
    }
}
