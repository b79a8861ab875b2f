use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::listing::{Category, Listable};

/// A notification delivered to a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub event_id: Option<Uuid>,
}

impl Listable for Notification {
    fn search_field(&self) -> &str {
        &self.message
    }

    fn category(&self) -> Category {
        Category::custom(if self.read { "read" } else { "unread" })
    }

    fn sort_date(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_category() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "user_id": "00000000-0000-0000-0000-000000000002",
            "message": "You were invited to Launch party",
            "created_at": "2024-05-01T08:00:00Z"
        }"#;

        let notification: Notification = serde_json::from_str(json).unwrap();

        assert!(!notification.read);
        assert_eq!(notification.category(), Category::custom("unread"));
        assert!(notification.event_id.is_none());
    }
}
