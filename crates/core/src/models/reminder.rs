use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::listing::Listable;

/// A user-scheduled reminder for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub remind_at: DateTime<Utc>,
    #[serde(default)]
    pub note: Option<String>,
}

impl Reminder {
    /// Returns true if the reminder should have fired by `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.remind_at <= now
    }
}

impl Listable for Reminder {
    const CATEGORIZED: bool = false;

    fn search_field(&self) -> &str {
        self.note.as_deref().unwrap_or_default()
    }

    fn sort_date(&self) -> Option<DateTime<Utc>> {
        Some(self.remind_at)
    }
}
