use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::listing::Listable;

/// A user who has joined an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub email: String,
    pub joined_at: DateTime<Utc>,
}

impl Listable for Member {
    const CATEGORIZED: bool = false;

    fn search_field(&self) -> &str {
        &self.name
    }

    fn sort_date(&self) -> Option<DateTime<Utc>> {
        Some(self.joined_at)
    }
}
