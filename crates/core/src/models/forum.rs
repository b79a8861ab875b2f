use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::listing::Listable;

/// A message in an event's discussion forum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: Uuid,
    pub event_id: Uuid,
    pub author_id: Uuid,
    pub author_name: String,
    pub body: String,
    pub posted_at: DateTime<Utc>,
}

impl Listable for ForumPost {
    const CATEGORIZED: bool = false;

    fn search_field(&self) -> &str {
        &self.body
    }

    fn sort_date(&self) -> Option<DateTime<Utc>> {
        Some(self.posted_at)
    }
}
