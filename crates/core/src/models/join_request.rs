use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::listing::{Category, Listable};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinRequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl JoinRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinRequestStatus::Pending => "pending",
            JoinRequestStatus::Approved => "approved",
            JoinRequestStatus::Rejected => "rejected",
        }
    }
}

/// A user's request to join an event, reviewed by its organizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRequest {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_email: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: JoinRequestStatus,
    pub requested_at: DateTime<Utc>,
}

impl JoinRequest {
    pub fn is_pending(&self) -> bool {
        self.status == JoinRequestStatus::Pending
    }
}

impl Listable for JoinRequest {
    fn search_field(&self) -> &str {
        &self.user_name
    }

    fn category(&self) -> Category {
        Category::custom(self.status.as_str())
    }

    fn sort_date(&self) -> Option<DateTime<Utc>> {
        Some(self.requested_at)
    }
}
