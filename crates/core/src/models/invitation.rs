use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::listing::{Category, Listable};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

impl InvitationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvitationStatus::Pending => "pending",
            InvitationStatus::Accepted => "accepted",
            InvitationStatus::Declined => "declined",
        }
    }
}

/// An invitation from an event organizer to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: Uuid,
    pub event_id: Uuid,
    pub event_title: String,
    pub invitee_id: Option<Uuid>,
    pub invitee_email: String,
    #[serde(default)]
    pub status: InvitationStatus,
    pub sent_at: DateTime<Utc>,
}

impl Invitation {
    pub fn is_pending(&self) -> bool {
        self.status == InvitationStatus::Pending
    }
}

impl Listable for Invitation {
    fn search_field(&self) -> &str {
        &self.invitee_email
    }

    fn category(&self) -> Category {
        Category::custom(self.status.as_str())
    }

    fn sort_date(&self) -> Option<DateTime<Utc>> {
        Some(self.sent_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invitation_status_category() {
        let invitation = Invitation {
            id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            event_title: "Launch party".to_string(),
            invitee_id: None,
            invitee_email: "sam@example.com".to_string(),
            status: InvitationStatus::Declined,
            sent_at: Utc::now(),
        };

        assert!(!invitation.is_pending());
        assert_eq!(invitation.category(), Category::custom("Declined"));
    }

    #[test]
    fn test_invitation_status_serde() {
        assert_eq!(
            serde_json::to_string(&InvitationStatus::Accepted).unwrap(),
            "\"accepted\""
        );
    }
}
