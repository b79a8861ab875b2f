use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::listing::{Category, Listable};

/// Who can see an event and join it without an invitation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

impl From<Visibility> for Category {
    fn from(visibility: Visibility) -> Self {
        match visibility {
            Visibility::Public => Category::Public,
            Visibility::Private => Category::Private,
        }
    }
}

/// An event users can be invited to or request to join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    pub organizer_id: Uuid,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Creates a new public event.
    pub fn new(
        title: impl Into<String>,
        organizer_id: Uuid,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            location: None,
            visibility: Visibility::Public,
            organizer_id,
            starts_at,
            ends_at,
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Sets a specific ID for this event (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub fn duration(&self) -> Duration {
        self.ends_at - self.starts_at
    }
}

impl Listable for Event {
    fn search_field(&self) -> &str {
        &self.title
    }

    fn category(&self) -> Category {
        self.visibility.into()
    }

    fn sort_date(&self) -> Option<DateTime<Utc>> {
        Some(self.starts_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_event_builder() {
        let organizer = Uuid::new_v4();
        let event = Event::new("Picnic", organizer, at(10), at(14))
            .with_description("Bring snacks")
            .with_location("Riverside Park")
            .with_visibility(Visibility::Private);

        assert_eq!(event.title, "Picnic");
        assert_eq!(event.organizer_id, organizer);
        assert_eq!(event.location, Some("Riverside Park".to_string()));
        assert!(!event.is_public());
        assert_eq!(event.duration(), Duration::hours(4));
    }

    #[test]
    fn test_event_listable() {
        let event = Event::new("Picnic", Uuid::new_v4(), at(10), at(14));

        assert_eq!(event.search_field(), "Picnic");
        assert_eq!(event.category(), Category::Public);
        assert_eq!(event.sort_date(), Some(at(10)));
    }

    #[test]
    fn test_event_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "title": "Standup",
            "organizer_id": "00000000-0000-0000-0000-000000000002",
            "starts_at": "2024-05-10T09:00:00Z",
            "ends_at": "2024-05-10T09:15:00Z",
            "created_at": "2024-05-01T00:00:00Z"
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.title, "Standup");
        assert_eq!(event.visibility, Visibility::Public);
        assert!(event.description.is_none());
    }
}
