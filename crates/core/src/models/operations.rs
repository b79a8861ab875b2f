use chrono::{DateTime, Utc};

use super::error::{EventError, PostError, ReminderError};
use super::event::Event;
use super::join_request::JoinRequest;

const MAX_TITLE_LEN: usize = 200;
const MAX_POST_LEN: usize = 5000;

/// Validates event fields before creation or update.
pub fn validate_event(
    title: &str,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
) -> Result<(), EventError> {
    if title.trim().is_empty() {
        return Err(EventError::EmptyTitle);
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(EventError::TitleTooLong);
    }
    if ends_at <= starts_at {
        return Err(EventError::InvalidTimeRange);
    }
    Ok(())
}

/// Validates a forum post body.
pub fn validate_post(body: &str) -> Result<(), PostError> {
    if body.trim().is_empty() {
        return Err(PostError::EmptyBody);
    }
    if body.chars().count() > MAX_POST_LEN {
        return Err(PostError::BodyTooLong);
    }
    Ok(())
}

/// Validates that a reminder fires no later than the event starts.
pub fn validate_reminder(remind_at: DateTime<Utc>, event: &Event) -> Result<(), ReminderError> {
    if remind_at > event.starts_at {
        return Err(ReminderError::AfterEventStart);
    }
    Ok(())
}

/// Join requests still waiting for an organizer decision.
pub fn pending_join_requests(requests: &[JoinRequest]) -> Vec<&JoinRequest> {
    requests.iter().filter(|r| r.is_pending()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JoinRequestStatus;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 4, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_validate_event_success() {
        assert!(validate_event("Fireworks", at(20), at(22)).is_ok());
    }

    #[test]
    fn test_validate_event_empty_title() {
        assert_eq!(
            validate_event("   ", at(20), at(22)),
            Err(EventError::EmptyTitle)
        );
    }

    #[test]
    fn test_validate_event_title_too_long() {
        let title = "x".repeat(201);
        assert_eq!(
            validate_event(&title, at(20), at(22)),
            Err(EventError::TitleTooLong)
        );
    }

    #[test]
    fn test_validate_event_time_range() {
        assert_eq!(
            validate_event("Fireworks", at(22), at(20)),
            Err(EventError::InvalidTimeRange)
        );
        assert_eq!(
            validate_event("Fireworks", at(22), at(22)),
            Err(EventError::InvalidTimeRange)
        );
    }

    #[test]
    fn test_validate_post() {
        assert!(validate_post("See you there!").is_ok());
        assert_eq!(validate_post(""), Err(PostError::EmptyBody));
        assert_eq!(
            validate_post(&"y".repeat(5001)),
            Err(PostError::BodyTooLong)
        );
    }

    #[test]
    fn test_validate_reminder() {
        let event = Event::new("Fireworks", Uuid::new_v4(), at(20), at(22));

        assert!(validate_reminder(at(19), &event).is_ok());
        assert!(validate_reminder(at(20), &event).is_ok());
        assert_eq!(
            validate_reminder(at(21), &event),
            Err(ReminderError::AfterEventStart)
        );
    }

    #[test]
    fn test_pending_join_requests() {
        let make = |status| JoinRequest {
            id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            user_name: "Lin".to_string(),
            user_email: "lin@example.com".to_string(),
            message: None,
            status,
            requested_at: at(8),
        };
        let requests = vec![
            make(JoinRequestStatus::Pending),
            make(JoinRequestStatus::Approved),
            make(JoinRequestStatus::Pending),
        ];

        assert_eq!(pending_join_requests(&requests).len(), 2);
    }
}
