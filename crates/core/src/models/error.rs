use thiserror::Error;

/// Errors that can occur when validating an event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event title too long (max 200 characters)")]
    TitleTooLong,
    #[error("Event must end after it starts")]
    InvalidTimeRange,
}

/// Errors that can occur when validating a forum post.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PostError {
    #[error("Post body cannot be empty")]
    EmptyBody,
    #[error("Post body too long (max 5000 characters)")]
    BodyTooLong,
}

/// Errors that can occur when validating a reminder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReminderError {
    #[error("Reminder must fire before the event starts")]
    AfterEventStart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_error_display() {
        assert_eq!(
            EventError::EmptyTitle.to_string(),
            "Event title cannot be empty"
        );
        assert_eq!(
            EventError::InvalidTimeRange.to_string(),
            "Event must end after it starts"
        );
    }

    #[test]
    fn test_post_error_display() {
        assert_eq!(PostError::EmptyBody.to_string(), "Post body cannot be empty");
    }
}
