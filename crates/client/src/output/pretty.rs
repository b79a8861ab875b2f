//! Pretty output formatting.

use chrono::{DateTime, Utc};
use eventhub_core::listing::{PageSlice, PaginationControl};
use eventhub_core::models::{
    Event, ForumPost, Invitation, JoinRequest, Member, Notification, Reminder, SystemSettings,
    User,
};
use eventhub_core::session::SessionContext;

use crate::client::health::ApiHealth;

const TIMESTAMP: &str = "%Y-%m-%d %H:%M UTC";

/// Format an event for display.
pub fn format_event(event: &Event) -> String {
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  Starts: {}\n  Ends: {}",
        event.title,
        event.visibility.as_str(),
        event.id,
        event.starts_at.format(TIMESTAMP),
        event.ends_at.format(TIMESTAMP)
    );
    if let Some(loc) = &event.location {
        output.push_str(&format!("\n  Location: {}", loc));
    }
    if let Some(desc) = &event.description {
        output.push_str(&format!("\n  Description: {}", desc));
    }
    output
}

/// Format a user for display.
pub fn format_user(user: &User) -> String {
    let mut output = format!(
        "{} <{}>\n  ID: {}\n  Role: {}",
        user.name, user.email, user.id, user.role
    );
    if !user.active {
        output.push_str("\n  Status: deactivated");
    }
    output
}

pub fn format_invitation(invitation: &Invitation) -> String {
    format!(
        "{} -> {} [{}]\n  ID: {}\n  Sent: {}",
        invitation.event_title,
        invitation.invitee_email,
        invitation.status.as_str(),
        invitation.id,
        invitation.sent_at.format(TIMESTAMP)
    )
}

pub fn format_join_request(request: &JoinRequest) -> String {
    let mut output = format!(
        "{} <{}> [{}]\n  ID: {}\n  Requested: {}",
        request.user_name,
        request.user_email,
        request.status.as_str(),
        request.id,
        request.requested_at.format(TIMESTAMP)
    );
    if let Some(message) = &request.message {
        output.push_str(&format!("\n  Message: {}", message));
    }
    output
}

pub fn format_member(member: &Member) -> String {
    format!(
        "{} <{}>\n  User ID: {}\n  Joined: {}",
        member.name,
        member.email,
        member.user_id,
        member.joined_at.format(TIMESTAMP)
    )
}

pub fn format_post(post: &ForumPost) -> String {
    format!(
        "{} ({})\n  {}",
        post.author_name,
        post.posted_at.format(TIMESTAMP),
        post.body
    )
}

pub fn format_notification(notification: &Notification) -> String {
    let marker = if notification.read { " " } else { "*" };
    format!(
        "{} {} ({})\n  ID: {}",
        marker,
        notification.message,
        notification.created_at.format(TIMESTAMP),
        notification.id
    )
}

pub fn format_reminder(reminder: &Reminder) -> String {
    format_reminder_at(reminder, Utc::now())
}

/// Format a reminder, flagging it when it is due at `now`.
pub fn format_reminder_at(reminder: &Reminder, now: DateTime<Utc>) -> String {
    let mut output = format!(
        "{}\n  ID: {}\n  Event: {}",
        reminder.remind_at.format(TIMESTAMP),
        reminder.id,
        reminder.event_id
    );
    if let Some(note) = &reminder.note {
        output.push_str(&format!("\n  Note: {}", note));
    }
    if reminder.is_due(now) {
        output.push_str("\n  Status: due");
    }
    output
}

/// Format system settings for display.
pub fn format_settings(settings: &SystemSettings) -> String {
    format!(
        "Settings:\n  Public events allowed: {}\n  Max event capacity: {}\n  Default page size: {}\n  Maintenance mode: {}",
        settings.allow_public_events,
        settings.max_event_capacity,
        settings.default_page_size,
        settings.maintenance_mode
    )
}

pub fn format_health(health: &ApiHealth) -> String {
    match &health.version {
        Some(version) => format!("API Health:\n  Status: {}\n  Version: {}", health.status, version),
        None => format!("API Health:\n  Status: {}", health.status),
    }
}

/// Format the current session for display.
pub fn format_session(session: &SessionContext) -> String {
    let claims = session.claims();
    let mut output = format!("User ID: {}\n  Role: {}", claims.sub, claims.role);
    if let Some(name) = &claims.name {
        output.push_str(&format!("\n  Name: {}", name));
    }
    if let Some(email) = &claims.email {
        output.push_str(&format!("\n  Email: {}", email));
    }
    if let Some(expires_at) = session.expires_at() {
        output.push_str(&format!("\n  Expires: {}", expires_at.format(TIMESTAMP)));
    }
    output
}

/// Render the pagination bar, bracketing actions that are disabled.
///
/// `« Prev | 1 [2] 3 | Next »` on a middle page, `[« Prev] | [1] | [Next »]`
/// when there is a single page.
pub fn format_pagination(control: &PaginationControl) -> String {
    let previous = if control.previous_disabled() {
        "[« Prev]"
    } else {
        "« Prev"
    };
    let next = if control.next_disabled() {
        "[Next »]"
    } else {
        "Next »"
    };
    let buttons = control
        .page_buttons(Some(PAGE_WINDOW))
        .iter()
        .map(|button| {
            if button.active {
                format!("[{}]", button.number)
            } else {
                button.number.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!("{} | {} | {}", previous, buttons, next)
}

const PAGE_WINDOW: usize = 7;

/// Format one page of a list view.
pub fn format_page<T, F>(title: &str, slice: &PageSlice<'_, T>, item: F) -> String
where
    F: Fn(&T) -> String,
{
    if slice.is_empty() {
        return format!(
            "No {} found.\n{}",
            title.to_lowercase(),
            format_pagination(&slice.control())
        );
    }
    let mut output = format!(
        "{} ({}, page {} of {})\n",
        title, slice.total_items, slice.current_page, slice.total_pages
    );
    output.push_str(&"-".repeat(40));
    for entry in slice.items {
        output.push_str(&format!("\n{}", item(entry)));
        output.push('\n');
    }
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&format_pagination(&slice.control()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pagination_middle_page() {
        let control = PaginationControl::new(2, 3);

        assert_eq!(format_pagination(&control), "« Prev | 1 [2] 3 | Next »");
    }

    #[test]
    fn test_format_pagination_single_page() {
        let control = PaginationControl::new(1, 1);

        assert_eq!(format_pagination(&control), "[« Prev] | [1] | [Next »]");
    }

    #[test]
    fn test_format_page_empty() {
        let items: Vec<User> = Vec::new();
        let slice = PageSlice {
            items: &items,
            current_page: 1,
            total_pages: 1,
            total_items: 0,
        };

        assert_eq!(
            format_page("USERS", &slice, format_user),
            "No users found.\n[« Prev] | [1] | [Next »]"
        );
    }

    #[test]
    fn test_format_reminder_flags_due() {
        use chrono::TimeZone;
        use uuid::Uuid;

        let remind_at = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let reminder = Reminder {
            id: Uuid::nil(),
            event_id: Uuid::nil(),
            user_id: Uuid::nil(),
            remind_at,
            note: Some("Bring chairs".to_string()),
        };

        let pending = format_reminder_at(&reminder, remind_at - chrono::Duration::hours(1));
        let due = format_reminder_at(&reminder, remind_at);

        assert!(pending.contains("Note: Bring chairs"));
        assert!(!pending.contains("Status: due"));
        assert!(due.ends_with("Status: due"));
    }

    #[test]
    fn test_format_page_lists_items_and_bar() {
        let users = vec![User::new("Ada", "ada@example.com")];
        let slice = PageSlice {
            items: &users,
            current_page: 3,
            total_pages: 3,
            total_items: 7,
        };

        let output = format_page("USERS", &slice, format_user);

        assert!(output.starts_with("USERS (7, page 3 of 3)"));
        assert!(output.contains("Ada <ada@example.com>"));
        assert!(output.ends_with("« Prev | 1 2 [3] | [Next »]"));
    }
}
