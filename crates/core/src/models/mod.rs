mod error;
mod event;
mod forum;
mod invitation;
mod join_request;
mod member;
mod notification;
mod operations;
mod reminder;
mod requests;
mod settings;
mod user;

pub use error::{EventError, PostError, ReminderError};
pub use event::{Event, Visibility};
pub use forum::ForumPost;
pub use invitation::{Invitation, InvitationStatus};
pub use join_request::{JoinRequest, JoinRequestStatus};
pub use member::Member;
pub use notification::Notification;
pub use operations::{pending_join_requests, validate_event, validate_post, validate_reminder};
pub use reminder::Reminder;
pub use requests::{
    CreateEventRequest, CreatePostRequest, CreateReminderRequest, InviteRequest,
    InvitationResponse, JoinEventRequest, ReviewDecision, SetActiveRequest, UpdateEventRequest,
    UpdateRoleRequest,
};
pub use settings::{SystemSettings, UpdateSettingsRequest};
pub use user::{Role, User};
