//! Notification CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

use super::list::ListArgs;

/// Notification commands.
#[derive(Debug, Parser)]
pub struct NotificationsCommand {
    #[command(subcommand)]
    pub action: NotificationsAction,
}

/// Available notification actions.
#[derive(Debug, Subcommand)]
pub enum NotificationsAction {
    /// List notifications. The category filter accepts read or unread.
    List(ListArgs),
    /// Mark a notification as read.
    Read {
        /// Notification ID.
        id: Uuid,
    },
    /// Watch notifications as they arrive.
    Watch {
        /// Resume from event ID.
        #[arg(long)]
        last_event_id: Option<u64>,
    },
}
