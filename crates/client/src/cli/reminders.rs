//! Reminder CLI commands.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use uuid::Uuid;

use super::list::ListArgs;

/// Reminder commands.
#[derive(Debug, Parser)]
pub struct RemindersCommand {
    #[command(subcommand)]
    pub action: RemindersAction,
}

/// Available reminder actions.
#[derive(Debug, Subcommand)]
pub enum RemindersAction {
    /// List your reminders.
    List(ListArgs),
    /// Schedule a reminder for an event.
    Create {
        /// Event ID.
        #[arg(long)]
        event_id: Uuid,
        /// When to remind (RFC 3339).
        #[arg(long)]
        remind_at: DateTime<Utc>,
        /// Optional note.
        #[arg(long)]
        note: Option<String>,
    },
    /// Delete reminder by ID.
    Delete {
        /// Reminder ID.
        id: Uuid,
    },
}
