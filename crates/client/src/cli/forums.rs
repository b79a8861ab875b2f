//! Event forum CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

use super::list::ListArgs;

/// Forum commands.
#[derive(Debug, Parser)]
pub struct ForumCommand {
    #[command(subcommand)]
    pub action: ForumAction,
}

/// Available forum actions.
#[derive(Debug, Subcommand)]
pub enum ForumAction {
    /// List posts in an event's forum.
    List {
        /// Event ID.
        #[arg(long)]
        event_id: Uuid,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Post a message.
    Post {
        /// Event ID.
        #[arg(long)]
        event_id: Uuid,
        /// Message body.
        #[arg(long)]
        body: String,
    },
}
