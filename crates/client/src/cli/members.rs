//! Event member CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

use super::list::ListArgs;

/// Member commands.
#[derive(Debug, Parser)]
pub struct MembersCommand {
    #[command(subcommand)]
    pub action: MembersAction,
}

/// Available member actions.
#[derive(Debug, Subcommand)]
pub enum MembersAction {
    /// List members of an event.
    List {
        /// Event ID.
        #[arg(long)]
        event_id: Uuid,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Remove a member from an event.
    Remove {
        /// Event ID.
        #[arg(long)]
        event_id: Uuid,
        /// User ID of the member.
        user_id: Uuid,
    },
}
