//! Join request CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

use super::list::ListArgs;

/// Join request commands.
#[derive(Debug, Parser)]
pub struct JoinRequestsCommand {
    #[command(subcommand)]
    pub action: JoinRequestsAction,
}

/// Available join request actions.
#[derive(Debug, Subcommand)]
pub enum JoinRequestsAction {
    /// List join requests for an event.
    List {
        /// Event ID.
        #[arg(long)]
        event_id: Uuid,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Ask to join an event.
    Create {
        /// Event ID.
        #[arg(long)]
        event_id: Uuid,
        /// Optional note to the organizer.
        #[arg(long)]
        message: Option<String>,
    },
    /// Approve a join request.
    Approve {
        /// Event the request belongs to.
        #[arg(long)]
        event_id: Uuid,
        /// Join request ID.
        id: Uuid,
    },
    /// Reject a join request.
    Reject {
        /// Event the request belongs to.
        #[arg(long)]
        event_id: Uuid,
        /// Join request ID.
        id: Uuid,
    },
}
