//! Invitation CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

use super::list::ListArgs;

/// Invitation commands.
#[derive(Debug, Parser)]
pub struct InvitationsCommand {
    #[command(subcommand)]
    pub action: InvitationsAction,
}

/// Available invitation actions.
#[derive(Debug, Subcommand)]
pub enum InvitationsAction {
    /// List invitations: yours, or those sent for an event.
    List {
        /// List invitations sent for this event instead of your own.
        #[arg(long)]
        event_id: Option<Uuid>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Invite someone to an event.
    Send {
        /// Event ID.
        #[arg(long)]
        event_id: Uuid,
        /// Invitee email.
        #[arg(long)]
        email: String,
    },
    /// Accept an invitation.
    Accept {
        /// Invitation ID.
        id: Uuid,
    },
    /// Decline an invitation.
    Decline {
        /// Invitation ID.
        id: Uuid,
    },
}
