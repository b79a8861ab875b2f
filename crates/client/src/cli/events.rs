//! Event CLI commands.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use super::list::ListArgs;
use eventhub_core::models::Visibility as CoreVisibility;

/// Event management commands.
#[derive(Debug, Parser)]
pub struct EventsCommand {
    #[command(subcommand)]
    pub action: EventsAction,
}

/// CLI event visibility (with clap ValueEnum).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Visibility {
    Public,
    Private,
}

impl From<Visibility> for CoreVisibility {
    fn from(v: Visibility) -> Self {
        match v {
            Visibility::Public => CoreVisibility::Public,
            Visibility::Private => CoreVisibility::Private,
        }
    }
}

/// Available event actions.
#[derive(Debug, Subcommand)]
pub enum EventsAction {
    /// List events.
    List(ListArgs),
    /// Get event by ID.
    Get {
        /// Event ID.
        id: Uuid,
    },
    /// Create a new event.
    Create {
        /// Event title.
        #[arg(long)]
        title: String,
        /// Start time (RFC 3339, e.g. 2024-06-01T18:00:00Z).
        #[arg(long)]
        starts_at: DateTime<Utc>,
        /// End time (RFC 3339).
        #[arg(long)]
        ends_at: DateTime<Utc>,
        /// Who can see the event.
        #[arg(long, value_enum, default_value = "public")]
        visibility: Visibility,
        /// Optional description.
        #[arg(long)]
        description: Option<String>,
        /// Optional location.
        #[arg(long)]
        location: Option<String>,
    },
    /// Update an event.
    Update {
        /// Event ID.
        id: Uuid,
        /// New title.
        #[arg(long)]
        title: Option<String>,
        /// New start time (RFC 3339).
        #[arg(long)]
        starts_at: Option<DateTime<Utc>>,
        /// New end time (RFC 3339).
        #[arg(long)]
        ends_at: Option<DateTime<Utc>>,
        /// New visibility.
        #[arg(long, value_enum)]
        visibility: Option<Visibility>,
        /// New description.
        #[arg(long)]
        description: Option<String>,
        /// New location.
        #[arg(long)]
        location: Option<String>,
    },
    /// Delete event by ID.
    Delete {
        /// Event ID.
        id: Uuid,
    },
}
