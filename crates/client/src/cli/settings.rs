//! System settings CLI commands.

use clap::{Parser, Subcommand};

/// Settings commands.
#[derive(Debug, Parser)]
pub struct SettingsCommand {
    #[command(subcommand)]
    pub action: SettingsAction,
}

/// Available settings actions.
#[derive(Debug, Subcommand)]
pub enum SettingsAction {
    /// Show current settings.
    Show,
    /// Update settings (admin only).
    Update {
        /// Whether users may create public events.
        #[arg(long)]
        allow_public_events: Option<bool>,
        /// Maximum members per event.
        #[arg(long)]
        max_event_capacity: Option<u32>,
        /// Default page size for lists.
        #[arg(long)]
        default_page_size: Option<usize>,
        /// Put the system into maintenance mode.
        #[arg(long)]
        maintenance_mode: Option<bool>,
    },
}
