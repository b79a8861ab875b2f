//! CLI command definitions.

pub mod events;
pub mod forums;
pub mod health;
pub mod invitations;
pub mod join_requests;
pub mod list;
pub mod members;
pub mod notifications;
pub mod reminders;
pub mod settings;
pub mod users;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the eventhub API.
#[derive(Debug, Parser)]
#[command(name = "eventhub")]
#[command(version, about = "CLI client for the eventhub API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "EVENTHUB_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Session token sent as a bearer token.
    #[arg(long, env = "EVENTHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    /// Log requests and responses to stderr.
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Event management.
    Events(events::EventsCommand),
    /// Invitations sent and received.
    Invitations(invitations::InvitationsCommand),
    /// Requests to join events.
    JoinRequests(join_requests::JoinRequestsCommand),
    /// Members who joined an event.
    Members(members::MembersCommand),
    /// Event discussion forums.
    Forum(forums::ForumCommand),
    /// Notifications for the logged-in user.
    Notifications(notifications::NotificationsCommand),
    /// Event reminders.
    Reminders(reminders::RemindersCommand),
    /// User administration (admin only).
    Users(users::UsersCommand),
    /// System settings (updates are admin only).
    Settings(settings::SettingsCommand),
    /// Server health checks.
    Health(health::HealthCommand),
    /// Show the session decoded from the token.
    Whoami,
}
