//! User administration CLI commands.

use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use super::list::ListArgs;
use eventhub_core::models::Role as CoreRole;

/// User management commands.
#[derive(Debug, Parser)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// CLI user role (with clap ValueEnum).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Role {
    User,
    Admin,
}

impl From<Role> for CoreRole {
    fn from(r: Role) -> Self {
        match r {
            Role::User => CoreRole::User,
            Role::Admin => CoreRole::Admin,
        }
    }
}

/// Available user actions.
#[derive(Debug, Subcommand)]
pub enum UsersAction {
    /// List users. The category filter matches roles (user, admin).
    List(ListArgs),
    /// Get user by ID.
    Get {
        /// User ID.
        id: Uuid,
    },
    /// Change a user's role.
    SetRole {
        /// User ID.
        id: Uuid,
        /// New role.
        #[arg(long, value_enum)]
        role: Role,
    },
    /// Re-activate a user.
    Activate {
        /// User ID.
        id: Uuid,
    },
    /// Deactivate a user.
    Deactivate {
        /// User ID.
        id: Uuid,
    },
    /// Delete user by ID.
    Delete {
        /// User ID.
        id: Uuid,
    },
}
