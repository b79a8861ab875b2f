//! eventhub_client - API client and CLI for eventhub.

pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod view;

pub use client::EventhubClient;
pub use error::{ClientError, Result};
