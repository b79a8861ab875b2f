//! eventhub_core - functional core for the eventhub client.
//!
//! Pure data types and state transitions with no I/O: paginated collection
//! views, the records the remote API returns, request payloads and the
//! explicit session context.

pub mod listing;
pub mod models;
pub mod session;
