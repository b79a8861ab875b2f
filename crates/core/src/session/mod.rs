//! Explicit session context.
//!
//! The authenticated user and their role are carried in a [`SessionContext`]
//! value that callers pass to whatever needs it. Turning a raw token into
//! claims is delegated to a [`TokenDecoder`] supplied by the caller.

mod error;
mod traits;
mod types;

pub use error::SessionError;
pub use traits::TokenDecoder;
pub use types::{SessionClaims, SessionContext};
