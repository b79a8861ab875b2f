use super::{SessionClaims, SessionError};

/// Turns an opaque session token into claims.
///
/// Implementations live with the auth collaborator that issued the token;
/// view code only ever sees the resulting [`SessionClaims`].
pub trait TokenDecoder: Send + Sync {
    fn decode(&self, token: &str) -> Result<SessionClaims, SessionError>;
}
