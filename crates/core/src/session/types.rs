use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{SessionError, TokenDecoder};
use crate::models::{Event, Role};

/// Claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// The user's ID.
    pub sub: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Role,
    /// Expiry as seconds since the Unix epoch.
    #[serde(default)]
    pub exp: Option<i64>,
}

/// The authenticated user on whose behalf views act.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    token: String,
    claims: SessionClaims,
}

impl SessionContext {
    /// Decodes `token` with the supplied decoder and rejects expired tokens.
    pub fn from_token(
        token: impl Into<String>,
        decoder: &dyn TokenDecoder,
        now: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        let token = token.into();
        let claims = decoder.decode(&token)?;
        let context = Self { token, claims };
        if context.is_expired(now) {
            return Err(SessionError::Expired);
        }
        Ok(context)
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn claims(&self) -> &SessionClaims {
        &self.claims
    }

    pub fn user_id(&self) -> Uuid {
        self.claims.sub
    }

    pub fn role(&self) -> Role {
        self.claims.role
    }

    pub fn is_admin(&self) -> bool {
        self.claims.role == Role::Admin
    }

    /// Organizers and admins may edit an event and review its join requests.
    pub fn can_manage_event(&self, event: &Event) -> bool {
        self.is_admin() || event.organizer_id == self.claims.sub
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.claims
            .exp
            .and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|expires_at| expires_at <= now)
    }
}
