//! Credential, claims, and session phase types

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Terminal result of the initial login handshake, produced once per page
/// session and consumed once by the bootstrapper
pub type LoginOutcome = Result<Credential, AuthError>;

/// Result of a single credential renewal attempt
pub type RefreshOutcome = Result<Credential, AuthError>;

/// Authentication phase of the page session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthPhase {
    Unauthenticated,
    Authenticating,
    Authenticated,
    Failed,
}

impl AuthPhase {
    /// `Failed` is terminal: there is no path back to another handshake
    /// within the same page session
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Failed)
    }

    #[must_use]
    pub const fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

/// Claims decoded from the access token
///
/// Only the fields the startup shell acts on are named; everything else the
/// provider embeds is kept verbatim for the application's use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_username: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A time-bounded access token plus its decoded claims
///
/// Only identity-provider operations (initialize, refresh) produce these;
/// the bootstrapper and scheduler read the outcome and never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub access_token: String,
    /// Expiry as unix seconds, when the provider exposes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub claims: Claims,
}

impl Credential {
    pub fn new(access_token: impl Into<String>, expires_at: Option<i64>, claims: Claims) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at,
            claims,
        }
    }

    /// A credential with an empty token cannot authorize anything
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.access_token.is_empty()
    }
}
