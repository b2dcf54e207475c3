//! Common error handling utilities and conventions

/// Standard result type for session operations
pub type AuthResult<T> = std::result::Result<T, AuthError>;

/// Errors produced while establishing or maintaining the page session
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, thiserror::Error)]
pub enum AuthError {
    /// The identity provider rejected or never completed the login handshake
    #[error("Login failed: {message}")]
    LoginFailed { message: String },

    /// The provider reported success but returned no usable credential
    #[error("Identity provider returned no usable credential")]
    InvalidProviderResponse,

    /// A credential renewal was rejected or the provider was unreachable
    #[error("Token refresh failed: {message}")]
    RefreshFailed { message: String },

    /// A browser API was missing or misbehaved
    #[error("Browser API unavailable: {message}")]
    BrowserUnavailable { message: String },
}

impl AuthError {
    /// Create a login failure error
    pub fn login_failed(message: impl Into<String>) -> Self {
        Self::LoginFailed {
            message: message.into(),
        }
    }

    /// Create a refresh failure error
    pub fn refresh_failed(message: impl Into<String>) -> Self {
        Self::RefreshFailed {
            message: message.into(),
        }
    }

    /// Create a browser availability error
    pub fn browser_unavailable(message: impl Into<String>) -> Self {
        Self::BrowserUnavailable {
            message: message.into(),
        }
    }

    /// Whether this error ends the bootstrap, as opposed to degrading the
    /// running session
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::LoginFailed { .. } | Self::InvalidProviderResponse
        )
    }
}
