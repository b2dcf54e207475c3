//! Smew core types and utilities

pub mod auth;
pub mod diagnostics;
pub mod error;

pub use auth::{AuthPhase, Claims, Credential, LoginOutcome, RefreshOutcome};
pub use diagnostics::BrowserInfo;
pub use error::{AuthError, AuthResult};
