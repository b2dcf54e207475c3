//! Identity provider seam

use async_trait::async_trait;
use serde::Serialize;
use smew_core::{LoginOutcome, RefreshOutcome};
use std::rc::Rc;
use std::time::Duration;

/// Login policy passed to the provider on initialization
///
/// Continuing unauthenticated is not a permitted outcome of the handshake,
/// so requiring a login is the only policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnLoadPolicy {
    LoginRequired,
}

/// Options for the initial handshake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InitOptions {
    #[serde(rename = "onLoad")]
    pub on_load: OnLoadPolicy,
}

impl InitOptions {
    #[must_use]
    pub const fn login_required() -> Self {
        Self {
            on_load: OnLoadPolicy::LoginRequired,
        }
    }
}

/// Connection to the identity provider
///
/// Exactly one instance exists per page load; it owns credential state on
/// the provider side and mutates it only through [`initialize`] and
/// [`refresh`]. Futures are `?Send`: all waiting is cooperative yielding on
/// the single-threaded page event loop.
///
/// [`initialize`]: IdentityProvider::initialize
/// [`refresh`]: IdentityProvider::refresh
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Perform the interactive login handshake
    ///
    /// Suspends until the provider redirects or responds; there is no
    /// timeout and no cancellation path.
    async fn initialize(&self, options: InitOptions) -> LoginOutcome;

    /// Attempt one credential renewal, demanding at least `min_validity` of
    /// remaining lifetime on the result
    async fn refresh(&self, min_validity: Duration) -> RefreshOutcome;

    /// Install the handler invoked whenever the current credential is
    /// judged near-expiry
    ///
    /// The provider re-arms the handler after each notification, so the
    /// registration is persistent for the page's lifetime.
    fn set_expiry_handler(&self, handler: Rc<dyn Fn()>);
}
