//! Session configuration

use serde::Deserialize;
use std::time::Duration;

/// Defaults for the session controller
pub struct SessionDefaults;

impl SessionDefaults {
    /// Minimum remaining validity, in seconds, demanded from a refreshed
    /// token
    ///
    /// Provider deployments differ on their near-expiry threshold, so this
    /// is a default rather than a law.
    pub const MIN_VALIDITY_SECS: u32 = 300;

    /// Query parameter carrying the locale into the page URL
    pub const LOCALE_PARAM: &'static str = "lang";
}

/// Configuration for one page session
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Identity-provider endpoint configuration resource, passed through to
    /// the provider adapter untouched
    pub provider_resource: String,

    /// Minimum remaining validity demanded on refresh; guards against a
    /// renewed credential that is immediately near-expiry again due to
    /// clock skew or provider latency
    #[serde(default = "default_min_validity")]
    pub min_validity_secs: u32,

    #[serde(default = "default_locale_param")]
    pub locale_param: String,
}

impl SessionConfig {
    pub fn new(provider_resource: impl Into<String>) -> Self {
        Self {
            provider_resource: provider_resource.into(),
            min_validity_secs: SessionDefaults::MIN_VALIDITY_SECS,
            locale_param: SessionDefaults::LOCALE_PARAM.to_string(),
        }
    }

    #[must_use]
    pub fn min_validity(&self) -> Duration {
        Duration::from_secs(self.min_validity_secs.into())
    }
}

fn default_min_validity() -> u32 {
    SessionDefaults::MIN_VALIDITY_SECS
}

fn default_locale_param() -> String {
    SessionDefaults::LOCALE_PARAM.to_string()
}
