//! Shared per-session state

use arc_swap::ArcSwapOption;
use smew_core::{AuthPhase, Credential};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use crate::config::SessionConfig;
use crate::provider::IdentityProvider;

/// State shared by the bootstrapper and the refresh scheduler for one page
/// session
///
/// Constructed once by the top-level startup routine and injected into both
/// components; lives until page unload. The credential slot is swapped
/// whole, so readers never observe a partially written credential and
/// overlapping refresh completions resolve last-writer-wins.
pub struct SessionContext {
    config: SessionConfig,
    provider: Rc<dyn IdentityProvider>,
    credential: ArcSwapOption<Credential>,
    phase: Cell<AuthPhase>,
}

impl SessionContext {
    pub fn new(config: SessionConfig, provider: Rc<dyn IdentityProvider>) -> Self {
        Self {
            config,
            provider,
            credential: ArcSwapOption::from(None),
            phase: Cell::new(AuthPhase::Unauthenticated),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn provider(&self) -> &Rc<dyn IdentityProvider> {
        &self.provider
    }

    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        self.phase.get()
    }

    /// Current credential, if the session holds one
    #[must_use]
    pub fn credential(&self) -> Option<Arc<Credential>> {
        self.credential.load_full()
    }

    pub(crate) fn set_phase(&self, phase: AuthPhase) {
        self.phase.set(phase);
    }

    pub(crate) fn store_credential(&self, credential: Credential) {
        self.credential.store(Some(Arc::new(credential)));
    }
}
