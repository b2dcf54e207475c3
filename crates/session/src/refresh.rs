//! Event-driven credential refresh
//!
//! Keeps the session credential from expiring for as long as the page is
//! open, without blocking the application or ever surfacing an error to it.

use std::rc::Rc;

use crate::context::SessionContext;
use crate::spawn::LocalSpawner;

/// Reacts to the provider's expiry notifications for the life of the page
///
/// The scheduler does not poll on a timer and does not compute the
/// near-expiry threshold itself; the provider decides when to notify.
pub struct RefreshScheduler {
    ctx: Rc<SessionContext>,
}

impl RefreshScheduler {
    pub fn new(ctx: Rc<SessionContext>) -> Self {
        Self { ctx }
    }

    /// Register with the provider's expiry notification channel
    ///
    /// Called exactly once by the bootstrapper. The provider re-arms the
    /// handler after each notification; no re-registration happens here.
    pub fn install(self: Rc<Self>, spawner: Rc<dyn LocalSpawner>) {
        let scheduler = Rc::clone(&self);
        self.ctx.provider().set_expiry_handler(Rc::new(move || {
            let scheduler = Rc::clone(&scheduler);
            spawner.spawn_local(Box::pin(async move {
                scheduler.handle_expiry().await;
            }));
        }));
    }

    /// React to one expiry notification with exactly one refresh attempt
    ///
    /// A failed attempt is reported and absorbed: the stale credential stays
    /// in place, the session is not torn down, and the application is never
    /// notified. Overlapping attempts are tolerated rather than
    /// deduplicated; whichever completes last owns the credential slot.
    pub async fn handle_expiry(&self) {
        let min_validity = self.ctx.config().min_validity();
        match self.ctx.provider().refresh(min_validity).await {
            Ok(credential) => {
                self.ctx.store_credential(credential);
                tracing::debug!("session credential refreshed");
            }
            Err(err) => {
                tracing::warn!(error = %err, "token refresh failed, keeping stale credential");
            }
        }
    }
}
