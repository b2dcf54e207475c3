//! One-time session bootstrap
//!
//! Runs exactly one login handshake before any application logic executes.
//! On success it arms the refresh scheduler and hands control to the
//! application module; on failure it reports once and leaves the session in
//! a terminal failed state.

use std::rc::Rc;

use smew_core::{AuthError, AuthPhase, BrowserInfo};

use crate::app::AppEntry;
use crate::browser::{propagate_locale, BrowserSurface};
use crate::context::SessionContext;
use crate::provider::InitOptions;
use crate::refresh::RefreshScheduler;
use crate::spawn::LocalSpawner;

/// Orchestrates the one-time startup sequence
pub struct Bootstrapper {
    ctx: Rc<SessionContext>,
    browser: Rc<dyn BrowserSurface>,
    app: Rc<dyn AppEntry>,
    spawner: Rc<dyn LocalSpawner>,
    diagnostics: Option<BrowserInfo>,
}

impl Bootstrapper {
    pub fn new(
        ctx: Rc<SessionContext>,
        browser: Rc<dyn BrowserSurface>,
        app: Rc<dyn AppEntry>,
        spawner: Rc<dyn LocalSpawner>,
    ) -> Self {
        Self {
            ctx,
            browser,
            app,
            spawner,
            diagnostics: None,
        }
    }

    /// Attach a browser snapshot to ride along in failure reports
    #[must_use]
    pub fn with_diagnostics(mut self, info: BrowserInfo) -> Self {
        self.diagnostics = Some(info);
        self
    }

    /// Run the startup sequence
    ///
    /// Consumes the bootstrapper: the handshake happens at most once per
    /// page session. On success the refresh scheduler is installed before
    /// control is yielded, then `main()` and `start_network_thread()` are
    /// invoked fire-and-forget. On failure the reason is reported exactly
    /// once, the application is never invoked, and there is no retry.
    pub async fn run(self) -> Result<(), AuthError> {
        self.ctx.set_phase(AuthPhase::Authenticating);

        let outcome = self
            .ctx
            .provider()
            .initialize(InitOptions::login_required())
            .await;
        let credential = match outcome {
            Ok(credential) if credential.is_usable() => credential,
            Ok(_) => return Err(self.fail(AuthError::InvalidProviderResponse)),
            Err(err) => return Err(self.fail(err)),
        };

        self.ctx.store_credential(credential.clone());
        self.ctx.set_phase(AuthPhase::Authenticated);
        tracing::info!("login complete, starting application");

        if let Some(locale) = credential.claims.locale.as_deref() {
            propagate_locale(
                self.browser.as_ref(),
                &self.ctx.config().locale_param,
                locale,
            );
        }

        // Expiry handling must be armed before the application takes over.
        let scheduler = Rc::new(RefreshScheduler::new(Rc::clone(&self.ctx)));
        scheduler.install(Rc::clone(&self.spawner));

        // Fire and forget: neither call is awaited or supervised.
        self.app.main();
        self.app.start_network_thread();
        Ok(())
    }

    fn fail(&self, err: AuthError) -> AuthError {
        self.ctx.set_phase(AuthPhase::Failed);
        match &self.diagnostics {
            Some(info) => tracing::error!(error = %err, browser = ?info, "login failed"),
            None => tracing::error!(error = %err, "login failed"),
        }
        err
    }
}
