//! Browser adapters and the wasm entry point for the Smew startup shell
//!
//! Everything platform-specific lives here: the Keycloak JS adapter bridge,
//! the `web-sys` location/history surface, browser-info capture, and the
//! event-loop spawner. The session semantics themselves live in
//! `smew-session`; this crate only wires them to the hosting page.

pub mod app;
pub mod browser;
pub mod diagnostics;
pub mod keycloak;
pub mod spawn;

mod telemetry;

pub use app::EntryPoints;
pub use browser::WebBrowserSurface;
pub use keycloak::KeycloakProvider;
pub use spawn::WasmSpawner;

use smew_core::AuthResult;
use smew_session::{Bootstrapper, SessionConfig, SessionContext};
use std::rc::Rc;

/// Wire the session controller to the hosting page and start the bootstrap
///
/// Returns once the bootstrap has been spawned onto the page event loop;
/// the handshake itself resolves asynchronously. An error here means the
/// page is missing a collaborator (no window object, no identity-provider
/// adapter script) and nothing was started.
pub fn launch(config: SessionConfig, app: EntryPoints) -> AuthResult<()> {
    console_error_panic_hook::set_once();
    telemetry::init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "smew client starting");

    let provider = Rc::new(KeycloakProvider::from_resource(&config.provider_resource)?);
    let ctx = Rc::new(SessionContext::new(config, provider));

    let mut bootstrapper = Bootstrapper::new(
        ctx,
        Rc::new(WebBrowserSurface::new()),
        Rc::new(app),
        Rc::new(WasmSpawner),
    );
    match diagnostics::capture() {
        Ok(info) => bootstrapper = bootstrapper.with_diagnostics(info),
        Err(err) => tracing::debug!(error = %err, "browser info capture failed"),
    }

    wasm_bindgen_futures::spawn_local(async move {
        // Failure is already reported inside the bootstrapper; the page
        // simply stays on the provider's login surface.
        let _ = bootstrapper.run().await;
    });
    Ok(())
}
