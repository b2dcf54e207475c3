//! Session bootstrap and token refresh controller for the Smew client
//!
//! Gates loading of the application module behind a successful
//! identity-provider login, then keeps the session credential fresh for the
//! lifetime of the page. Everything this crate talks to — the identity
//! provider, the browser's URL and history, the application module, the
//! page event loop — sits behind a trait seam, so the controller itself is
//! platform-neutral and natively testable.

pub mod app;
pub mod bootstrap;
pub mod browser;
pub mod config;
pub mod context;
pub mod provider;
pub mod refresh;
pub mod spawn;

pub use app::AppEntry;
pub use bootstrap::Bootstrapper;
pub use browser::BrowserSurface;
pub use config::{SessionConfig, SessionDefaults};
pub use context::SessionContext;
pub use provider::{IdentityProvider, InitOptions, OnLoadPolicy};
pub use refresh::RefreshScheduler;
pub use spawn::LocalSpawner;
