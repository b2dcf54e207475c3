//! Application module handoff

use smew_session::AppEntry;

/// Entry points of the application module, handed over by the embedding
/// crate
///
/// The application is loaded alongside this shell; the shell only needs the
/// two calls it fires after a successful login.
pub struct EntryPoints {
    main: Box<dyn Fn()>,
    start_network_thread: Box<dyn Fn()>,
}

impl EntryPoints {
    pub fn new(main: impl Fn() + 'static, start_network_thread: impl Fn() + 'static) -> Self {
        Self {
            main: Box::new(main),
            start_network_thread: Box::new(start_network_thread),
        }
    }
}

impl AppEntry for EntryPoints {
    fn main(&self) {
        (self.main)();
    }

    fn start_network_thread(&self) {
        (self.start_network_thread)();
    }
}
