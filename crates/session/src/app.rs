//! Application module handoff

/// Entry points of the application module
///
/// The bootstrapper's contract ends at invoking these two calls, in order,
/// once each, after a successful login. It does not await their completion
/// and does not supervise the application afterwards; nothing flows from
/// the application back into this crate.
pub trait AppEntry {
    /// The application's one-time initialization call
    fn main(&self);

    /// Starts the long-lived network/communication facility
    fn start_network_thread(&self);
}
