//! Task spawning seam for the page event loop

use futures::future::LocalBoxFuture;

/// Spawns a future onto the single-threaded page event loop
///
/// The controller never blocks an OS thread; async work triggered from
/// synchronous callbacks (such as the expiry notification) goes through
/// here.
pub trait LocalSpawner {
    fn spawn_local(&self, fut: LocalBoxFuture<'static, ()>);
}
