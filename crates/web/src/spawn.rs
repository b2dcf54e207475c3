//! Event-loop spawning via wasm-bindgen-futures

use futures::future::LocalBoxFuture;
use smew_session::LocalSpawner;

/// Spawner backed by the browser microtask queue
#[derive(Clone, Copy, Default)]
pub struct WasmSpawner;

impl LocalSpawner for WasmSpawner {
    fn spawn_local(&self, fut: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(fut);
    }
}
