//! Console tracing setup

use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

/// Route tracing output to the browser console
///
/// Safe to call more than once; only the first subscriber wins.
pub(crate) fn init() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
