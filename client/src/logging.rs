use tracing_subscriber::{filter::LevelFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Routes `tracing` events from the core library to the browser console.
///
/// Only the first call installs anything; later calls are ignored.
pub fn init(level: LevelFilter) {
    // no ansi colors and no clock in the browser console
    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(level);

    if tracing_subscriber::registry().with(console).try_init().is_err() {
        gloo::console::warn!("tracing subscriber already installed");
    }
}
