use client::{app::App, config::ClientConfig, logging};

fn main() {
    console_error_panic_hook::set_once();

    let config = ClientConfig::load();
    logging::init(config.log_level());

    match App::start(config) {
        Ok(app) => {
            tracing::info!("client started");
            // listeners and the stream stay alive for the lifetime of the page
            std::mem::forget(app);
        }
        Err(e) => gloo::console::error!("client failed to start", e.to_string()),
    }
}
