use blastris::{CommandName, CommandSender};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{RequestInit, Response, Window};

use crate::config::join_url;

/// Posts each command to its own server path with `fetch`, without a body.
///
/// The request runs on its own task; a failure is only logged.
pub struct FetchSender {
    window: Window,
    server_url: String,
}

impl FetchSender {
    pub fn new(window: Window, server_url: impl Into<String>) -> Self {
        FetchSender {
            window,
            server_url: server_url.into(),
        }
    }

    pub fn url(&self, command: CommandName) -> String { join_url(&self.server_url, command.path()) }
}

impl CommandSender for FetchSender {
    fn send(&self, command: CommandName) {
        let url = self.url(command);
        let init = RequestInit::new();
        init.set_method("POST");

        let request = JsFuture::from(self.window.fetch_with_str_and_init(&url, &init));
        spawn_local(async move {
            match request.await.map(|r| r.dyn_into::<Response>()) {
                Ok(Ok(response)) if !response.ok() => {
                    gloo::console::warn!("command rejected", url, response.status());
                }
                Ok(_) => {}
                Err(e) => gloo::console::warn!("command request failed", url, e),
            }
        });
    }
}
