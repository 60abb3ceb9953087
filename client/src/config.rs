use blastris::input::{default_buttons, Buttons, Keymap};
use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

// local storage key holding a json override of the defaults below
pub const CONFIG_STORAGE_KEY: &str = "blastris.config";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    // empty means the page's own origin
    pub server_url: String,

    // canvases, the optional ones are skipped when absent from the page
    pub field_canvas_id: String,
    pub preview_canvas_id: Option<String>,
    pub opponent_canvas_id: Option<String>,

    // controls
    pub keybinds: Keymap,
    pub buttons: Buttons,

    // minimum level of core library events shown in the console, e.g. "debug"
    pub log_level: String,
}

impl ClientConfig {
    /// Defaults, overridden by a stored json config when one is present and valid.
    pub fn load() -> Self {
        let Some(stored) = read_stored_config() else {
            return ClientConfig::default();
        };

        ClientConfig::from_json(&stored).unwrap_or_else(|e| {
            gloo::console::warn!("ignoring stored config", CONFIG_STORAGE_KEY, e.to_string());
            ClientConfig::default()
        })
    }

    // fields missing from `json` keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> { serde_json::from_str(json) }

    /// Absolute or origin-relative url of a server path such as `/left`.
    pub fn endpoint(&self, path: &str) -> String { join_url(&self.server_url, path) }

    pub fn stream_url(&self) -> String { self.endpoint("/sse") }

    // unparsable levels fall back to info
    pub fn log_level(&self) -> LevelFilter { self.log_level.parse().unwrap_or(LevelFilter::INFO) }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            server_url: String::new(),

            field_canvas_id: "field".to_string(),
            preview_canvas_id: Some("preview".to_string()),
            opponent_canvas_id: Some("opponent".to_string()),

            keybinds: Keymap::default(),
            buttons: default_buttons(),

            log_level: "info".to_string(),
        }
    }
}

/// Appends `path` (which starts with `/`) to `base` without doubling the slash.
pub fn join_url(base: &str, path: &str) -> String { format!("{}{}", base.trim_end_matches('/'), path) }

fn read_stored_config() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(CONFIG_STORAGE_KEY).ok()??;
    (!raw.trim().is_empty()).then_some(raw)
}
