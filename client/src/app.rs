use std::rc::Rc;

use blastris::{FieldRenderer, InputDispatcher, PreviewRenderer, ServerMessage, Snapshot, SnapshotError};
use web_sys::Document;

use crate::{
    canvas::CanvasSurface,
    channel::SnapshotChannel,
    config::ClientConfig,
    error::ClientError,
    input::{self, InputBindings},
    sender::FetchSender,
};

// every renderer on the page, each owning its own canvas
struct Views {
    field: FieldRenderer<CanvasSurface>,
    preview: Option<PreviewRenderer<CanvasSurface>>,
    opponent: Option<FieldRenderer<CanvasSurface>>,
}

impl Views {
    fn show(&mut self, message: ServerMessage) {
        if let Some(preview) = &mut self.preview {
            preview.update(&message.player);
        }
        self.field.update(message.player);

        let frame = opponent_frame(self.opponent.is_some(), message.opponent);
        match (&mut self.opponent, frame) {
            (Some(opponent), Ok(Some(snapshot))) => opponent.update(snapshot),
            (_, Err(e)) => gloo::console::warn!("skipping opponent snapshot", e.to_string()),
            _ => {}
        }
    }
}

// the opponent section only matters, broken or not, when there is a canvas to draw it on
fn opponent_frame(
    has_canvas: bool,
    opponent: Option<Result<Snapshot, SnapshotError>>,
) -> Result<Option<Snapshot>, SnapshotError> {
    match opponent {
        Some(opponent) if has_canvas => opponent.map(Some),
        _ => Ok(None),
    }
}

/// The running client: the snapshot stream drawing into the canvases and the input listeners
/// posting commands. Both halves stop when this is dropped.
pub struct App {
    _channel: SnapshotChannel,
    _bindings: InputBindings,
}

impl App {
    pub fn start(config: ClientConfig) -> Result<Self, ClientError> {
        let window = web_sys::window().ok_or(ClientError::NoWindow)?;
        let document = window.document().ok_or(ClientError::NoWindow)?;

        let mut views = Views {
            field: FieldRenderer::new(CanvasSurface::from_id(&document, &config.field_canvas_id)?),
            preview: optional_surface(&document, config.preview_canvas_id.as_deref()).map(PreviewRenderer::new),
            opponent: optional_surface(&document, config.opponent_canvas_id.as_deref()).map(FieldRenderer::new),
        };
        let channel = SnapshotChannel::connect(&config.stream_url(), move |message| views.show(message))?;

        let sender = FetchSender::new(window, config.server_url.clone());
        let dispatcher = Rc::new(InputDispatcher::new(config.keybinds, config.buttons, sender));
        let bindings = input::bind(&document, dispatcher);

        Ok(App {
            _channel: channel,
            _bindings: bindings,
        })
    }
}

// optional canvases may be left out of the page entirely
fn optional_surface(document: &Document, id: Option<&str>) -> Option<CanvasSurface> {
    let id = id?;
    document.get_element_by_id(id)?;

    CanvasSurface::from_id(document, id)
        .map_err(|e| gloo::console::warn!("skipping canvas", id, e.to_string()))
        .ok()
}
