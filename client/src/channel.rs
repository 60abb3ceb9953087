use blastris::{ServerMessage, SnapshotError};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Event, EventSource, MessageEvent};

use crate::error::ClientError;

/// Server-sent event stream of game snapshots.
///
/// The browser's `EventSource` reconnects on its own after a dropped connection; nothing here
/// retries. Dropping the channel closes the stream.
pub struct SnapshotChannel {
    source: EventSource,
    _onmessage: Closure<dyn FnMut(MessageEvent)>,
    _onopen: Closure<dyn FnMut(Event)>,
    _onerror: Closure<dyn FnMut(Event)>,
}

impl SnapshotChannel {
    pub fn connect(
        url: &str,
        mut on_message: impl FnMut(ServerMessage) + 'static,
    ) -> Result<Self, ClientError> {
        let source = EventSource::new(url)?;

        let onmessage = Closure::wrap(Box::new(move |event: MessageEvent| {
            let Some(data) = event.data().as_string() else {
                gloo::console::warn!("ignoring non-text snapshot message");
                return;
            };
            if let Err(e) = deliver(&data, &mut on_message) {
                gloo::console::warn!("skipping snapshot", e.to_string());
            }
        }) as Box<dyn FnMut(MessageEvent)>);

        let onopen = {
            let url = url.to_string();
            Closure::wrap(Box::new(move |_event: Event| {
                gloo::console::log!("snapshot stream connected", url.clone());
            }) as Box<dyn FnMut(Event)>)
        };

        let onerror = {
            let url = url.to_string();
            let source = source.clone();
            Closure::wrap(Box::new(move |_event: Event| {
                if source.ready_state() == EventSource::CLOSED {
                    gloo::console::warn!("snapshot stream closed", url.clone());
                } else {
                    gloo::console::warn!("snapshot stream interrupted, browser is reconnecting", url.clone());
                }
            }) as Box<dyn FnMut(Event)>)
        };

        source.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
        source.set_onopen(Some(onopen.as_ref().unchecked_ref()));
        source.set_onerror(Some(onerror.as_ref().unchecked_ref()));

        Ok(SnapshotChannel {
            source,
            _onmessage: onmessage,
            _onopen: onopen,
            _onerror: onerror,
        })
    }
}

// a bad message is dropped here, so the last good frame stays on screen
fn deliver(data: &str, on_message: &mut impl FnMut(ServerMessage)) -> Result<(), SnapshotError> {
    on_message(ServerMessage::decode(data)?);
    Ok(())
}

impl Drop for SnapshotChannel {
    fn drop(&mut self) {
        self.source.set_onmessage(None);
        self.source.set_onopen(None);
        self.source.set_onerror(None);
        self.source.close();
    }
}
