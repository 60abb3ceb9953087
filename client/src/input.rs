use std::rc::Rc;

use blastris::{CommandSender, InputDispatcher};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

/// Live DOM listeners feeding an [`InputDispatcher`]. Dropping this unbinds everything.
pub struct InputBindings {
    _keydown: EventListener,
    _buttons: Vec<EventListener>,
}

/// Binds the document-wide keydown handler and one click handler per configured button.
pub fn bind<C: CommandSender + 'static>(document: &Document, dispatcher: Rc<InputDispatcher<C>>) -> InputBindings {
    let keydown = {
        let dispatcher = dispatcher.clone();
        // not passive, recognised keys must be able to cancel scrolling
        let options = EventListenerOptions::enable_prevent_default();
        EventListener::new_with_options(document, "keydown", options, move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            // chords like ctrl+s belong to the browser
            if event.ctrl_key() || event.meta_key() || event.alt_key() {
                return;
            }
            if dispatcher.handle_key(&event.key()).suppresses_default() {
                event.prevent_default();
                event.stop_propagation();
            }
        })
    };

    let buttons = dispatcher
        .buttons()
        .right_values()
        .filter_map(|id| {
            let Some(element) = document.get_element_by_id(id) else {
                gloo::console::warn!("control button not found", id.clone());
                return None;
            };
            let dispatcher = dispatcher.clone();
            let id = id.clone();
            Some(EventListener::new(&element, "click", move |_| {
                dispatcher.handle_button(&id);
            }))
        })
        .collect();

    InputBindings {
        _keydown: keydown,
        _buttons: buttons,
    }
}
