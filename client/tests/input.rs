#![cfg(target_arch = "wasm32")]

use std::{cell::RefCell, rc::Rc};

use blastris::{
    input::{Buttons, Keymap},
    CommandName, CommandSender, InputDispatcher,
};
use client::{input, sender::FetchSender};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Default)]
struct RecordingSender(RefCell<Vec<CommandName>>);

impl CommandSender for RecordingSender {
    fn send(&self, command: CommandName) { self.0.borrow_mut().push(command) }
}

fn document() -> Document { web_sys::window().unwrap().document().unwrap() }

fn dispatcher(buttons: Buttons) -> Rc<InputDispatcher<RecordingSender>> {
    Rc::new(InputDispatcher::new(Keymap::default(), buttons, RecordingSender::default()))
}

fn sent(dispatcher: &InputDispatcher<RecordingSender>) -> Vec<CommandName> { dispatcher.sender().0.borrow().clone() }

// dispatches a cancelable keydown on the document, returning whether its default was prevented
fn press(key: &str, ctrl: bool) -> bool {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_ctrl_key(ctrl);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();

    document().dispatch_event(&event).unwrap();
    event.default_prevented()
}

#[wasm_bindgen_test]
fn recognised_key_sends_once_and_cancels_the_default() {
    let dispatcher = dispatcher(Buttons::new());
    let _bindings = input::bind(&document(), dispatcher.clone());

    assert!(press("ArrowLeft", false));
    assert_eq!(sent(&dispatcher), vec![CommandName::MoveLeft]);
}

#[wasm_bindgen_test]
fn unrecognised_key_keeps_the_default() {
    let dispatcher = dispatcher(Buttons::new());
    let _bindings = input::bind(&document(), dispatcher.clone());

    assert!(!press("q", false));
    assert!(sent(&dispatcher).is_empty());
}

#[wasm_bindgen_test]
fn modifier_chords_are_left_to_the_browser() {
    let dispatcher = dispatcher(Buttons::new());
    let _bindings = input::bind(&document(), dispatcher.clone());

    assert!(!press("s", true));
    assert!(sent(&dispatcher).is_empty());
}

#[wasm_bindgen_test]
fn dropped_bindings_stop_listening() {
    let dispatcher = dispatcher(Buttons::new());
    drop(input::bind(&document(), dispatcher.clone()));

    assert!(!press("ArrowDown", false));
    assert!(sent(&dispatcher).is_empty());
}

#[wasm_bindgen_test]
fn button_click_sends_its_command() {
    let document = document();
    let button = document.create_element("button").unwrap();
    button.set_id("hard-drop-button");
    document.body().unwrap().append_child(&button).unwrap();

    let mut buttons = Buttons::new();
    buttons.insert(CommandName::HardDrop, "hard-drop-button".to_string());
    // a configured button missing from the page is skipped
    buttons.insert(CommandName::MoveLeft, "not-on-the-page".to_string());
    let dispatcher = dispatcher(buttons);
    let _bindings = input::bind(&document, dispatcher.clone());

    button.dyn_ref::<HtmlElement>().unwrap().click();
    assert_eq!(sent(&dispatcher), vec![CommandName::HardDrop]);

    button.remove();
}

#[wasm_bindgen_test]
fn sender_urls_share_the_config_join() {
    let sender = FetchSender::new(web_sys::window().unwrap(), "http://localhost:8000/tetris/");
    assert_eq!(sender.url(CommandName::BottomRefill), "http://localhost:8000/tetris/bottom_refill");
    assert_eq!(sender.url(CommandName::HardDrop), "http://localhost:8000/tetris/drop");
}
