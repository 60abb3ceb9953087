use std::collections::HashMap;

use bimap::BiMap;
use serde::{Deserialize, Serialize};

use crate::command::{CommandName, CommandSender};

/// Keyboard keys (as reported by `KeyboardEvent.key`) and the command each one triggers.
/// Several keys may share a command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keymap(HashMap<String, CommandName>);

impl Keymap {
    pub fn get(&self, key: &str) -> Option<CommandName> { self.0.get(key).copied() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, CommandName)> { self.0.iter().map(|(k, c)| (k.as_str(), *c)) }
}

impl Default for Keymap {
    fn default() -> Self {
        // arrows and wasd, plus space for hard drop and enter for the refill helper
        let keys = [
            ("ArrowLeft", CommandName::MoveLeft),
            ("a", CommandName::MoveLeft),
            ("ArrowRight", CommandName::MoveRight),
            ("d", CommandName::MoveRight),
            ("ArrowUp", CommandName::RotateLeft),
            ("w", CommandName::RotateLeft),
            ("e", CommandName::RotateRight),
            ("ArrowDown", CommandName::SoftDrop),
            ("s", CommandName::SoftDrop),
            (" ", CommandName::HardDrop),
            ("Enter", CommandName::BottomRefill),
        ];
        keys.into_iter().map(|(k, c)| (k.to_string(), c)).collect()
    }
}

impl FromIterator<(String, CommandName)> for Keymap {
    fn from_iter<I: IntoIterator<Item = (String, CommandName)>>(iter: I) -> Self { Keymap(iter.into_iter().collect()) }
}

/// On-screen control buttons: each command is bound to at most one element id and vice versa.
pub type Buttons = BiMap<CommandName, String>;

pub fn default_buttons() -> Buttons {
    let buttons = [
        (CommandName::MoveLeft, "left"),
        (CommandName::RotateLeft, "rotate_left"),
        (CommandName::SoftDrop, "down"),
        (CommandName::RotateRight, "rotate_right"),
        (CommandName::MoveRight, "right"),
        (CommandName::HardDrop, "drop"),
    ];
    buttons.into_iter().map(|(c, id)| (c, id.to_string())).collect()
}

/// What happened to a key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Dispatched(CommandName),
    Ignored,
}

impl KeyOutcome {
    // the browser's default action (scrolling, form submit) is only blocked for keys we use
    pub fn suppresses_default(self) -> bool { matches!(self, KeyOutcome::Dispatched(_)) }
}

/// Turns raw key presses and button clicks into commands.
///
/// Every event is handled on its own: there is no held-key tracking and no repeat limiting, so
/// the host's key repeat decides how often a held key fires.
pub struct InputDispatcher<C: CommandSender> {
    keymap: Keymap,
    buttons: Buttons,
    sender: C,
}

impl<C: CommandSender> InputDispatcher<C> {
    pub fn new(keymap: Keymap, buttons: Buttons, sender: C) -> Self { InputDispatcher { keymap, buttons, sender } }

    pub fn handle_key(&self, key: &str) -> KeyOutcome {
        match self.keymap.get(key) {
            Some(command) => {
                tracing::trace!(key, ?command, "key dispatched");
                self.sender.send(command);
                KeyOutcome::Dispatched(command)
            }
            None => KeyOutcome::Ignored,
        }
    }

    pub fn handle_button(&self, element_id: &str) -> Option<CommandName> {
        let command = *self.buttons.get_by_right(element_id)?;
        tracing::trace!(element_id, ?command, "button dispatched");
        self.sender.send(command);
        Some(command)
    }

    pub fn buttons(&self) -> &Buttons { &self.buttons }

    pub fn sender(&self) -> &C { &self.sender }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use strum::IntoEnumIterator;

    #[derive(Default)]
    struct RecordingSender(RefCell<Vec<CommandName>>);

    impl CommandSender for RecordingSender {
        fn send(&self, command: CommandName) { self.0.borrow_mut().push(command) }
    }

    fn dispatcher() -> InputDispatcher<RecordingSender> {
        InputDispatcher::new(Keymap::default(), default_buttons(), RecordingSender::default())
    }

    fn sent(dispatcher: &InputDispatcher<RecordingSender>) -> Vec<CommandName> {
        dispatcher.sender().0.borrow().clone()
    }

    #[test]
    fn arrow_left_sends_one_move_left() {
        let dispatcher = dispatcher();
        let outcome = dispatcher.handle_key("ArrowLeft");

        assert_eq!(outcome, KeyOutcome::Dispatched(CommandName::MoveLeft));
        assert!(outcome.suppresses_default());
        assert_eq!(sent(&dispatcher), vec![CommandName::MoveLeft]);
    }

    #[test]
    fn unrecognized_keys_send_nothing_and_keep_defaults() {
        let dispatcher = dispatcher();
        for key in ["q", "Q", "Tab", "F5", "A", ""] {
            let outcome = dispatcher.handle_key(key);
            assert_eq!(outcome, KeyOutcome::Ignored);
            assert!(!outcome.suppresses_default());
        }
        assert!(sent(&dispatcher).is_empty());
    }

    #[test]
    fn every_recognized_key_sends_exactly_one_command() {
        let dispatcher = dispatcher();
        let keymap = Keymap::default();

        for (key, command) in keymap.iter() {
            let before = sent(&dispatcher).len();
            assert_eq!(dispatcher.handle_key(key), KeyOutcome::Dispatched(command));
            assert_eq!(sent(&dispatcher)[before..], [command]);
        }
    }

    #[test]
    fn default_keys_cover_the_documented_bindings() {
        let keymap = Keymap::default();
        let expected = [
            ("a", CommandName::MoveLeft),
            ("d", CommandName::MoveRight),
            ("w", CommandName::RotateLeft),
            ("s", CommandName::SoftDrop),
            ("ArrowUp", CommandName::RotateLeft),
            ("ArrowDown", CommandName::SoftDrop),
            ("ArrowRight", CommandName::MoveRight),
            (" ", CommandName::HardDrop),
            ("Enter", CommandName::BottomRefill),
        ];
        for (key, command) in expected {
            assert_eq!(keymap.get(key), Some(command), "key {:?}", key);
        }
        // every command is reachable from the keyboard
        for command in CommandName::iter() {
            assert!(keymap.iter().any(|(_, c)| c == command), "{:?} has no key", command);
        }
    }

    #[test]
    fn held_keys_repeat_through_the_host() {
        let dispatcher = dispatcher();
        for _ in 0..3 {
            dispatcher.handle_key("ArrowDown");
        }
        assert_eq!(sent(&dispatcher), vec![CommandName::SoftDrop; 3]);
    }

    #[test]
    fn buttons_dispatch_by_element_id() {
        let dispatcher = dispatcher();

        assert_eq!(dispatcher.handle_button("rotate_right"), Some(CommandName::RotateRight));
        assert_eq!(dispatcher.handle_button("drop"), Some(CommandName::HardDrop));
        assert_eq!(dispatcher.handle_button("missing"), None);
        assert_eq!(sent(&dispatcher), vec![CommandName::RotateRight, CommandName::HardDrop]);
    }

    #[test]
    fn rebinding_replaces_and_removes_keys() {
        let keymap: Keymap = Keymap::default()
            .iter()
            .filter(|(key, _)| *key != "Enter")
            .map(|(key, command)| (key.to_string(), command))
            .chain([("q".to_string(), CommandName::RotateRight)])
            .collect();

        let dispatcher = InputDispatcher::new(keymap, default_buttons(), RecordingSender::default());
        assert_eq!(dispatcher.handle_key("q"), KeyOutcome::Dispatched(CommandName::RotateRight));
        assert_eq!(dispatcher.handle_key("Enter"), KeyOutcome::Ignored);
    }

    #[test]
    fn keymap_round_trips_through_config_json() {
        let keymap: Keymap = serde_json::from_str(r#"{"j": "move_left", "k": "hard_drop"}"#).unwrap();
        assert_eq!(keymap.get("j"), Some(CommandName::MoveLeft));
        assert_eq!(keymap.get("k"), Some(CommandName::HardDrop));
        assert_eq!(keymap.get("ArrowLeft"), None);
    }
}
