use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// A gameplay action the server can be asked to perform. Each one is a single bodiless request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum CommandName {
    MoveLeft,
    MoveRight,
    RotateLeft,
    RotateRight,
    SoftDrop,
    HardDrop,
    // debug helper that pushes a filled line in from the bottom
    BottomRefill,
}

impl CommandName {
    /// Path suffix the command is posted to, relative to the server url.
    pub fn path(self) -> &'static str {
        match self {
            CommandName::MoveLeft => "/left",
            CommandName::MoveRight => "/right",
            CommandName::RotateLeft => "/rotate_left",
            CommandName::RotateRight => "/rotate_right",
            CommandName::SoftDrop => "/down",
            CommandName::HardDrop => "/drop",
            CommandName::BottomRefill => "/bottom_refill",
        }
    }
}

/// Fire-and-forget delivery of commands. Implementations must not block and the caller never
/// learns whether the request succeeded.
pub trait CommandSender {
    fn send(&self, command: CommandName);
}

impl<C: CommandSender + ?Sized> CommandSender for &C {
    fn send(&self, command: CommandName) { (**self).send(command) }
}
