//! Presentation and input layer for a falling-block game whose state lives entirely on the
//! server. Snapshots pushed by the server are drawn onto a [`render::Surface`], and key presses
//! or button clicks become [`command::CommandName`]s for a [`command::CommandSender`].

pub mod cell;
pub mod command;
pub mod error;
pub mod geometry;
pub mod input;
pub mod render;
pub mod snapshot;

pub use cell::CellType;
pub use command::{CommandName, CommandSender};
pub use error::SnapshotError;
pub use geometry::{Rect, RenderGeometry};
pub use input::{InputDispatcher, KeyOutcome, Keymap};
pub use render::{FieldRenderer, PreviewRenderer, Surface};
pub use snapshot::{ServerMessage, Snapshot};
