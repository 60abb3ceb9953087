//! Browser side of the game: binds canvases, the snapshot stream and the page's controls to the
//! renderers and input dispatcher from `blastris`.

pub mod app;
pub mod canvas;
pub mod channel;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod sender;
