//! Terminal module - rendering to a monochrome character grid.
//!
//! [`view`] turns composed frames into text lines and is pure; [`renderer`]
//! owns the terminal (raw mode, alternate screen) and flushes the lines.

pub mod renderer;
pub mod view;

pub use renderer::TerminalRenderer;
pub use view::{frame_lines, status_lines};
