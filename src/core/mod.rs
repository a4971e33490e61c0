//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI or terminal I/O; the binary wires it to
//! the command channel and the renderer.

pub mod cell;
pub mod field;
pub mod game;
pub mod piece;
pub mod pile;
pub mod rng;
pub mod shapes;

// Re-export commonly used types
pub use cell::Cell;
pub use field::{Field, FieldSize, FieldSizeError};
pub use game::{compose_frame, touches_down, Game, Tick};
pub use piece::Piece;
pub use pile::{PendingClear, Pile};
pub use rng::SimpleRng;
