//! Input module - the producer side of the game's two actors.
//!
//! - [`channel`]: the mutex-guarded command queue shared with the game loop
//! - [`map`]: the fixed key-to-command table
//! - [`reader`]: the background thread that polls the terminal

pub mod channel;
pub mod map;
pub mod reader;

pub use channel::{CommandChannel, TakenCommand};
pub use map::map_key;
pub use reader::spawn_input_reader;
