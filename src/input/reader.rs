//! Input reader - the background producer thread.
//!
//! Continuously polls the terminal for key events and pushes mapped commands
//! into the shared channel. The poll timeout doubles as the idle backoff, so
//! the thread re-checks the run flag at least once per backoff interval and
//! exits promptly when the driver clears it after the game loop returns.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::input::channel::CommandChannel;
use crate::input::map::map_key;
use crate::types::INPUT_POLL_MS;

/// Spawn the reader thread. It runs until `running` is cleared or the
/// terminal event stream fails.
pub fn spawn_input_reader(
    channel: Arc<CommandChannel>,
    running: Arc<AtomicBool>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let backoff = Duration::from_millis(INPUT_POLL_MS);

        while running.load(Ordering::SeqCst) {
            match event::poll(backoff) {
                Ok(true) => {
                    let Ok(Event::Key(key)) = event::read() else {
                        continue;
                    };
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if let Some(command) = map_key(key) {
                        channel.push(command);
                    }
                }
                Ok(false) => {
                    // Idle: the poll timeout already served as the backoff.
                }
                Err(_) => break,
            }
        }
    })
}
