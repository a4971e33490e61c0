//! Terminal Blockfall runner.
//!
//! Wires the two actors together: the input-reader thread feeds the shared
//! command channel, and this thread drives the fixed-tick game loop and the
//! renderer. The loop runs until an `Exit` command is consumed; the run flag
//! then stops the reader so the terminal can be restored cleanly.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;

use tui_blockfall::core::{FieldSize, Game, Tick};
use tui_blockfall::input::{spawn_input_reader, CommandChannel};
use tui_blockfall::term::{frame_lines, TerminalRenderer};
use tui_blockfall::types::{DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH, TICK_MS};

fn main() -> Result<()> {
    let size = FieldSize::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT)?;
    let channel = Arc::new(CommandChannel::new());
    let running = Arc::new(AtomicBool::new(true));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let reader = spawn_input_reader(channel.clone(), running.clone());
    let result = run(&mut term, &channel, size);

    // The loop has returned; stop the reader before giving the terminal back.
    running.store(false, Ordering::SeqCst);
    let _ = reader.join();
    let _ = term.exit();

    result
}

fn run(term: &mut TerminalRenderer, channel: &CommandChannel, size: FieldSize) -> Result<()> {
    let mut game = Game::new(size, clock_seed());
    let tick = Duration::from_millis(TICK_MS);

    loop {
        if game.tick(channel) == Tick::Exit {
            term.farewell()?;
            return Ok(());
        }

        let frame = game.frame();
        let lines = frame_lines(&frame, size.width());
        term.draw(&lines, game.score(), game.queued_log())?;

        thread::sleep(tick);
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
