//! TerminalRenderer: flushes composed frames to a real terminal.
//!
//! The drawing API is intentionally small: one full redraw per tick, queued
//! through crossterm and flushed once. Raw mode is required because the
//! input reader consumes key events rather than cooked lines.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::Print,
    terminal::{self, Clear, ClearType},
    QueueableCommand,
};

use crate::term::view::status_lines;

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw one frame: the board rows followed by the two status lines.
    pub fn draw(&mut self, lines: &[String], points: u32, queued: &str) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.queue(Clear(ClearType::All))?;

        for line in lines {
            self.stdout.queue(Print(line))?;
            self.stdout.queue(Print("\r\n"))?;
        }
        for line in status_lines(points, queued) {
            self.stdout.queue(Print(line))?;
            self.stdout.queue(Print("\r\n"))?;
        }

        self.stdout.flush()?;
        Ok(())
    }

    /// Clear the screen and print the goodbye line shown on `Exit`.
    pub fn farewell(&mut self) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.queue(Clear(ClearType::All))?;
        self.stdout.queue(Print("BYE! THANK YOU!\r\n"))?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
