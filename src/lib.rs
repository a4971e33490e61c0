//! TUI Blockfall.
//!
//! A terminal block-stacking game: a fixed-tick simulation loop, a falling
//! piece driven by a background input-reader thread through a shared command
//! channel, and a plain character-grid renderer.
//!
//! Layering mirrors the module tree: `core` is pure simulation with no I/O,
//! `input` owns the reader thread and the command channel, `term` owns the
//! terminal, and `types` holds the shared enums and constants.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
