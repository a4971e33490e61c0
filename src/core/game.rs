//! Game - the per-tick orchestrator.
//!
//! One call to [`Game::tick`] is one simulation tick, in strict phase order:
//! collapse rows marked last tick, else detect and mark newly full rows,
//! else lock or advance the falling piece and then apply at most one queued
//! command. Frame composition is separate so the driver can render after
//! every tick, including the "resting" ones.
//!
//! The game owns no I/O and no clock; the binary supplies the command
//! channel, the renderer and the tick sleep.

use crate::core::cell::Cell;
use crate::core::field::{Field, FieldSize};
use crate::core::piece::Piece;
use crate::core::pile::{PendingClear, Pile};
use crate::input::channel::CommandChannel;
use crate::types::{Command, EMPTY_VALUE, FAST_DROP_STEP, POINTS_PER_ROW};

/// Outcome of a tick, as seen by the driving loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    /// An `Exit` command was consumed; the driver leaves the loop.
    Exit,
}

/// Touchdown test: the piece locks when any of its occupied cells sits
/// directly above an occupied pile cell in the same column, or when its
/// anchor has reached the floor.
pub fn touches_down(piece: &Piece, pile: &Pile) -> bool {
    for figure_cell in piece.cells() {
        if figure_cell.is_empty() {
            continue;
        }
        for ground_cell in pile.cells() {
            if ground_cell.is_empty() {
                continue;
            }
            if ground_cell.x == figure_cell.x && ground_cell.y + 1 == figure_cell.y {
                return true;
            }
        }
    }

    piece.anchor_y() <= 0
}

/// Compose a render frame: the field template overlaid by pile cells, then
/// piece cells ("pseudo z-buffering" - a later cell replaces an earlier one
/// at the same coordinate, except that an empty value never erases a filled
/// one). The result is sorted row-major, top row first.
pub fn compose_frame(field: &Field, pile: &Pile, piece: &Piece) -> Vec<Cell> {
    let mut frame = field.cells().to_vec();

    for cell in pile.cells().iter().chain(piece.cells().iter()) {
        if let Some(idx) = field.index_of(cell.x, cell.y) {
            let old = frame[idx].value;
            frame[idx] = *cell;
            if cell.value == EMPTY_VALUE {
                frame[idx].value = old;
            }
        }
    }

    frame.sort_unstable();
    frame
}

#[derive(Debug)]
pub struct Game {
    field: Field,
    pile: Pile,
    piece: Piece,
    score: u32,
    pending: Option<PendingClear>,
    /// Commands still queued after the last dequeue, for the status line.
    queued_log: String,
}

impl Game {
    pub fn new(size: FieldSize, seed: u32) -> Self {
        Self {
            field: Field::new(size),
            pile: Pile::new(),
            piece: Piece::new(size, seed),
            score: 0,
            pending: None,
            queued_log: String::new(),
        }
    }

    pub fn size(&self) -> FieldSize {
        self.field.size()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn queued_log(&self) -> &str {
        &self.queued_log
    }

    /// Run one simulation tick.
    pub fn tick(&mut self, channel: &CommandChannel) -> Tick {
        // Phase 1: collapse rows marked on the previous tick. The board
        // rests for the remainder of this tick.
        if let Some(pending) = self.pending.take() {
            self.pile.collapse(pending);
            return Tick::Continue;
        }

        // Phase 2: detect and mark newly full rows. Marked cells stay on
        // screen for one tick before collapsing.
        if let Some(pending) = self.pile.mark_full_rows(self.size().row_capacity()) {
            self.score += pending.rows as u32 * POINTS_PER_ROW;
            self.pending = Some(pending);
            return Tick::Continue;
        }

        // Phase 3: lock or advance.
        if touches_down(&self.piece, &self.pile) {
            // Commands queued for the old piece must not leak onto the new one.
            channel.reset();
            self.queued_log.clear();

            self.pile.merge(self.piece.cells());
            self.piece.respawn();
        } else {
            self.piece.move_down(1);
        }

        // Phase 4: at most one command per tick.
        self.handle_command(channel)
    }

    fn handle_command(&mut self, channel: &CommandChannel) -> Tick {
        let Some(taken) = channel.take_one() else {
            return Tick::Continue;
        };

        self.queued_log.clear();
        for (i, command) in taken.queued.iter().enumerate() {
            if i > 0 {
                self.queued_log.push(',');
            }
            self.queued_log.push_str(command.as_str());
        }

        // Boundary guards are advisory: a move that would leave the board
        // is simply not applied.
        match taken.command {
            Command::Down => {
                if self.piece.anchor_y() > 1 {
                    self.piece.move_down(FAST_DROP_STEP);
                }
            }
            Command::Left => {
                if self.piece.anchor_x() > 1 {
                    self.piece.move_left(taken.multiplier);
                }
            }
            Command::Right => {
                if self.piece.anchor_x() + self.piece.width() < self.size().width() - 1 {
                    self.piece.move_right();
                }
            }
            Command::Rotate => {
                if self.piece.can_rotate() {
                    self.piece.rotate();
                }
            }
            Command::Pause => {
                // Accepted, currently a no-op.
            }
            Command::Reset => self.reset(channel),
            Command::Exit => return Tick::Exit,
        }

        Tick::Continue
    }

    /// Restart the session in place: fresh pile and piece, zero score,
    /// empty channel. The piece RNG continues from its current state so a
    /// reset does not replay the same sequence.
    fn reset(&mut self, channel: &CommandChannel) {
        channel.reset_all();
        let seed = self.piece.rng_state();
        *self = Self::new(self.size(), seed);
    }

    /// Compose the current render frame.
    pub fn frame(&self) -> Vec<Cell> {
        compose_frame(&self.field, &self.pile, &self.piece)
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    #[cfg(test)]
    pub fn piece_mut(&mut self) -> &mut Piece {
        &mut self.piece
    }

    #[cfg(test)]
    pub fn pile_mut(&mut self) -> &mut Pile {
        &mut self.pile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, MARKED_VALUE};

    fn game() -> Game {
        Game::new(FieldSize::new(12, 20).unwrap(), 12345)
    }

    fn fill_row(game: &mut Game, y: i16) {
        for x in 1..=10 {
            game.pile_mut().push(Cell::new(x, y, 'Q'));
        }
    }

    #[test]
    fn test_touchdown_on_pile_cell_directly_below() {
        let mut g = game();
        g.piece_mut().place(PieceKind::Square, 0, 3, 4);
        assert!(!touches_down(g.piece(), g.pile()));

        g.pile_mut().push(Cell::new(3, 3, 'I'));
        assert!(touches_down(g.piece(), g.pile()));
    }

    #[test]
    fn test_touchdown_ignores_empty_pile_cells() {
        let mut g = game();
        g.piece_mut().place(PieceKind::Square, 0, 3, 4);
        g.pile_mut().push(Cell::new(3, 3, EMPTY_VALUE));
        assert!(!touches_down(g.piece(), g.pile()));
    }

    #[test]
    fn test_touchdown_at_floor() {
        let mut g = game();
        g.piece_mut().place(PieceKind::Square, 0, 3, 0);
        assert!(touches_down(g.piece(), g.pile()));
    }

    #[test]
    fn test_piece_advances_one_step_per_tick() {
        let mut g = game();
        let channel = CommandChannel::new();
        let y = g.piece().anchor_y();
        assert_eq!(g.tick(&channel), Tick::Continue);
        assert_eq!(g.piece().anchor_y(), y - 1);
    }

    #[test]
    fn test_lock_merges_and_respawns() {
        let mut g = game();
        let channel = CommandChannel::new();
        channel.push(Command::Left);

        g.piece_mut().place(PieceKind::Square, 0, 3, 0);
        assert_eq!(g.tick(&channel), Tick::Continue);

        // Four solid cells settled, the channel was cleared, and a new
        // piece spawned at the top.
        assert_eq!(g.pile().len(), 4);
        assert!(channel.is_empty());
        assert_eq!(g.piece().anchor_y(), 20);
    }

    #[test]
    fn test_full_row_flashes_then_collapses() {
        let mut g = game();
        let channel = CommandChannel::new();
        fill_row(&mut g, 5);
        g.pile_mut().push(Cell::new(4, 8, 'I'));

        // Mark tick: score awarded, cells flagged, piece untouched.
        let y = g.piece().anchor_y();
        assert_eq!(g.tick(&channel), Tick::Continue);
        assert_eq!(g.score(), 100);
        assert_eq!(g.piece().anchor_y(), y);
        assert!(g.pile().cells().iter().any(|c| c.value == MARKED_VALUE));

        // Collapse tick: marked row gone, survivor shifted down, still no
        // piece movement.
        assert_eq!(g.tick(&channel), Tick::Continue);
        assert_eq!(g.piece().anchor_y(), y);
        assert_eq!(g.pile().len(), 1);
        assert_eq!(g.pile().cells()[0], Cell::new(4, 7, 'I'));

        // Next tick resumes the descent.
        assert_eq!(g.tick(&channel), Tick::Continue);
        assert_eq!(g.piece().anchor_y(), y - 1);
    }

    #[test]
    fn test_marked_tick_consumes_no_command() {
        let mut g = game();
        let channel = CommandChannel::new();
        fill_row(&mut g, 3);
        channel.push(Command::Left);

        g.tick(&channel); // mark
        g.tick(&channel); // collapse
        assert_eq!(channel.len(), 1, "flash and collapse ticks skip input");
    }

    #[test]
    fn test_exit_command_leaves_the_loop() {
        let mut g = game();
        let channel = CommandChannel::new();
        channel.push(Command::Exit);
        assert_eq!(g.tick(&channel), Tick::Exit);
    }

    #[test]
    fn test_reset_clears_score_pile_and_channel() {
        let mut g = game();
        let channel = CommandChannel::new();
        fill_row(&mut g, 2);
        g.tick(&channel); // mark: score 100
        g.tick(&channel); // collapse
        assert!(g.score() > 0);

        channel.push(Command::Reset);
        channel.push(Command::Pause);
        assert_eq!(g.tick(&channel), Tick::Continue);
        assert_eq!(g.score(), 0);
        assert!(g.pile().is_empty());
        assert!(channel.is_empty());
    }

    #[test]
    fn test_down_command_fast_drops_two_steps() {
        let mut g = game();
        let channel = CommandChannel::new();
        g.piece_mut().place(PieceKind::Square, 0, 3, 10);
        channel.push(Command::Down);

        g.tick(&channel);
        // One gravity step plus the fast drop.
        assert_eq!(g.piece().anchor_y(), 10 - 1 - FAST_DROP_STEP);
    }

    #[test]
    fn test_down_command_is_guarded_near_floor() {
        let mut g = game();
        let channel = CommandChannel::new();
        g.piece_mut().place(PieceKind::Square, 0, 3, 2);
        channel.push(Command::Down);

        g.tick(&channel);
        // Gravity took it to 1; the fast drop is refused there.
        assert_eq!(g.piece().anchor_y(), 1);
    }

    #[test]
    fn test_left_command_applies_multiplier() {
        let mut g = game();
        let channel = CommandChannel::new();
        g.piece_mut().place(PieceKind::Square, 0, 6, 10);

        // Three identical pushes: two enqueued, the third collapses into
        // the multiplier.
        channel.push(Command::Left);
        channel.push(Command::Left);
        channel.push(Command::Left);

        g.tick(&channel);
        assert_eq!(g.piece().anchor_x(), 4, "first Left moves by multiplier 2");

        g.tick(&channel);
        assert_eq!(g.piece().anchor_x(), 3, "second Left moves by reset multiplier 1");
    }

    #[test]
    fn test_right_command_ignores_multiplier() {
        let mut g = game();
        let channel = CommandChannel::new();
        g.piece_mut().place(PieceKind::Square, 0, 3, 10);

        channel.push(Command::Right);
        channel.push(Command::Right);
        channel.push(Command::Right);

        g.tick(&channel);
        assert_eq!(g.piece().anchor_x(), 4, "Right always steps one column");
    }

    #[test]
    fn test_right_command_guarded_at_border() {
        let mut g = game();
        let channel = CommandChannel::new();
        // Square (width 2) at anchor 9 on a 12-wide field: 9 + 2 == 11.
        g.piece_mut().place(PieceKind::Square, 0, 9, 10);
        channel.push(Command::Right);

        g.tick(&channel);
        assert_eq!(g.piece().anchor_x(), 9);
    }

    #[test]
    fn test_queued_log_records_remaining_commands() {
        let mut g = game();
        let channel = CommandChannel::new();
        channel.push(Command::Left);
        channel.push(Command::Down);
        channel.push(Command::Rotate);

        g.tick(&channel);
        assert_eq!(g.queued_log(), "Down,Rotate");
    }

    #[test]
    fn test_frame_overlay_keeps_filled_over_empty() {
        let mut g = game();
        // A pile cell under the piece's empty filler corner must survive
        // composition.
        g.pile_mut().push(Cell::new(2, 2, 'X'));
        // ZLeft flat has an empty filler at its bottom-right corner (2, 0)
        // relative to the anchor: anchor (0, 2) drops that filler on (2, 2).
        g.piece_mut().place(PieceKind::ZLeft, 0, 0, 2);

        let frame = g.frame();
        let field = Field::new(g.size());
        let idx = field.index_of(2, 2).unwrap();
        assert_eq!(frame[idx].value, 'X');
    }

    #[test]
    fn test_frame_is_sorted_row_major() {
        let g = game();
        let frame = g.frame();
        assert_eq!(frame.len(), g.size().cell_count());
        let mut sorted = frame.clone();
        sorted.sort();
        assert_eq!(frame, sorted);
    }
}
