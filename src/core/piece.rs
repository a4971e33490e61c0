//! Piece - the falling figure's state machine.
//!
//! A piece is fully described by (kind, rotation state, anchor). Its cell set
//! is never mutated in place: every move or rotation regenerates the cells
//! from the shape template and translates them by the anchor, so the cells
//! are always consistent with the current state.
//!
//! Movement operations deliberately perform no bounds or collision checks;
//! the game loop validates a move before applying it.

use crate::core::cell::Cell;
use crate::core::field::FieldSize;
use crate::core::rng::SimpleRng;
use crate::core::shapes::{shape_width, template, PieceCells};
use crate::types::{PieceKind, ROTATION_STATES};

#[derive(Debug, Clone)]
pub struct Piece {
    size: FieldSize,
    rng: SimpleRng,
    kind: PieceKind,
    state: u8,
    anchor_x: i16,
    anchor_y: i16,
    width: i16,
    cells: PieceCells,
}

impl Piece {
    /// Create a piece over an already-validated field, spawning immediately.
    pub fn new(size: FieldSize, seed: u32) -> Self {
        let mut piece = Self {
            size,
            rng: SimpleRng::new(seed),
            kind: PieceKind::Square,
            state: 0,
            anchor_x: 1,
            anchor_y: size.height(),
            width: 0,
            cells: PieceCells::new(),
        };
        piece.respawn();
        piece
    }

    /// Replace the piece with a fresh random one at the top of the field.
    ///
    /// Kind and rotation state are uniform; the horizontal spawn offset is
    /// uniform over the anchors that keep the shape inside the side borders.
    pub fn respawn(&mut self) {
        self.kind = PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize];
        self.state = self.rng.next_range(ROTATION_STATES as u32) as u8;
        self.width = shape_width(self.kind, self.state);

        let span = self.size.width() - self.width - 1;
        self.anchor_x = if span > 0 {
            1 + self.rng.next_range(span as u32) as i16
        } else {
            1
        };
        self.anchor_y = self.size.height();

        self.regenerate();
    }

    pub fn move_down(&mut self, step: i16) {
        self.anchor_y -= step;
        self.regenerate();
    }

    pub fn move_left(&mut self, step: i16) {
        self.anchor_x -= step;
        self.regenerate();
    }

    /// Move one column right. The fast-repeat multiplier never applies to
    /// rightward movement.
    pub fn move_right(&mut self) {
        self.anchor_x += 1;
        self.regenerate();
    }

    /// Whether the next rotation state fits against the right border.
    ///
    /// This checks only the right boundary; the left boundary and collision
    /// with settled cells are not examined.
    pub fn can_rotate(&self) -> bool {
        let next = (self.state + 1) % ROTATION_STATES;
        let next_width = shape_width(self.kind, next);
        self.anchor_x + next_width <= self.size.width() - 1
    }

    /// Commit the next rotation state. Callers check [`Piece::can_rotate`]
    /// first; this does not re-validate.
    pub fn rotate(&mut self) {
        self.state = (self.state + 1) % ROTATION_STATES;
        self.regenerate();
    }

    /// Position the piece explicitly. A seam for tests and scripted setups.
    pub fn place(&mut self, kind: PieceKind, state: u8, anchor_x: i16, anchor_y: i16) {
        self.kind = kind;
        self.state = state % ROTATION_STATES;
        self.anchor_x = anchor_x;
        self.anchor_y = anchor_y;
        self.regenerate();
    }

    /// Rebuild the cell set from the template and translate by the anchor.
    fn regenerate(&mut self) {
        let tpl = template(self.kind, self.state);
        self.width = tpl.width();
        tpl.emit(self.kind.symbol(), &mut self.cells);
        for cell in &mut self.cells {
            cell.x += self.anchor_x;
            cell.y += self.anchor_y;
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation_state(&self) -> u8 {
        self.state
    }

    pub fn anchor_x(&self) -> i16 {
        self.anchor_x
    }

    pub fn anchor_y(&self) -> i16 {
        self.anchor_y
    }

    pub fn width(&self) -> i16 {
        self.width
    }

    /// Current RNG state, used to reseed the session on reset.
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }
}
