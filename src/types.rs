//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Field dimension limits enforced at construction time.
pub const MIN_FIELD_WIDTH: i16 = 2;
pub const MAX_FIELD_WIDTH: i16 = 50;
pub const MIN_FIELD_HEIGHT: i16 = 2;
pub const MAX_FIELD_HEIGHT: i16 = 100;

/// Default board: a classic 10-column interior plus the two border columns.
pub const DEFAULT_FIELD_WIDTH: i16 = 12;
pub const DEFAULT_FIELD_HEIGHT: i16 = 20;

/// Game timing (in milliseconds)
pub const TICK_MS: u64 = 400;
pub const INPUT_POLL_MS: u64 = 100;

/// Scoring
pub const POINTS_PER_ROW: u32 = 100;

/// The two border columns excluded from full-row detection.
pub const BORDER_COLUMNS: i16 = 2;

/// Vertical step applied by the fast-drop (`Down`) command.
pub const FAST_DROP_STEP: i16 = 2;

/// Number of rotation states a piece cycles through.
pub const ROTATION_STATES: u8 = 4;

/// Display symbols
pub const EMPTY_VALUE: char = ' ';
pub const BORDER_VALUE: char = '#';
/// Transient marked-for-removal sentinel, shown for one tick before a
/// completed row collapses.
pub const MARKED_VALUE: char = 'O';

/// Piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Square,
    Stick,
    ZLeft,
    ZRight,
    LLeft,
    LRight,
}

impl PieceKind {
    /// All kinds, in spawn-table order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Square,
        PieceKind::Stick,
        PieceKind::ZLeft,
        PieceKind::ZRight,
        PieceKind::LLeft,
        PieceKind::LRight,
    ];

    /// Display symbol for locked and falling cells of this kind.
    ///
    /// `'O'` is reserved for [`MARKED_VALUE`], so Square renders as `'Q'`.
    pub fn symbol(&self) -> char {
        match self {
            PieceKind::Square => 'Q',
            PieceKind::Stick => 'I',
            PieceKind::ZLeft => 'Z',
            PieceKind::ZRight => 'S',
            PieceKind::LLeft => 'J',
            PieceKind::LRight => 'L',
        }
    }
}

/// Player commands produced by the input reader and consumed by the loop,
/// at most one per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Left,
    Right,
    Down,
    Rotate,
    Pause,
    Reset,
    Exit,
}

impl Command {
    /// Name used in the `Commands queued:` status line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Left => "Left",
            Command::Right => "Right",
            Command::Down => "Down",
            Command::Rotate => "Rotate",
            Command::Pause => "Pause",
            Command::Reset => "Reset",
            Command::Exit => "Exit",
        }
    }
}
