//! Shape templates - per-kind, per-rotation cell layouts.
//!
//! Each template is the piece's full bounding box, written top row first,
//! with `X` for solid cells and `.` for the empty filler cells that travel
//! with the piece. Filler cells matter: they take part in frame composition
//! (where they must never erase a filled coordinate) and are skipped by
//! occupancy tests.
//!
//! Square has a single effective shape; Stick, ZLeft and ZRight alternate
//! two shapes every other state; LLeft and LRight have four distinct shapes.

use arrayvec::ArrayVec;

use crate::core::cell::Cell;
use crate::types::{PieceKind, EMPTY_VALUE, ROTATION_STATES};

/// Cells generated from one template. The largest bounding box is 3x2,
/// so eight slots is enough for every shape.
pub type PieceCells = ArrayVec<Cell, 8>;

/// One rotation state's layout.
#[derive(Debug)]
pub struct ShapeTemplate {
    rows: &'static [&'static str],
}

impl ShapeTemplate {
    pub fn width(&self) -> i16 {
        self.rows[0].len() as i16
    }

    pub fn height(&self) -> i16 {
        self.rows.len() as i16
    }

    /// Emit the template's cells, zero-anchored at the bounding box's
    /// bottom-left corner. Solid cells carry `value`, fillers the empty marker.
    pub fn emit(&self, value: char, out: &mut PieceCells) {
        out.clear();
        for (row, line) in self.rows.iter().enumerate() {
            let y = self.height() - 1 - row as i16;
            for (x, ch) in line.chars().enumerate() {
                let v = if ch == 'X' { value } else { EMPTY_VALUE };
                out.push(Cell::new(x as i16, y, v));
            }
        }
    }
}

static SQUARE: ShapeTemplate = ShapeTemplate {
    rows: &[
        "XX", //
        "XX",
    ],
};

static STICK_FLAT: ShapeTemplate = ShapeTemplate { rows: &["XXXX"] };

static STICK_TALL: ShapeTemplate = ShapeTemplate {
    rows: &[
        "X", //
        "X", //
        "X", //
        "X",
    ],
};

static Z_LEFT_FLAT: ShapeTemplate = ShapeTemplate {
    rows: &[
        ".XX", //
        "XX.",
    ],
};

static Z_LEFT_TALL: ShapeTemplate = ShapeTemplate {
    rows: &[
        "X.", //
        "XX", //
        ".X",
    ],
};

static Z_RIGHT_FLAT: ShapeTemplate = ShapeTemplate {
    rows: &[
        "XX.", //
        ".XX",
    ],
};

static Z_RIGHT_TALL: ShapeTemplate = ShapeTemplate {
    rows: &[
        ".X", //
        "XX", //
        "X.",
    ],
};

static L_LEFT_0: ShapeTemplate = ShapeTemplate {
    rows: &[
        "X..", //
        "XXX",
    ],
};

static L_LEFT_1: ShapeTemplate = ShapeTemplate {
    rows: &[
        "XX", //
        "X.", //
        "X.",
    ],
};

static L_LEFT_2: ShapeTemplate = ShapeTemplate {
    rows: &[
        "XXX", //
        "..X",
    ],
};

static L_LEFT_3: ShapeTemplate = ShapeTemplate {
    rows: &[
        ".X", //
        ".X", //
        "XX",
    ],
};

static L_RIGHT_0: ShapeTemplate = ShapeTemplate {
    rows: &[
        "..X", //
        "XXX",
    ],
};

static L_RIGHT_1: ShapeTemplate = ShapeTemplate {
    rows: &[
        "X.", //
        "X.", //
        "XX",
    ],
};

static L_RIGHT_2: ShapeTemplate = ShapeTemplate {
    rows: &[
        "XXX", //
        "X..",
    ],
};

static L_RIGHT_3: ShapeTemplate = ShapeTemplate {
    rows: &[
        "XX", //
        ".X", //
        ".X",
    ],
};

/// Look up the template for a kind and rotation state.
pub fn template(kind: PieceKind, state: u8) -> &'static ShapeTemplate {
    let state = state % ROTATION_STATES;
    match kind {
        PieceKind::Square => &SQUARE,
        PieceKind::Stick => {
            if state % 2 == 0 {
                &STICK_FLAT
            } else {
                &STICK_TALL
            }
        }
        PieceKind::ZLeft => {
            if state % 2 == 0 {
                &Z_LEFT_FLAT
            } else {
                &Z_LEFT_TALL
            }
        }
        PieceKind::ZRight => {
            if state % 2 == 0 {
                &Z_RIGHT_FLAT
            } else {
                &Z_RIGHT_TALL
            }
        }
        PieceKind::LLeft => match state {
            0 => &L_LEFT_0,
            1 => &L_LEFT_1,
            2 => &L_LEFT_2,
            _ => &L_LEFT_3,
        },
        PieceKind::LRight => match state {
            0 => &L_RIGHT_0,
            1 => &L_RIGHT_1,
            2 => &L_RIGHT_2,
            _ => &L_RIGHT_3,
        },
    }
}

/// Declared bounding width of a kind's rotation state.
pub fn shape_width(kind: PieceKind, state: u8) -> i16 {
    template(kind, state).width()
}
