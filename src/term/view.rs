//! View: maps a composed frame into text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::cell::Cell;

/// Chunk a row-major frame into `height` printable rows of `width` symbols.
pub fn frame_lines(frame: &[Cell], width: i16) -> Vec<String> {
    frame
        .chunks(width as usize)
        .map(|row| row.iter().map(|c| c.value).collect())
        .collect()
}

/// The two status lines printed under the board.
pub fn status_lines(points: u32, queued: &str) -> [String; 2] {
    [
        format!("Points earned: {}", points),
        format!("Commands queued: {}", queued),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::{Field, FieldSize};

    #[test]
    fn test_frame_lines_chunk_row_major() {
        let size = FieldSize::new(4, 3).unwrap();
        let field = Field::new(size);
        let lines = frame_lines(field.cells(), size.width());

        assert_eq!(lines, vec!["####", "#  #", "####"]);
    }

    #[test]
    fn test_status_lines_format() {
        let [points, queued] = status_lines(300, "Left,Down");
        assert_eq!(points, "Points earned: 300");
        assert_eq!(queued, "Commands queued: Left,Down");
    }

    #[test]
    fn test_status_lines_with_empty_queue() {
        let [_, queued] = status_lines(0, "");
        assert_eq!(queued, "Commands queued: ");
    }
}
