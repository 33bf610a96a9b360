//! Board-to-text formatting, kept free of terminal I/O so it stays testable.

use crate::{pos, Board, Frame, Pos};

pub const LIVE_GLYPH: &str = "🟨 ";
pub const DEAD_GLYPH: &str = "⬛ ";

/// One text line per board row.
pub fn render_board(board: &Board) -> Vec<String> {
    let size = board.size() as i32;
    (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    if board.get(pos!(row, col)).is_alive() {
                        LIVE_GLYPH
                    } else {
                        DEAD_GLYPH
                    }
                })
                .collect()
        })
        .collect()
}

/// The full per-generation report: a header line, the board rows and, once a
/// fixed point is reached, the terminal line.
pub fn render_frame(frame: &Frame) -> Vec<String> {
    let mut lines = vec![format!("Generation {}:", frame.generation)];
    lines.extend(render_board(&frame.board));
    if frame.converged {
        lines.push("Game over!".to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn renders_one_line_per_row() {
        let mut board = Board::new(2).unwrap();
        board.set(pos!(0, 1), Cell::alive());
        assert_eq!(render_board(&board), vec!["⬛ 🟨 ", "⬛ ⬛ "]);
    }

    #[test]
    fn running_frames_carry_a_generation_header() {
        let frame = Frame {
            board: Board::new(1).unwrap(),
            generation: 7,
            converged: false,
        };
        let lines = render_frame(&frame);
        assert_eq!(lines[0], "Generation 7:");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn converged_frames_end_with_game_over() {
        let frame = Frame {
            board: Board::new(1).unwrap(),
            generation: 3,
            converged: true,
        };
        let lines = render_frame(&frame);
        assert_eq!(lines.last().unwrap(), "Game over!");
    }
}
