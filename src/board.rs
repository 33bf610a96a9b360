use thiserror::Error;

use crate::{pos, Pos};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size must be positive")]
    InvalidSize,
    #[error("position ({0:?}) is outside the board")]
    OutOfBounds(Pos),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    alive: bool,
}

impl Cell {
    pub fn alive() -> Self {
        Self { alive: true }
    }

    pub fn dead() -> Self {
        Self { alive: false }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

/// A square grid of cells with a dimension fixed at construction. Cells
/// outside `[0, size)` in either axis do not exist; there is no wrap-around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an all-dead board of `size` rows by `size` columns.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize);
        }
        let cells = vec![Cell::dead(); size * size];
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Pos) -> bool {
        let size = self.size as i32;
        (0..size).contains(&pos.row) && (0..size).contains(&pos.col)
    }

    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.size + pos.col as usize
    }

    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Pos, cell: Cell) {
        let index = self.index(pos);
        self.cells[index] = cell;
    }

    /// Every position of the board, in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size as i32;
        (0..size).flat_map(move |row| (0..size).map(move |col| pos!(row, col)))
    }

    /// The in-bounds grid-adjacent positions of `pos`. Corner cells yield 3,
    /// edge cells 5, interior cells 8.
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        (-1..=1)
            .flat_map(|row| (-1..=1).map(move |col| pos!(row, col)))
            .filter(|offset| *offset != pos!(0, 0))
            .map(move |offset| pos + offset)
            .filter(|neighbor| self.contains(*neighbor))
    }

    pub fn live_neighbors(&self, pos: Pos) -> usize {
        self.neighbors(pos)
            .filter(|neighbor| self.get(*neighbor).is_alive())
            .count()
    }

    pub fn actives(&self) -> Vec<Pos> {
        self.positions()
            .filter(|pos| self.get(*pos).is_alive())
            .collect()
    }
}

/// The reference seed pattern: a glider headed for the bottom-right corner.
pub fn glider() -> Vec<Pos> {
    vec![pos!(1, 2), pos!(2, 3), pos!(3, 1), pos!(3, 2), pos!(3, 3)]
}

/// A 2x2 still life with its top-left cell at `origin`.
pub fn block(origin: Pos) -> Vec<Pos> {
    vec![
        origin,
        origin + pos!(0, 1),
        origin + pos!(1, 0),
        origin + pos!(1, 1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(Board::new(0).unwrap_err(), BoardError::InvalidSize);
    }

    #[test]
    fn new_boards_are_all_dead() {
        let board = Board::new(4).unwrap();
        assert!(board.actives().is_empty());
    }

    #[test]
    fn corner_cells_have_three_neighbor_candidates() {
        let board = Board::new(5).unwrap();
        for corner in [pos!(0, 0), pos!(0, 4), pos!(4, 0), pos!(4, 4)] {
            assert_eq!(board.neighbors(corner).count(), 3);
        }
    }

    #[test]
    fn edge_cells_have_five_neighbor_candidates() {
        let board = Board::new(5).unwrap();
        assert_eq!(board.neighbors(pos!(0, 2)).count(), 5);
        assert_eq!(board.neighbors(pos!(2, 4)).count(), 5);
    }

    #[test]
    fn interior_cells_have_eight_neighbor_candidates() {
        let board = Board::new(3).unwrap();
        assert_eq!(board.neighbors(pos!(1, 1)).count(), 8);
    }

    #[test]
    fn neighbor_enumeration_stays_in_bounds_for_all_sizes() {
        for size in 1..=50 {
            let board = Board::new(size).unwrap();
            for pos in board.positions() {
                assert!(board.neighbors(pos).count() <= 8);
                for neighbor in board.neighbors(pos) {
                    assert!(board.contains(neighbor));
                }
            }
        }
    }

    #[test]
    fn live_neighbors_counts_only_alive_cells() {
        let mut board = Board::new(4).unwrap();
        board.set(pos!(0, 0), Cell::alive());
        board.set(pos!(1, 1), Cell::alive());
        board.set(pos!(3, 3), Cell::alive());
        assert_eq!(board.live_neighbors(pos!(0, 1)), 2);
        assert_eq!(board.live_neighbors(pos!(0, 0)), 1);
        assert_eq!(board.live_neighbors(pos!(3, 3)), 0);
    }

    #[test]
    fn actives_reports_seeds_in_row_major_order() {
        let mut board = Board::new(5).unwrap();
        for seed in glider() {
            board.set(seed, Cell::alive());
        }
        assert_eq!(board.actives(), glider());
    }
}
