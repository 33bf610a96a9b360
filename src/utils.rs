use std::ops::{Add, Sub};

/// A board coordinate or offset, addressed `(row, col)` from the top-left
/// corner. Signed so that neighbor offsets past the board edges stay
/// representable until they are filtered out.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

#[macro_export]
macro_rules! pos {
    ($row:expr, $col:expr) => {
        Pos {
            row: $row,
            col: $col,
        }
    };
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Pos {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        pos!(self.row - rhs.row, self.col - rhs.col)
    }
}

#[test]
fn test_pos_arithmetic() {
    assert_eq!(pos!(2, 3) + pos!(-1, 1), pos!(1, 4));
    assert_eq!(pos!(2, 3) - pos!(1, 1), pos!(1, 2));
    assert_eq!(pos!(0, 0) + pos!(-1, -1), pos!(-1, -1));
}
