//! A pixel coordinate on a bitmap.

use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate. May lie outside the canvas.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// row index, bounded by the canvas height.
    pub row: i32,
    /// column index, bounded by the canvas width.
    pub col: i32,
}

impl Point {
    /// Construct a point at (row, col).
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Point {
        Point { row, col }
    }

    /// Offsets the point, failing on `i32` overflow.
    #[must_use]
    pub fn checked_offset(self, d_row: i32, d_col: i32) -> Option<Point> {
        Some(Point::new(
            self.row.checked_add(d_row)?,
            self.col.checked_add(d_col)?,
        ))
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Self {
        Point::new(row, col)
    }
}

impl From<[i32; 2]> for Point {
    fn from([row, col]: [i32; 2]) -> Self {
        Point::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_offset() {
        assert_eq!(Point::new(2, 2).checked_offset(4, 0), Some(Point::new(6, 2)));
        assert_eq!(Point::new(i32::MAX, 0).checked_offset(1, 0), None);
        assert_eq!(Point::new(0, i32::MIN).checked_offset(0, -1), None);
    }

    #[test]
    fn test_from_tuple_and_array() {
        assert_eq!(Point::from((1, 2)), Point::new(1, 2));
        assert_eq!(Point::from([3, 4]), Point { row: 3, col: 4 });
    }
}
