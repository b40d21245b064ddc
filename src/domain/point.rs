use std::fmt;

/// Row/column address of a cell.
/// Coordinates are signed so positions left of or above the board can be
/// expressed; the board simply reports them as absent.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

/// Moore neighborhood offsets as (row, col) deltas
#[rustfmt::skip]
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Shift this point by a (row, col) delta, saturating at the i32 limits
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row.saturating_add(d_row), self.col.saturating_add(d_col))
    }

    /// All eight surrounding points, with no bounds filtering
    pub fn surrounding(self) -> impl Iterator<Item = Point> {
        MOORE_OFFSETS
            .into_iter()
            .map(move |(d_row, d_col)| self.offset(d_row, d_col))
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surrounding_excludes_self() {
        let center = Point::new(4, 7);
        let around: Vec<_> = center.surrounding().collect();
        assert_eq!(around.len(), 8);
        assert!(!around.contains(&center));
        assert!(around.contains(&Point::new(3, 6)));
        assert!(around.contains(&Point::new(5, 8)));
    }

    #[test]
    fn test_offset_saturates() {
        let corner = Point::new(i32::MAX, i32::MIN);
        assert_eq!(corner.offset(1, -1), corner);
        assert_eq!(corner.surrounding().count(), 8);
    }

    #[test]
    fn test_from_tuple() {
        assert_eq!(Point::from((2, -1)), Point::new(2, -1));
        assert_eq!(Point::new(2, -1).to_string(), "(2, -1)");
    }
}
