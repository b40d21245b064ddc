use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::{BoardError, Point, Status};

/// Board holds a fixed-size grid of cells, stored row-major.
/// Every edit returns a new board, so a caller never observes a
/// half-updated grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Status>,
}

impl Board {
    /// Create a new board with all cells dead
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let len = Self::checked_len(rows, cols)?;
        Ok(Self::from_parts(rows, cols, vec![Status::Dead; len]))
    }

    /// Cell count for the given dimensions.
    /// Both sides must be positive and addressable by a `Point`.
    fn checked_len(rows: usize, cols: usize) -> Result<usize, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::EmptyDimensions { rows, cols });
        }
        let max_side = i32::MAX as usize;
        if rows > max_side || cols > max_side {
            return Err(BoardError::TooLarge { rows, cols });
        }
        rows.checked_mul(cols)
            .ok_or(BoardError::TooLarge { rows, cols })
    }

    /// Build a board from rows of cells.
    /// The first row fixes the column count; every other row must match it.
    pub fn from_rows<R: AsRef<[Status]>>(grid: &[R]) -> Result<Self, BoardError> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, |row| row.as_ref().len());
        Self::checked_len(rows, cols)?;

        if let Some((row, found)) = grid
            .iter()
            .map(|row| row.as_ref().len())
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(BoardError::RaggedRows {
                row,
                expected: cols,
                found,
            });
        }

        let cells = grid
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        Ok(Self::from_parts(rows, cols, cells))
    }

    fn from_parts(rows: usize, cols: usize, cells: Vec<Status>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols, "cell count must match dimensions");
        Self { rows, cols, cells }
    }

    /// Get board dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert a point to its index in the backing vector, if it is on the board
    fn index(&self, point: Point) -> Option<usize> {
        let row = usize::try_from(point.row).ok().filter(|&r| r < self.rows)?;
        let col = usize::try_from(point.col).ok().filter(|&c| c < self.cols)?;
        Some(row * self.cols + col)
    }

    /// Check whether a point addresses a cell of this board
    pub fn contains(&self, point: Point) -> bool {
        self.index(point).is_some()
    }

    /// Get the cell at a point, or `None` when the point is off the board
    pub fn get(&self, point: Point) -> Option<Status> {
        self.index(point).map(|idx| self.cells[idx])
    }

    /// Return a copy of this board with one cell replaced.
    /// Points off the board are rejected rather than wrapped or clamped.
    pub fn set(&self, point: Point, status: Status) -> Result<Self, BoardError> {
        let idx = self.index(point).ok_or(BoardError::OutOfBounds {
            point,
            rows: self.rows,
            cols: self.cols,
        })?;
        let mut next = self.clone();
        next.cells[idx] = status;
        Ok(next)
    }

    /// Return a board of the same size with every cell dead
    pub fn clear(&self) -> Self {
        Self::from_parts(self.rows, self.cols, vec![Status::Dead; self.cells.len()])
    }

    /// Fill the board at random, each cell alive with probability `density`
    pub fn randomize<R: Rng + ?Sized>(&self, rng: &mut R, density: f64) -> Self {
        // Non-finite densities count as zero
        let density = if density.is_finite() { density.clamp(0.0, 1.0) } else { 0.0 };
        let cells = (0..self.cells.len())
            .map(|_| {
                if rng.random_bool(density) {
                    Status::Alive
                } else {
                    Status::Dead
                }
            })
            .collect();
        Self::from_parts(self.rows, self.cols, cells)
    }

    /// Rebuild the nested row representation
    pub fn to_rows(&self) -> Vec<Vec<Status>> {
        self.cells.chunks(self.cols).map(<[Status]>::to_vec).collect()
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (Point, Status)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(idx, &status)| {
            let point = Point::new((idx / cols) as i32, (idx % cols) as i32);
            (point, status)
        })
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|status| status.is_alive()).count()
    }

    /// Moore neighbors of a point that lie on the board.
    /// The board does not wrap: corners have 3 neighbors and edges 5.
    pub fn neighbors(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        point.surrounding().filter(move |&p| self.contains(p))
    }

    /// Count live neighbors; positions off the board are not counted at all
    pub fn alive_neighbor_count(&self, point: Point) -> u8 {
        self.neighbors(point)
            .filter(|&p| self.get(p).is_some_and(Status::is_alive))
            .count() as u8
    }

    /// Compute the next generation.
    /// Every count reads from `self`, which stays untouched; the new cells are
    /// collected into a fresh vector and only then become a board.
    pub fn next_board(&self) -> Self {
        let cells = self
            .iter_cells()
            .map(|(point, status)| status.next(self.alive_neighbor_count(point)))
            .collect();
        Self::from_parts(self.rows, self.cols, cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.cells.chunks(self.cols).enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            for status in row {
                write!(f, "{}", status.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse the text form produced by `Display`. Blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let grid = s
            .lines()
            .enumerate()
            .map(|(line_idx, line)| (line_idx, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col_idx, c)| {
                        Status::from_symbol(c).ok_or(BoardError::InvalidCell {
                            line: line_idx + 1,
                            column: col_idx + 1,
                            found: c,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(&grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    fn alive_points(board: &Board) -> Vec<Point> {
        board
            .iter_cells()
            .filter(|(_, status)| status.is_alive())
            .map(|(point, _)| point)
            .collect()
    }

    #[test]
    fn test_new_board_is_all_dead() {
        let board = Board::new(3, 4).unwrap();
        let rows = board.to_rows();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.len() == 4));
        assert!(rows.iter().flatten().all(|s| s.is_dead()));
        assert_eq!(board.dimensions(), (3, 4));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Board::new(0, 5),
            Err(BoardError::EmptyDimensions { rows: 0, cols: 5 })
        );
        assert!(Board::new(5, 0).is_err());
        let empty: Vec<Vec<Status>> = Vec::new();
        assert!(Board::from_rows(&empty).is_err());
        assert!(Board::from_rows(&[Vec::<Status>::new()]).is_err());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        assert_eq!(
            Board::new(usize::MAX / 2 + 1, 2),
            Err(BoardError::TooLarge {
                rows: usize::MAX / 2 + 1,
                cols: 2
            })
        );
        let too_wide = i32::MAX as usize + 1;
        assert_eq!(
            Board::new(1, too_wide),
            Err(BoardError::TooLarge { rows: 1, cols: too_wide })
        );
        assert!(Board::new(usize::MAX, usize::MAX).is_err());
    }

    #[test]
    fn test_from_rows_round_trips_to_rows() {
        use Status::{Alive as A, Dead as D};
        let grid = vec![vec![A, D, D], vec![D, A, A]];
        let board = Board::from_rows(&grid).unwrap();
        assert_eq!(board.dimensions(), (2, 3));
        assert_eq!(board.get(Point::new(1, 2)), Some(A));
        assert_eq!(board.to_rows(), grid);
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        use Status::{Alive as A, Dead as D};
        let grid = vec![vec![A, D, D], vec![D, A]];
        assert_eq!(
            Board::from_rows(&grid),
            Err(BoardError::RaggedRows {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let board = Board::new(3, 3).unwrap();
        for point in [(-1, 0), (0, -1), (3, 0), (0, 3), (-5, 10)] {
            assert_eq!(board.get(point.into()), None);
        }
    }

    #[test]
    fn test_set_then_get() {
        let board = Board::new(4, 4).unwrap();
        let point = Point::new(2, 1);
        for status in [Status::Alive, Status::Dead] {
            let updated = board.set(point, status).unwrap();
            assert_eq!(updated.get(point), Some(status));
        }
    }

    #[test]
    fn test_set_leaves_other_cells_alone() {
        let original = board(
            "#.#
             .#.
             ##.",
        );
        let point = Point::new(1, 1);
        let updated = original.set(point, Status::Dead).unwrap();
        for (other, status) in original.iter_cells().filter(|(p, _)| *p != point) {
            assert_eq!(updated.get(other), Some(status));
        }
        // the source board is untouched
        assert_eq!(original.get(point), Some(Status::Alive));
    }

    #[test]
    fn test_set_out_of_bounds_is_rejected() {
        let board = Board::new(2, 2).unwrap();
        let point = Point::new(2, 0);
        assert_eq!(
            board.set(point, Status::Alive),
            Err(BoardError::OutOfBounds {
                point,
                rows: 2,
                cols: 2
            })
        );
        assert!(board.set(Point::new(0, -1), Status::Alive).is_err());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::new(6, 6).unwrap().randomize(&mut rng, 0.5);
        let cleared = board.clear();
        assert_eq!(cleared.population(), 0);
        assert_eq!(cleared.dimensions(), board.dimensions());
        assert_eq!(cleared.clear(), cleared);
    }

    #[test]
    fn test_neighbor_counts_by_position() {
        let board = Board::new(5, 5).unwrap();
        for corner in [(0, 0), (0, 4), (4, 0), (4, 4)] {
            assert_eq!(board.neighbors(corner.into()).count(), 3);
        }
        for edge in [(0, 2), (2, 0), (4, 3), (1, 4)] {
            assert_eq!(board.neighbors(edge.into()).count(), 5);
        }
        for interior in [(1, 1), (2, 2), (3, 3)] {
            assert_eq!(board.neighbors(interior.into()).count(), 8);
        }
    }

    #[test]
    fn test_neighbors_do_not_wrap() {
        let board = board(
            "...#
             ....
             ....
             #...",
        );
        assert_eq!(board.alive_neighbor_count(Point::new(0, 0)), 0);
        assert_eq!(board.alive_neighbor_count(Point::new(3, 3)), 0);
        assert_eq!(board.alive_neighbor_count(Point::new(2, 1)), 1);
    }

    #[test]
    fn test_all_dead_stays_dead() {
        let board = Board::new(3, 3).unwrap();
        assert_eq!(board.next_board(), board);
    }

    #[test]
    fn test_lonely_cell_dies() {
        let board = board(
            "...
             .#.
             ...",
        );
        assert_eq!(board.next_board().population(), 0);
    }

    #[test]
    fn test_birth_from_three_neighbors() {
        let board = board(
            "##.
             #..
             ...",
        );
        let center = Point::new(1, 1);
        assert_eq!(board.alive_neighbor_count(center), 3);
        assert_eq!(board.next_board().get(center), Some(Status::Alive));
    }

    #[test]
    fn test_block_is_still_life() {
        let board = board(
            "##.
             ##.
             ...",
        );
        assert_eq!(board.next_board(), board);
        assert_eq!(board.next_board().next_board(), board);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = board(
            ".....
             .....
             .###.
             .....
             .....",
        );
        let vertical = board(
            ".....
             ..#..
             ..#..
             ..#..
             .....",
        );
        let step_one = horizontal.next_board();
        assert_eq!(step_one, vertical);
        assert_eq!(step_one.next_board(), horizontal);
    }

    #[test]
    fn test_glider_moves_diagonally() {
        let start = board(
            ".#....
             ..#...
             ###...
             ......
             ......
             ......",
        );
        let after_four = (0..4).fold(start.clone(), |b, _| b.next_board());
        let shifted: Vec<_> = alive_points(&start)
            .into_iter()
            .map(|p| p.offset(1, 1))
            .collect();
        assert_eq!(alive_points(&after_four), shifted);
    }

    #[test]
    fn test_next_board_keeps_dimensions() {
        let board = Board::new(4, 7).unwrap();
        assert_eq!(board.next_board().dimensions(), (4, 7));
    }

    #[test]
    fn test_display_and_parse() {
        let text = ".#.\n##.";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.dimensions(), (2, 3));
        assert_eq!(board.to_string(), text);
    }

    #[test]
    fn test_parse_reports_bad_character() {
        let err = "..\n.x".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidCell {
                line: 2,
                column: 2,
                found: 'x'
            }
        );
    }

    #[test]
    fn test_randomize_respects_density_extremes() {
        let mut rng = StdRng::seed_from_u64(42);
        let board = Board::new(8, 8).unwrap();
        assert_eq!(board.randomize(&mut rng, 0.0).population(), 0);
        assert_eq!(board.randomize(&mut rng, 1.0).population(), 64);
        assert_eq!(board.randomize(&mut rng, f64::NAN).population(), 0);
        assert_eq!(board.randomize(&mut rng, f64::INFINITY).population(), 0);
        assert_eq!(board.randomize(&mut rng, 7.5).population(), 64);
    }

    #[test]
    fn test_iter_cells_is_row_major() {
        let board = Board::new(2, 3).unwrap();
        let points: Vec<_> = board.iter_cells().map(|(p, _)| p).collect();
        assert_eq!(points[0], Point::new(0, 0));
        assert_eq!(points[2], Point::new(0, 2));
        assert_eq!(points[3], Point::new(1, 0));
        assert_eq!(points.len(), 6);
    }
}
