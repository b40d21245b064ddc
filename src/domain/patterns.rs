use super::{Board, Point, Status};

/// Represents a pattern that can be stamped onto the board
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub height: usize,
    pub width: usize,
    pub cells: Vec<Point>, // Offsets of alive cells from the top-left corner
}

impl Pattern {
    /// Create a new pattern from (row, col) offsets of alive cells
    pub fn new(name: &'static str, description: &'static str, cells: &[(i32, i32)]) -> Self {
        let cells: Vec<Point> = cells.iter().copied().map(Point::from).collect();
        let height = cells.iter().map(|p| p.row).max().map_or(0, |r| r as usize + 1);
        let width = cells.iter().map(|p| p.col).max().map_or(0, |c| c as usize + 1);
        Self { name, description, height, width, cells }
    }

    /// Stamp the pattern with its top-left corner at `origin`.
    /// Cells that would land off the board are clipped.
    pub fn place_on(&self, board: &Board, origin: Point) -> Board {
        self.cells
            .iter()
            .map(|cell| origin.offset(cell.row, cell.col))
            .fold(board.clone(), |acc, point| {
                acc.set(point, Status::Alive).unwrap_or(acc)
            })
    }

    /// Stamp the pattern centered on `center`
    pub fn place_centered(&self, board: &Board, center: Point) -> Board {
        let origin = center.offset(-(self.height as i32 / 2), -(self.width as i32 / 2));
        self.place_on(board, origin)
    }
}

/// Small library of classic patterns
pub mod presets {
    use super::*;

    /// Glider - moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            &[
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", &[(0, 0), (0, 1), (0, 2)])
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            &[
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            &[
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", &[(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Lightweight spaceship, travels horizontally
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight spaceship (period 4)",
            &[
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
        )
    }

    /// R-pentomino - methuselah, outgrows a small board quickly
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah",
            &[
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            block(),
            lwss(),
            r_pentomino(),
        ]
    }

    /// Look a preset up by name, ignoring case
    pub fn find(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_bounds() {
        let glider = presets::glider();
        assert_eq!((glider.height, glider.width), (3, 3));
        let lwss = presets::lwss();
        assert_eq!((lwss.height, lwss.width), (4, 5));
    }

    #[test]
    fn test_place_on_sets_cells() {
        let board = Board::new(5, 5).unwrap();
        let placed = presets::block().place_on(&board, Point::new(1, 2));
        assert_eq!(placed.population(), 4);
        assert_eq!(placed.get(Point::new(2, 3)), Some(Status::Alive));
        assert_eq!(placed.next_board(), placed);
    }

    #[test]
    fn test_place_on_clips_at_edges() {
        let board = Board::new(3, 3).unwrap();
        let placed = presets::block().place_on(&board, Point::new(2, 2));
        assert_eq!(placed.population(), 1);
        let placed = presets::block().place_on(&board, Point::new(-1, -1));
        assert_eq!(placed.get(Point::new(0, 0)), Some(Status::Alive));
        assert_eq!(placed.population(), 1);
    }

    #[test]
    fn test_centered_blinker_oscillates() {
        let board = Board::new(5, 5).unwrap();
        let placed = presets::blinker().place_centered(&board, Point::new(2, 2));
        assert_eq!(placed.to_string(), ".....\n.....\n.###.\n.....\n.....");
        assert_eq!(placed.next_board().next_board(), placed);
    }

    #[test]
    fn test_oscillators_return_after_two_steps() {
        let board = Board::new(8, 8).unwrap();
        for pattern in [presets::toad(), presets::beacon()] {
            let placed = pattern.place_on(&board, Point::new(2, 2));
            assert_ne!(placed.next_board(), placed, "{}", pattern.name);
            assert_eq!(placed.next_board().next_board(), placed, "{}", pattern.name);
        }
    }

    #[test]
    fn test_find_ignores_case() {
        assert_eq!(presets::find("glider").map(|p| p.name), Some("Glider"));
        assert_eq!(presets::find("R-PENTOMINO").map(|p| p.name), Some("R-pentomino"));
        assert!(presets::find("gun").is_none());
    }

    #[test]
    fn test_pattern_names_are_unique() {
        let names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
