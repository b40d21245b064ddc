/// Status of a single cell on the board.
/// A cell is either Dead or Alive, nothing else.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Status {
    #[default]
    Dead,
    Alive,
}

impl Status {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Status::Alive)
    }

    /// Check if the cell is currently dead
    pub const fn is_dead(self) -> bool {
        matches!(self, Status::Dead)
    }

    /// Flip Alive to Dead and Dead to Alive
    pub const fn toggle(self) -> Self {
        match self {
            Status::Alive => Status::Dead,
            Status::Dead => Status::Alive,
        }
    }

    /// Pure function to compute the next state based on Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. Live cell with fewer than 2 or more than 3 neighbors dies
    /// 4. Dead cell with any other count stays dead
    pub const fn next(self, alive_neighbors: u8) -> Self {
        match (self, alive_neighbors) {
            (Status::Alive, 2 | 3) => Status::Alive,
            (Status::Dead, 3) => Status::Alive,
            _ => Status::Dead,
        }
    }

    /// Character used by the text rendering of a board
    pub const fn symbol(self) -> char {
        match self {
            Status::Alive => '#',
            Status::Dead => '.',
        }
    }

    /// Parse a single board character. `#`, `O` and `*` mean alive.
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '#' | 'O' | '*' => Some(Status::Alive),
            '.' => Some(Status::Dead),
            _ => None,
        }
    }
}
