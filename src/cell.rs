use core::fmt;

/// A position on the grid, addressed as `(row, col)` with rows growing southwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }
    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
    /// The number of king moves between two cells, which is the shortest path length in an
    /// obstacle-free 8-connected grid.
    pub fn chebyshev_distance(&self, other: &Cell) -> i32 {
        (self.row - other.row).abs().max((self.col - other.col).abs())
    }
    /// True if `other` is one of the 8 cells surrounding this one.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.chebyshev_distance(other) == 1
    }
    pub fn step(&self, dir: Direction) -> Cell {
        let (dr, dc) = dir.offset();
        Cell::new(self.row + dr, self.col + dc)
    }
    /// The 8 surrounding cells in [Direction::ALL] order, bounds not checked.
    pub fn moore_neighborhood(&self) -> [Cell; 8] {
        Direction::ALL.map(|d| self.step(d))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Cell {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 8 moves available from a cell. The declaration order is clockwise starting at north and
/// is the order in which successors are generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// `(row, col)` delta of the move.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
    pub fn diagonal(&self) -> bool {
        let (dr, dc) = self.offset();
        dr != 0 && dc != 0
    }
    pub fn num(&self) -> usize {
        *self as usize
    }
}
