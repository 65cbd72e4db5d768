//! Grid coordinates and slide directions.

use std::fmt::{self, Display};

use crate::BoardSize;

/// A cell coordinate on the board.
///
/// `x` is the column (0 at the left), `y` is the row (0 at the top). Cells are
/// stored in row-major order, so the cell index is `y * N + x`.
///
/// # Examples
///
/// ```
/// use fifteen_core::{BoardSize, Direction, Position};
///
/// let size = BoardSize::new(3).unwrap();
/// let pos = Position::from_index(7, size);
/// assert_eq!(pos, Position::new(1, 2));
/// assert_eq!(pos.index(size), 7);
///
/// // Neighbors are clipped at the grid edges.
/// assert_eq!(pos.neighbor(Direction::Down, size), None);
/// assert_eq!(pos.neighbors(size).count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a position from column `x` and row `y`.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Converts a row-major cell index into a position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `size.cell_count()`.
    #[must_use]
    pub fn from_index(index: usize, size: BoardSize) -> Self {
        assert!(
            index < size.cell_count(),
            "cell index {index} is out of range for a {size} board"
        );
        let n = size.get();
        #[expect(clippy::cast_possible_truncation)]
        let (x, y) = ((index % n) as u8, (index / n) as u8);
        Self { x, y }
    }

    /// Returns the column.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major cell index of this position.
    #[must_use]
    pub fn index(self, size: BoardSize) -> usize {
        usize::from(self.y) * size.get() + usize::from(self.x)
    }

    /// Returns the Manhattan distance between two positions.
    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> usize {
        usize::from(self.x.abs_diff(other.x)) + usize::from(self.y.abs_diff(other.y))
    }

    /// Returns `true` if the two positions share an edge.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Returns the neighboring position in `direction`, or `None` at the grid edge.
    #[must_use]
    pub fn neighbor(self, direction: Direction, size: BoardSize) -> Option<Self> {
        let (dx, dy) = direction.offset();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let n = size.get();
        (usize::from(x) < n && usize::from(y) < n).then_some(Self { x, y })
    }

    /// Returns the orthogonal neighbors that lie on the grid.
    pub fn neighbors(self, size: BoardSize) -> impl Iterator<Item = Self> {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.neighbor(direction, size))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A direction on the grid.
///
/// When used to describe a move, the direction is the way the tile travels: sliding a
/// tile [`Direction::Up`] moves the tile below the blank into the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the `(dx, dy)` step for this direction.
    #[must_use]
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Returns the reverse direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(s)
    }
}
