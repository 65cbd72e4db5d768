//! Board edge length.

use std::fmt::{self, Display};

use crate::{BoardError, Position, Tile};

/// The edge length N of an N×N board.
///
/// A board of size N holds N²−1 numbered tiles and one blank. Sizes below
/// [`BoardSize::MIN`] have no legal puzzle; sizes above [`BoardSize::MAX`] would not
/// fit the tile identifier type.
///
/// # Examples
///
/// ```
/// use fifteen_core::BoardSize;
///
/// let size = BoardSize::new(4).unwrap();
/// assert_eq!(size.get(), 4);
/// assert_eq!(size.cell_count(), 16);
/// assert_eq!(size.blank_tile().value(), 16);
///
/// assert!(BoardSize::new(1).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(u8);

impl BoardSize {
    /// The smallest supported edge length.
    pub const MIN: usize = 2;

    /// The largest supported edge length.
    pub const MAX: usize = 255;

    /// The classic 4×4 fifteen puzzle.
    pub const FIFTEEN: Self = Self(4);

    /// Creates a board size.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is outside
    /// [`BoardSize::MIN`]..=[`BoardSize::MAX`].
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(Self::MIN..=Self::MAX).contains(&size) {
            return Err(BoardError::InvalidSize { size });
        }
        #[expect(clippy::cast_possible_truncation)]
        let size = size as u8;
        Ok(Self(size))
    }

    /// Returns the edge length N.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Returns the number of cells, N².
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.get() * self.get()
    }

    /// Returns the identifier of the blank tile, N².
    #[must_use]
    pub fn blank_tile(self) -> Tile {
        #[expect(clippy::cast_possible_truncation)]
        let value = self.cell_count() as u16;
        Tile::new(value)
    }

    /// Returns `true` if `tile` is a valid identifier on a board of this size.
    #[must_use]
    pub fn contains_tile(self, tile: Tile) -> bool {
        (1..=self.cell_count()).contains(&usize::from(tile.value()))
    }

    /// Returns the position where `tile` sits when the board is solved.
    ///
    /// # Panics
    ///
    /// Panics if `tile` is not a valid identifier for this size.
    #[must_use]
    pub fn home_of(self, tile: Tile) -> Position {
        assert!(self.contains_tile(tile), "tile {tile} is not on a {self} board");
        Position::from_index(usize::from(tile.value()) - 1, self)
    }

    /// Returns an iterator over all positions in row-major order.
    pub fn positions(self) -> impl DoubleEndedIterator<Item = Position> + ExactSizeIterator {
        (0..self.cell_count()).map(move |index| Position::from_index(index, self))
    }
}

impl Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.0)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> usize {
        size.get()
    }
}
