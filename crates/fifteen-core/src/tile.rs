//! Tile identifiers.

use std::fmt::{self, Display};

/// A tile identifier.
///
/// On a board of size N, tiles are numbered 1 to N²−1 and the blank is N². The
/// identifier alone does not know N; use [`BoardSize::blank_tile`] or
/// [`Board::blank_tile`] to recognize the blank.
///
/// [`BoardSize::blank_tile`]: crate::BoardSize::blank_tile
/// [`Board::blank_tile`]: crate::Board::blank_tile
///
/// # Examples
///
/// ```
/// use fifteen_core::{BoardSize, Tile};
///
/// let tile = Tile::new(7);
/// assert_eq!(tile.value(), 7);
/// assert_eq!(tile.to_string(), "7");
/// assert!(BoardSize::FIFTEEN.blank_tile().is_blank(BoardSize::FIFTEEN));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile(u16);

impl Tile {
    /// Creates a tile identifier.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Returns `true` if this is the blank on a board of the given size.
    #[must_use]
    pub fn is_blank(self, size: crate::BoardSize) -> bool {
        self == size.blank_tile()
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<u16> for Tile {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<Tile> for u16 {
    fn from(tile: Tile) -> u16 {
        tile.value()
    }
}
