//! The tile permutation on an N×N grid.
//!
//! [`Board`] stores one [`Tile`] per cell in row-major order. The only mutation is
//! [`Board::slide`], which swaps a tile with the orthogonally adjacent blank, so
//! every board reachable from [`Board::solved`] stays solvable.

use std::fmt::{self, Display};

use crate::{BoardSize, Direction, Position, Tile};

/// Errors raised when constructing or querying a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The requested edge length is outside the supported range.
    #[display("invalid board size {size}: must be between 2 and 255")]
    InvalidSize {
        /// The rejected edge length.
        size: usize,
    },
    /// The tile does not exist on the board.
    #[display("tile {tile} is not on the board")]
    UnknownTile {
        /// The requested tile.
        tile: Tile,
    },
    /// The tile sequence does not have N² entries.
    #[display("expected {expected} tiles, got {actual}")]
    InvalidLength {
        /// N² for the requested size.
        expected: usize,
        /// Number of tiles supplied.
        actual: usize,
    },
    /// A tile identifier is outside 1..=N².
    #[display("tile {tile} is out of range for a {size} board")]
    TileOutOfRange {
        /// The offending tile.
        tile: Tile,
        /// The board size.
        size: BoardSize,
    },
    /// A tile identifier appears more than once.
    #[display("tile {tile} appears more than once")]
    DuplicateTile {
        /// The repeated tile.
        tile: Tile,
    },
}

/// Reasons a [`Board::slide`] is refused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum SlideError {
    /// The tile identifier is not on the board.
    #[display("tile {tile} is not on the board")]
    UnknownTile {
        /// The requested tile.
        tile: Tile,
    },
    /// The blank cannot slide into itself.
    #[display("the blank cannot be moved")]
    IsBlank,
    /// The tile does not share an edge with the blank.
    #[display("tile {tile} is not adjacent to the blank")]
    NotAdjacent {
        /// The requested tile.
        tile: Tile,
    },
}

/// A completed slide: `tile` moved from `from` into the blank at `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    /// The tile that moved.
    pub tile: Tile,
    /// Where the tile was.
    pub from: Position,
    /// Where the tile is now (the former blank position).
    pub to: Position,
}

/// An N×N sliding-tile board.
///
/// Invariant: `tiles` is a permutation of `1..=N²`, and `blank` is the index of N².
///
/// # Examples
///
/// ```
/// use fifteen_core::{Board, BoardSize, Tile};
///
/// let mut board = Board::solved(BoardSize::FIFTEEN);
/// assert!(board.is_solved());
///
/// let slide = board.slide(Tile::new(12))?;
/// assert!(!board.is_solved());
///
/// // A slide is its own inverse.
/// board.slide(slide.tile)?;
/// assert!(board.is_solved());
/// # Ok::<(), fifteen_core::SlideError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: BoardSize,
    tiles: Vec<Tile>,
    blank: usize,
}

impl Board {
    /// Creates the solved (identity) board: tile `p + 1` at every index `p`.
    #[must_use]
    pub fn solved(size: BoardSize) -> Self {
        #[expect(clippy::cast_possible_truncation)]
        let tiles = (1..=size.cell_count())
            .map(|value| Tile::new(value as u16))
            .collect();
        Self {
            size,
            tiles,
            blank: size.cell_count() - 1,
        }
    }

    /// Creates a board from tiles listed in row-major order.
    ///
    /// The blank is written as N². The arrangement is not required to be solvable;
    /// use [`Board::is_solvable`] to check.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidLength`], [`BoardError::TileOutOfRange`] or
    /// [`BoardError::DuplicateTile`] if `tiles` is not a permutation of `1..=N²`.
    pub fn from_tiles(size: BoardSize, tiles: Vec<Tile>) -> Result<Self, BoardError> {
        if tiles.len() != size.cell_count() {
            return Err(BoardError::InvalidLength {
                expected: size.cell_count(),
                actual: tiles.len(),
            });
        }

        let mut seen = vec![false; size.cell_count()];
        for &tile in &tiles {
            if !size.contains_tile(tile) {
                return Err(BoardError::TileOutOfRange { tile, size });
            }
            let slot = &mut seen[usize::from(tile.value()) - 1];
            if *slot {
                return Err(BoardError::DuplicateTile { tile });
            }
            *slot = true;
        }

        let blank_tile = size.blank_tile();
        let blank = tiles
            .iter()
            .position(|&tile| tile == blank_tile)
            .ok_or(BoardError::UnknownTile { tile: blank_tile })?;
        Ok(Self { size, tiles, blank })
    }

    /// Creates a board from raw identifiers listed in row-major order.
    ///
    /// # Errors
    ///
    /// See [`Board::from_tiles`].
    pub fn from_values(size: BoardSize, values: &[u16]) -> Result<Self, BoardError> {
        Self::from_tiles(size, values.iter().copied().map(Tile::new).collect())
    }

    /// Returns the board size.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the tiles in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Returns the identifier used for the blank on this board.
    #[must_use]
    pub fn blank_tile(&self) -> Tile {
        self.size.blank_tile()
    }

    /// Returns the tile at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    #[must_use]
    pub fn tile_at(&self, pos: Position) -> Tile {
        self.tiles[self.index_of(pos)]
    }

    /// Returns the position of the blank.
    #[must_use]
    pub fn blank_position(&self) -> Position {
        Position::from_index(self.blank, self.size)
    }

    /// Returns the position of `tile`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownTile`] if `tile` is not on the board.
    pub fn position_of(&self, tile: Tile) -> Result<Position, BoardError> {
        if tile == self.blank_tile() {
            return Ok(self.blank_position());
        }
        self.tiles
            .iter()
            .position(|&t| t == tile)
            .map(|index| Position::from_index(index, self.size))
            .ok_or(BoardError::UnknownTile { tile })
    }

    /// Returns `true` if `tile` shares an edge with the blank.
    ///
    /// This is the only legality rule: no diagonal moves and no multi-tile slides.
    /// The blank itself is never adjacent to the blank.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownTile`] if `tile` is not on the board.
    pub fn is_adjacent_to_blank(&self, tile: Tile) -> Result<bool, BoardError> {
        let pos = self.position_of(tile)?;
        Ok(pos.is_adjacent(self.blank_position()))
    }

    /// Returns the tiles that can legally slide into the blank.
    ///
    /// There are two to four of them, depending on where the blank sits.
    pub fn movable_tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.blank_position()
            .neighbors(self.size)
            .map(|pos| self.tile_at(pos))
    }

    /// Returns the tile that would travel in `direction` to fill the blank.
    ///
    /// For [`Direction::Up`] this is the tile below the blank. Returns `None` if the
    /// blank is on the edge that has no such tile.
    #[must_use]
    pub fn tile_in_direction(&self, direction: Direction) -> Option<Tile> {
        self.blank_position()
            .neighbor(direction.opposite(), self.size)
            .map(|pos| self.tile_at(pos))
    }

    /// Slides `tile` into the blank.
    ///
    /// The swap happens entirely or not at all.
    ///
    /// # Errors
    ///
    /// Returns [`SlideError::UnknownTile`] if `tile` is not on the board,
    /// [`SlideError::IsBlank`] if `tile` is the blank, and
    /// [`SlideError::NotAdjacent`] if `tile` does not share an edge with the blank.
    /// The board is unchanged on error.
    pub fn slide(&mut self, tile: Tile) -> Result<Slide, SlideError> {
        if tile == self.blank_tile() {
            return Err(SlideError::IsBlank);
        }
        let from = self
            .position_of(tile)
            .map_err(|_| SlideError::UnknownTile { tile })?;
        let to = self.blank_position();
        if !from.is_adjacent(to) {
            return Err(SlideError::NotAdjacent { tile });
        }

        let from_index = self.index_of(from);
        self.tiles.swap(from_index, self.blank);
        self.blank = from_index;
        Ok(Slide { tile, from, to })
    }

    /// Returns `true` if every index `p` holds tile `p + 1`.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tiles
            .iter()
            .zip(1..)
            .all(|(tile, expected)| tile.value() == expected)
    }

    /// Counts pairs of numbered tiles that appear in the wrong relative order.
    ///
    /// The blank is ignored.
    #[must_use]
    pub fn inversions(&self) -> usize {
        let blank = self.blank_tile();
        let numbered: Vec<u16> = self
            .tiles
            .iter()
            .filter(|&&tile| tile != blank)
            .map(|tile| tile.value())
            .collect();
        numbered
            .iter()
            .enumerate()
            .map(|(i, &value)| numbered[i + 1..].iter().filter(|&&v| v < value).count())
            .sum()
    }

    /// Sums the Manhattan distance of every numbered tile from its solved position.
    ///
    /// Zero exactly when the board is solved.
    #[must_use]
    pub fn displacement(&self) -> usize {
        let blank = self.blank_tile();
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != blank)
            .map(|(index, &tile)| {
                Position::from_index(index, self.size).manhattan_distance(self.size.home_of(tile))
            })
            .sum()
    }

    /// Returns `true` if the solved board can be reached by legal slides.
    ///
    /// For odd N the inversion count must be even. For even N the inversion count
    /// plus the blank's row (counted from the top, starting at 0) must be odd.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.size.get() % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + usize::from(self.blank_position().y())) % 2 == 1
        }
    }

    fn index_of(&self, pos: Position) -> usize {
        let n = self.size.get();
        assert!(
            usize::from(pos.x()) < n && usize::from(pos.y()) < n,
            "position {pos} is outside a {} board",
            self.size
        );
        pos.index(self.size)
    }
}

impl Display for Board {
    /// Renders one row per line, with `.` for the blank.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.size.cell_count().to_string().len();
        let blank = self.blank_tile();
        for row in self.tiles.chunks(self.size.get()) {
            for (i, &tile) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                if tile == blank {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{:>width$}", tile.value())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn size(n: usize) -> BoardSize {
        BoardSize::new(n).unwrap()
    }

    fn board(n: usize, values: &[u16]) -> Board {
        Board::from_values(size(n), values).unwrap()
    }

    #[test]
    fn test_solved_board_for_all_sizes() {
        for n in 2..=11 {
            let board = Board::solved(size(n));
            assert!(board.is_solved(), "{n}x{n} identity must be solved");
            assert!(board.is_solvable());
            assert_eq!(board.inversions(), 0);
            assert_eq!(
                board.blank_position(),
                Position::new(n as u8 - 1, n as u8 - 1)
            );
        }
    }

    #[test]
    fn test_from_values_validation() {
        let size = size(2);
        assert_eq!(
            Board::from_values(size, &[1, 2, 3]),
            Err(BoardError::InvalidLength {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            Board::from_values(size, &[1, 2, 3, 5]),
            Err(BoardError::TileOutOfRange {
                tile: Tile::new(5),
                size
            })
        );
        assert_eq!(
            Board::from_values(size, &[0, 1, 2, 3]),
            Err(BoardError::TileOutOfRange {
                tile: Tile::new(0),
                size
            })
        );
        assert_eq!(
            Board::from_values(size, &[1, 1, 2, 4]),
            Err(BoardError::DuplicateTile { tile: Tile::new(1) })
        );
    }

    #[test]
    fn test_position_of() {
        let board = board(3, &[1, 2, 3, 4, 5, 6, 7, 9, 8]);
        assert_eq!(board.position_of(Tile::new(8)), Ok(Position::new(2, 2)));
        assert_eq!(board.position_of(Tile::new(9)), Ok(Position::new(1, 2)));
        assert_eq!(board.blank_position(), Position::new(1, 2));
        assert_eq!(
            board.position_of(Tile::new(10)),
            Err(BoardError::UnknownTile {
                tile: Tile::new(10)
            })
        );
    }

    #[test]
    fn test_adjacency() {
        let board = board(3, &[1, 2, 3, 4, 5, 6, 7, 9, 8]);
        assert_eq!(board.is_adjacent_to_blank(Tile::new(8)), Ok(true));
        assert_eq!(board.is_adjacent_to_blank(Tile::new(7)), Ok(true));
        assert_eq!(board.is_adjacent_to_blank(Tile::new(5)), Ok(true));
        assert_eq!(board.is_adjacent_to_blank(Tile::new(4)), Ok(false));
        assert_eq!(board.is_adjacent_to_blank(Tile::new(6)), Ok(false));
        assert_eq!(board.is_adjacent_to_blank(Tile::new(9)), Ok(false));

        let mut movable: Vec<_> = board.movable_tiles().map(Tile::value).collect();
        movable.sort_unstable();
        assert_eq!(movable, [5, 7, 8]);
    }

    #[test]
    fn test_row_wrap_is_not_adjacent() {
        // Index 2 and index 3 are consecutive but on different rows.
        let board = board(3, &[1, 2, 9, 3, 4, 5, 6, 7, 8]);
        assert_eq!(board.is_adjacent_to_blank(Tile::new(3)), Ok(false));
        assert_eq!(board.is_adjacent_to_blank(Tile::new(2)), Ok(true));
        assert_eq!(board.is_adjacent_to_blank(Tile::new(5)), Ok(true));
    }

    #[test]
    fn test_two_by_two_scenario() {
        let mut board = board(2, &[1, 2, 4, 3]);
        assert!(!board.is_solved());
        let slide = board.slide(Tile::new(3)).unwrap();
        assert_eq!(
            slide,
            Slide {
                tile: Tile::new(3),
                from: Position::new(1, 1),
                to: Position::new(0, 1),
            }
        );
        assert_eq!(board.tiles(), Board::solved(size(2)).tiles());
        assert!(board.is_solved());
    }

    #[test]
    fn test_slide_rejections_leave_board_untouched() {
        let mut board = board(3, &[1, 2, 3, 4, 5, 6, 7, 9, 8]);
        let before = board.clone();

        assert_eq!(board.slide(Tile::new(9)), Err(SlideError::IsBlank));
        assert_eq!(
            board.slide(Tile::new(1)),
            Err(SlideError::NotAdjacent { tile: Tile::new(1) })
        );
        assert_eq!(
            board.slide(Tile::new(42)),
            Err(SlideError::UnknownTile {
                tile: Tile::new(42)
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_tile_in_direction() {
        let board = Board::solved(size(3));
        // Blank in the bottom-right corner: only tiles above and to the left can move.
        assert_eq!(board.tile_in_direction(Direction::Down), Some(Tile::new(6)));
        assert_eq!(board.tile_in_direction(Direction::Right), Some(Tile::new(8)));
        assert_eq!(board.tile_in_direction(Direction::Up), None);
        assert_eq!(board.tile_in_direction(Direction::Left), None);
    }

    #[test]
    fn test_solvability_parity() {
        // Swapping two numbered tiles flips parity.
        assert!(!board(3, &[2, 1, 3, 4, 5, 6, 7, 8, 9]).is_solvable());
        assert!(!board(4, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 14, 16]).is_solvable());
        assert!(!board(2, &[2, 1, 3, 4]).is_solvable());
        assert!(board(2, &[4, 1, 3, 2]).is_solvable());
    }

    #[test]
    fn test_displacement() {
        assert_eq!(Board::solved(size(4)).displacement(), 0);
        assert_eq!(board(3, &[1, 2, 3, 4, 5, 6, 7, 9, 8]).displacement(), 1);
        // 1 and 8 swapped across the grid: each is three steps from home.
        assert_eq!(board(3, &[8, 2, 3, 4, 5, 6, 7, 1, 9]).displacement(), 6);
    }

    #[test]
    fn test_display() {
        let board = board(4, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 16, 15]);
        assert_eq!(
            board.to_string(),
            " 1  2  3  4\n 5  6  7  8\n 9 10 11 12\n13 14  . 15\n"
        );
    }

    fn walk(size: BoardSize, steps: &[Direction]) -> Board {
        let mut board = Board::solved(size);
        for &direction in steps {
            if let Some(tile) = board.tile_in_direction(direction) {
                board.slide(tile).unwrap();
            }
        }
        board
    }

    proptest! {
        #[test]
        fn prop_slides_preserve_solvability(
            n in 2usize..=6,
            steps in prop::collection::vec(prop::sample::select(Direction::ALL.to_vec()), 0..200),
        ) {
            let board = walk(BoardSize::new(n).unwrap(), &steps);
            prop_assert!(board.is_solvable());
        }

        #[test]
        fn prop_slide_is_its_own_inverse(
            n in 2usize..=6,
            steps in prop::collection::vec(prop::sample::select(Direction::ALL.to_vec()), 0..100),
            pick in 0usize..4,
        ) {
            let mut board = walk(BoardSize::new(n).unwrap(), &steps);
            let before = board.clone();
            let movable: Vec<_> = board.movable_tiles().collect();
            let tile = movable[pick % movable.len()];
            board.slide(tile).unwrap();
            prop_assert_ne!(&board, &before);
            board.slide(tile).unwrap();
            prop_assert_eq!(board, before);
        }

        #[test]
        fn prop_position_of_matches_tile_at(
            n in 2usize..=6,
            steps in prop::collection::vec(prop::sample::select(Direction::ALL.to_vec()), 0..100),
        ) {
            let board = walk(BoardSize::new(n).unwrap(), &steps);
            for pos in board.size().positions() {
                prop_assert_eq!(board.position_of(board.tile_at(pos)), Ok(pos));
            }
        }
    }
}
