//! Core data structures for sliding-tile puzzles.
//!
//! This crate provides the fundamental types for representing an N×N sliding-tile
//! ("fifteen") puzzle. These types are shared by the shuffler, the game engine, and
//! the front ends.
//!
//! # Overview
//!
//! 1. **Geometry**
//!    - [`size`]: Validated board edge length ([`BoardSize`])
//!    - [`position`]: Grid coordinates and slide directions ([`Position`], [`Direction`])
//!
//! 2. **Pieces**
//!    - [`tile`]: Tile identifiers, including the blank ([`Tile`])
//!
//! 3. **State**
//!    - [`board`]: The permutation of tiles on the grid ([`Board`]), move legality,
//!      win detection, and the solvability parity check
//!
//! # Examples
//!
//! ```
//! use fifteen_core::{Board, BoardSize, Tile};
//!
//! let size = BoardSize::new(3)?;
//! let mut board = Board::from_values(size, &[1, 2, 3, 4, 5, 6, 7, 9, 8])?;
//! assert!(!board.is_solved());
//!
//! // Tile 8 sits right of the blank, so it can slide into it.
//! assert!(board.is_adjacent_to_blank(Tile::new(8))?);
//! board.slide(Tile::new(8))?;
//! assert!(board.is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod position;
pub mod size;
pub mod tile;

// Re-export commonly used types
pub use self::{
    board::{Board, BoardError, Slide, SlideError},
    position::{Direction, Position},
    size::BoardSize,
    tile::Tile,
};
