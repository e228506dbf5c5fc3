//! Board positions: cells, edges, and sub-cell corners.
//!
//! Coordinates are signed: in-board cells satisfy `0 <= y, x < size`, while
//! `-1` and `size` address the outside rings used by clue-border rules such
//! as skyscrapers. How many outside rings a rule needs is declared by its
//! [`BoardData::margin`](crate::BoardData::margin).

use serde::{Deserialize, Serialize};

/// A cell position on the (possibly padded) board.
///
/// # Examples
///
/// ```
/// use sudovar_core::Cell;
///
/// let inside = Cell::new(0, 3);
/// let outside = Cell::new(-1, 3); // skyscraper clue above column 3
/// assert_eq!(inside.x, outside.x);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Cell {
    /// Row coordinate, top to bottom.
    pub y: i32,
    /// Column coordinate, left to right.
    pub x: i32,
}

impl Cell {
    /// Creates a cell from signed coordinates.
    #[must_use]
    pub const fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }

    /// Creates a cell from unsigned grid indices.
    ///
    /// # Panics
    ///
    /// Panics if an index does not fit in `i32`; real boards are many
    /// orders of magnitude smaller.
    #[must_use]
    pub fn from_indices(y: usize, x: usize) -> Self {
        let y = i32::try_from(y).expect("grid index out of range");
        let x = i32::try_from(x).expect("grid index out of range");
        Self { y, x }
    }
}

/// Orientation of a border segment between two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeDirection {
    /// The border between vertically adjacent cells.
    Horizontal,
    /// The border between horizontally adjacent cells.
    Vertical,
}

/// A border segment addressed relative to the cell above/left of it.
///
/// `Horizontal` edges sit between cell `(y, x)` and `(y + 1, x)`;
/// `Vertical` edges sit between cell `(y, x)` and `(y, x + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Row coordinate of the reference cell.
    pub y: i32,
    /// Column coordinate of the reference cell.
    pub x: i32,
    /// Which of the reference cell's borders is addressed.
    pub direction: EdgeDirection,
}

impl Edge {
    /// Creates an edge relative to its reference cell.
    #[must_use]
    pub const fn new(y: i32, x: i32, direction: EdgeDirection) -> Self {
        Self { y, x, direction }
    }
}

/// One of the four sub-cell corner quadrants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Corner {
    /// Upper-left quadrant.
    UpLeft,
    /// Upper-right quadrant.
    UpRight,
    /// Lower-left quadrant.
    DownLeft,
    /// Lower-right quadrant.
    DownRight,
}

/// A sub-cell corner position, used for cage-sum annotations and cage
/// frame segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SmallCell {
    /// Row coordinate of the owning cell.
    pub y: i32,
    /// Column coordinate of the owning cell.
    pub x: i32,
    /// Quadrant within the owning cell.
    pub corner: Corner,
}

impl SmallCell {
    /// Creates a sub-cell corner position.
    #[must_use]
    pub const fn new(y: i32, x: i32, corner: Corner) -> Self {
        Self { y, x, corner }
    }
}

/// A position that can carry a text or symbol annotation: either a cell
/// center or an edge midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// The center of a cell.
    Cell(Cell),
    /// The midpoint of a border segment.
    Edge(Edge),
}
