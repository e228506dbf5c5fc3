//! Core data structures for the sudoku-variant export pipeline.
//!
//! This crate provides the geometric vocabulary shared by the rule registry
//! and the wire-format exporter:
//!
//! 1. **Board geometry** - [`geom`]: cell, edge, and sub-cell corner
//!    positions, including the "outside" cells used by clue-border rules.
//! 2. **Item model** - [`item`]: the closed set of drawable primitives a
//!    rule can contribute to an export ([`Item`]), together with
//!    [`BoardData`], a rule's complete contribution.
//! 3. **Region outlines** - [`outline`]: derivation of the corner-to-corner
//!    frame segments outlining an arbitrary set of cells.
//!
//! # Examples
//!
//! ```
//! use sudovar_core::{BoardData, Cell, Item, Position};
//!
//! // A single given digit, as a rule would export it.
//! let data = BoardData {
//!     items: vec![Item::Text {
//!         position: Position::Cell(Cell::new(0, 3)),
//!         value: "5".to_owned(),
//!         color: 1,
//!         style: "1".to_owned(),
//!     }],
//!     margin: 0,
//! };
//! assert_eq!(data.items.len(), 1);
//! ```

pub mod geom;
pub mod item;
pub mod outline;

pub use self::{
    geom::{Cell, Corner, Edge, EdgeDirection, Position, SmallCell},
    item::{BoardData, DiagonalDirection, Item},
    outline::frame_lines,
};
