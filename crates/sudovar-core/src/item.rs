//! Drawable primitives contributed by rules to an export.

use crate::geom::{Cell, Edge, Position, SmallCell};

/// Orientation of a board diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagonalDirection {
    /// Top-left to bottom-right.
    Main,
    /// Top-right to bottom-left.
    Anti,
}

/// One drawable or annotatable primitive in the wire format.
///
/// Every rule expresses its visual contribution as a list of items; the
/// exporter maps each item onto the target format's ID-addressed buckets.
/// Color and style values are opaque constants of the external viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Text centered on a cell or an edge midpoint.
    Text {
        /// Where the text is anchored.
        position: Position,
        /// The text itself.
        value: String,
        /// Viewer color constant.
        color: i64,
        /// Viewer text-style constant.
        style: String,
    },
    /// Small text in a sub-cell corner (cage sums).
    SmallText {
        /// The corner quadrant carrying the text.
        position: SmallCell,
        /// The text itself.
        value: String,
        /// Viewer color constant.
        color: i64,
    },
    /// A named symbol on a cell or an edge midpoint.
    Symbol {
        /// Where the symbol is anchored.
        position: Position,
        /// Viewer color constant.
        color: i64,
        /// Viewer symbol name, e.g. `circle_L`.
        name: String,
        /// Whether the symbol is drawn in front of numbers.
        is_front: bool,
    },
    /// A filled cell surface.
    Cell {
        /// The filled cell.
        position: Cell,
        /// Viewer surface-style constant.
        style: i64,
    },
    /// A styled border segment between two cells.
    Edge {
        /// The border segment.
        position: Edge,
        /// Viewer edge-style constant.
        style: i64,
    },
    /// A line between two anchor positions.
    Line {
        /// One endpoint.
        position1: Position,
        /// The other endpoint.
        position2: Position,
        /// Viewer line-style constant.
        style: i64,
    },
    /// A full board diagonal.
    Diagonal {
        /// Which diagonal.
        direction: DiagonalDirection,
    },
    /// An arrow along an ordered cell path.
    Arrow {
        /// Path cells, bulb first.
        cells: Vec<Cell>,
    },
    /// A thermometer along an ordered cell path.
    Thermo {
        /// Path cells, bulb first.
        cells: Vec<Cell>,
    },
    /// An outlined region of cells (killer cage, extra region).
    Region {
        /// The region's cells, in any order.
        cells: Vec<Cell>,
        /// Viewer frame-style constant for the outline.
        style: i64,
    },
}

/// A rule's complete export contribution.
///
/// `margin` declares how many rings of outside cells the rule's items
/// require; the exporter pads the board by the maximum margin over all
/// contributing rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardData {
    /// The rule's items.
    pub items: Vec<Item>,
    /// Outside rings required by the items, usually 0.
    pub margin: u32,
}
