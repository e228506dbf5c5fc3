//! Wire-format ID assignment for board positions.
//!
//! The target format addresses every drawable position with an integer
//! taken from disjoint bands: cells in the lowest band, then grid-line
//! vertices, then horizontal and vertical edge midpoints, then sub-cell
//! corners in the highest band. Each band's base offset is a fixed
//! polynomial in the padded board extent `n`. The formulas are a bit-exact
//! contract with the external viewer, additive constants included.

use sudovar_core::{Cell, Corner, Edge, EdgeDirection, Position, SmallCell};

/// Maps board positions to wire-format IDs for one fixed board geometry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IdMapper {
    margin: i64,
    /// Padded extent: `board_size + 2 * margin`.
    n: i64,
}

impl IdMapper {
    pub(crate) fn new(board_size: u32, margin: u32) -> Self {
        let margin = i64::from(margin);
        Self { margin, n: i64::from(board_size) + 2 * margin }
    }

    /// Linearizes margin-shifted coordinates with the format's row stride
    /// of `n + 4`.
    fn coord(self, y: i32, x: i32) -> i64 {
        (i64::from(y) + self.margin) * (self.n + 4) + (i64::from(x) + self.margin)
    }

    pub(crate) fn cell_id(self, cell: Cell) -> i64 {
        2 * self.n + 10 + self.coord(cell.y, cell.x)
    }

    pub(crate) fn edge_id(self, edge: Edge) -> i64 {
        let base = match edge.direction {
            EdgeDirection::Horizontal => 2 * self.n * self.n + 18 * self.n + 42,
            EdgeDirection::Vertical => 3 * self.n * self.n + 26 * self.n + 58,
        };
        base + self.coord(edge.y, edge.x)
    }

    pub(crate) fn position_id(self, position: Position) -> i64 {
        match position {
            Position::Cell(cell) => self.cell_id(cell),
            Position::Edge(edge) => self.edge_id(edge),
        }
    }

    /// ID of a grid-line intersection point. Vertex `(y, x)` is the
    /// upper-left corner of cell `(y, x)`.
    pub(crate) fn vertex_id(self, y: i32, x: i32) -> i64 {
        self.n * self.n + 9 * self.n + 21 + self.coord(y, x)
    }

    /// The two vertex IDs bounding a border segment, in the order the
    /// format expects (not canonicalized).
    pub(crate) fn edge_vertex_ids(self, edge: Edge) -> (i64, i64) {
        let first = match edge.direction {
            EdgeDirection::Horizontal => self.vertex_id(edge.y + 1, edge.x),
            EdgeDirection::Vertical => self.vertex_id(edge.y, edge.x + 1),
        };
        (first, self.vertex_id(edge.y + 1, edge.x + 1))
    }

    /// The corner band packs the four quadrants of each cell into a
    /// contiguous block of four IDs.
    pub(crate) fn small_cell_id(self, small: SmallCell) -> i64 {
        let corner = match small.corner {
            Corner::UpLeft => 0,
            Corner::UpRight => 1,
            Corner::DownLeft => 2,
            Corner::DownRight => 3,
        };
        4 * self.n * self.n + 40 * self.n + 104 + 4 * self.coord(small.y, small.x) + corner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_ids_on_a_plain_4x4() {
        let mapper = IdMapper::new(4, 0);
        assert_eq!(mapper.cell_id(Cell::new(0, 0)), 18);
        assert_eq!(mapper.cell_id(Cell::new(0, 3)), 21);
        assert_eq!(mapper.cell_id(Cell::new(1, 0)), 26);
        assert_eq!(mapper.cell_id(Cell::new(3, 3)), 45);
    }

    #[test]
    fn margin_shifts_every_coordinate() {
        let mapper = IdMapper::new(4, 1);
        // n = 6, stride 10; outside cell (-1, -1) maps to coord 0.
        assert_eq!(mapper.cell_id(Cell::new(-1, -1)), 22);
        assert_eq!(mapper.cell_id(Cell::new(0, 0)), 33);
    }

    #[test]
    fn edge_endpoints_follow_direction() {
        let mapper = IdMapper::new(4, 0);
        // Horizontal edge below cell (y, x): left endpoint first.
        let (a, b) = mapper.edge_vertex_ids(Edge::new(0, 0, EdgeDirection::Horizontal));
        assert_eq!((a, b), (mapper.vertex_id(1, 0), mapper.vertex_id(1, 1)));
        // Vertical edge right of cell (y, x): top endpoint first.
        let (a, b) = mapper.edge_vertex_ids(Edge::new(0, 0, EdgeDirection::Vertical));
        assert_eq!((a, b), (mapper.vertex_id(0, 1), mapper.vertex_id(1, 1)));
    }

    #[test]
    fn bands_are_disjoint() {
        // Sweep every addressable position of a padded board and check
        // that no two bands ever hand out the same ID.
        for (board_size, margin) in [(4, 0), (9, 0), (9, 1), (6, 2)] {
            let mapper = IdMapper::new(board_size, margin);
            let lo = -i32::try_from(margin).unwrap();
            let hi = i32::try_from(board_size + margin).unwrap();
            let mut seen = std::collections::HashSet::new();
            for y in lo..hi {
                for x in lo..hi {
                    assert!(seen.insert(mapper.cell_id(Cell::new(y, x))));
                    for direction in [EdgeDirection::Horizontal, EdgeDirection::Vertical]
                    {
                        assert!(seen.insert(mapper.edge_id(Edge::new(y, x, direction))));
                    }
                    for corner in [
                        Corner::UpLeft,
                        Corner::UpRight,
                        Corner::DownLeft,
                        Corner::DownRight,
                    ] {
                        assert!(
                            seen.insert(mapper.small_cell_id(SmallCell::new(y, x, corner)))
                        );
                    }
                }
            }
        }
    }
}
