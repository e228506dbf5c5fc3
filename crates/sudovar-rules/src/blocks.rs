//! Block (box) borders.
//!
//! Border grids are stored explicitly rather than as a block width, so
//! irregular (jigsaw-style) layouts survive editing. `new` seeds the
//! regular layout for a given block width.

use serde::{Deserialize, Serialize};
use sudovar_core::{BoardData, Edge, EdgeDirection, Item};

/// Persisted data: which cell borders are block borders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlocksData {
    /// `horizontal_border[y][x]` marks the border between cells `(y, x)`
    /// and `(y + 1, x)`; `size - 1` rows of `size` entries.
    pub horizontal_border: Vec<Vec<bool>>,
    /// `vertical_border[y][x]` marks the border between cells `(y, x)` and
    /// `(y, x + 1)`; `size` rows of `size - 1` entries.
    pub vertical_border: Vec<Vec<bool>>,
}

impl BlocksData {
    /// Regular block layout for `block_width`; width 0 means no borders.
    pub(crate) fn new(size: u32, block_width: u32) -> Self {
        let len = crate::grid_len(size);
        let mut horizontal_border = vec![vec![false; len]; len.saturating_sub(1)];
        let mut vertical_border = vec![vec![false; len.saturating_sub(1)]; len];

        if block_width > 0 {
            let block_width = crate::grid_len(block_width);
            let block_height = len / block_width;
            if block_height > 0 {
                for y in 0..len {
                    for x in 0..len {
                        if y + 1 < len && (y + 1) % block_height == 0 {
                            horizontal_border[y][x] = true;
                        }
                        if x + 1 < len && (x + 1) % block_width == 0 {
                            vertical_border[y][x] = true;
                        }
                    }
                }
            }
        }

        Self { horizontal_border, vertical_border }
    }

    /// Marked borders become styled edges.
    pub(crate) fn export_to_penpa(&self) -> BoardData {
        let mut items = Vec::new();
        for (y, row) in self.horizontal_border.iter().enumerate() {
            for (x, &marked) in row.iter().enumerate() {
                if marked {
                    items.push(Item::Edge {
                        position: edge(y, x, EdgeDirection::Horizontal),
                        style: 2,
                    });
                }
            }
        }
        for (y, row) in self.vertical_border.iter().enumerate() {
            for (x, &marked) in row.iter().enumerate() {
                if marked {
                    items.push(Item::Edge {
                        position: edge(y, x, EdgeDirection::Vertical),
                        style: 2,
                    });
                }
            }
        }
        BoardData { items, margin: 0 }
    }
}

fn edge(y: usize, x: usize, direction: EdgeDirection) -> Edge {
    let cell = sudovar_core::Cell::from_indices(y, x);
    Edge::new(cell.y, cell.x, direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_zero_means_no_borders() {
        let data = BlocksData::new(4, 0);
        assert!(data.horizontal_border.iter().flatten().all(|&b| !b));
        assert!(data.vertical_border.iter().flatten().all(|&b| !b));
        assert_eq!(data.export_to_penpa(), BoardData::default());
    }

    #[test]
    fn regular_layout_for_two_by_two_blocks() {
        let data = BlocksData::new(4, 2);
        // One horizontal border line through the middle.
        assert_eq!(data.horizontal_border[0], vec![false; 4]);
        assert_eq!(data.horizontal_border[1], vec![true; 4]);
        assert_eq!(data.horizontal_border[2], vec![false; 4]);
        // One vertical border line through the middle.
        for row in &data.vertical_border {
            assert_eq!(row, &vec![false, true, false]);
        }
    }

    #[test]
    fn marked_borders_export_as_edges() {
        let data = BlocksData::new(4, 2);
        let export = data.export_to_penpa();
        assert_eq!(export.items.len(), 8);
        assert!(export.items.contains(&Item::Edge {
            position: Edge::new(1, 0, EdgeDirection::Horizontal),
            style: 2,
        }));
        assert!(export.items.contains(&Item::Edge {
            position: Edge::new(3, 1, EdgeDirection::Vertical),
            style: 2,
        }));
    }

    #[test]
    fn nine_by_nine_uses_three_by_three_blocks() {
        let data = BlocksData::new(9, 3);
        assert!(data.horizontal_border[2].iter().all(|&b| b));
        assert!(data.horizontal_border[5].iter().all(|&b| b));
        assert!(data.horizontal_border[0].iter().all(|&b| !b));
    }
}
