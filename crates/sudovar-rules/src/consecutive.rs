//! Consecutive-pair marks on cell borders.

use serde::{Deserialize, Serialize};
use sudovar_core::{BoardData, Edge, EdgeDirection, Item, Position};

/// Persisted data: a flag per inner border, plus whether the marks are
/// exhaustive (unmarked borders then forbid consecutive pairs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsecutiveData {
    /// `horizontal_border[y][x]` marks the border between cells `(y, x)`
    /// and `(y + 1, x)`.
    pub horizontal_border: Vec<Vec<bool>>,
    /// `vertical_border[y][x]` marks the border between cells `(y, x)` and
    /// `(y, x + 1)`.
    pub vertical_border: Vec<Vec<bool>>,
    /// Whether every consecutive pair on the board is marked.
    pub all_shown: bool,
}

impl ConsecutiveData {
    pub(crate) fn new(size: u32) -> Self {
        let len = crate::grid_len(size);
        Self {
            horizontal_border: vec![vec![false; len]; len.saturating_sub(1)],
            vertical_border: vec![vec![false; len.saturating_sub(1)]; len],
            all_shown: true,
        }
    }

    /// Marks become small white dots on the border midpoints, drawn in
    /// front of the grid lines.
    pub(crate) fn export_to_penpa(&self) -> BoardData {
        let mut items = Vec::new();
        let mut push = |y: usize, x: usize, direction: EdgeDirection| {
            let cell = sudovar_core::Cell::from_indices(y, x);
            items.push(Item::Symbol {
                position: Position::Edge(Edge::new(cell.y, cell.x, direction)),
                color: 1,
                name: "circle_SS".to_owned(),
                is_front: true,
            });
        };
        for (y, row) in self.horizontal_border.iter().enumerate() {
            for (x, &marked) in row.iter().enumerate() {
                if marked {
                    push(y, x, EdgeDirection::Horizontal);
                }
            }
        }
        for (y, row) in self.vertical_border.iter().enumerate() {
            for (x, &marked) in row.iter().enumerate() {
                if marked {
                    push(y, x, EdgeDirection::Vertical);
                }
            }
        }
        BoardData { items, margin: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_become_front_dots() {
        let mut data = ConsecutiveData::new(3);
        data.vertical_border[1][1] = true;

        let export = data.export_to_penpa();
        assert_eq!(
            export.items,
            vec![Item::Symbol {
                position: Position::Edge(Edge::new(1, 1, EdgeDirection::Vertical)),
                color: 1,
                name: "circle_SS".to_owned(),
                is_front: true,
            }],
        );
    }
}
