//! XV sum marks on cell borders.

use serde::{Deserialize, Serialize};
use sudovar_core::{BoardData, Edge, EdgeDirection, Item, Position};

/// Marker for an unmarked border.
pub const MARK_NONE: u8 = 0;
/// Marker for an X border (the pair sums to 10).
pub const MARK_X: u8 = 1;
/// Marker for a V border (the pair sums to 5).
pub const MARK_V: u8 = 2;

/// Persisted data: a mark per inner border, plus whether the marks are
/// exhaustive (unmarked borders then forbid both sums).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XvData {
    /// `horizontal_border[y][x]` marks the border between cells `(y, x)`
    /// and `(y + 1, x)`.
    pub horizontal_border: Vec<Vec<u8>>,
    /// `vertical_border[y][x]` marks the border between cells `(y, x)` and
    /// `(y, x + 1)`.
    pub vertical_border: Vec<Vec<u8>>,
    /// Whether every X/V pair on the board is marked.
    pub all_shown: bool,
}

impl XvData {
    pub(crate) fn new(size: u32) -> Self {
        let len = crate::grid_len(size);
        Self {
            horizontal_border: vec![vec![MARK_NONE; len]; len.saturating_sub(1)],
            vertical_border: vec![vec![MARK_NONE; len.saturating_sub(1)]; len],
            all_shown: true,
        }
    }

    /// Marks become "X"/"V" texts on the border midpoints.
    pub(crate) fn export_to_penpa(&self) -> BoardData {
        let mut items = Vec::new();
        let mut push = |y: usize, x: usize, direction: EdgeDirection, mark: u8| {
            let value = match mark {
                MARK_X => "X",
                MARK_V => "V",
                _ => return,
            };
            let cell = sudovar_core::Cell::from_indices(y, x);
            items.push(Item::Text {
                position: Position::Edge(Edge::new(cell.y, cell.x, direction)),
                value: value.to_owned(),
                color: 1,
                style: "1".to_owned(),
            });
        };
        for (y, row) in self.horizontal_border.iter().enumerate() {
            for (x, &mark) in row.iter().enumerate() {
                push(y, x, EdgeDirection::Horizontal, mark);
            }
        }
        for (y, row) in self.vertical_border.iter().enumerate() {
            for (x, &mark) in row.iter().enumerate() {
                push(y, x, EdgeDirection::Vertical, mark);
            }
        }
        BoardData { items, margin: 0 }
    }
}
