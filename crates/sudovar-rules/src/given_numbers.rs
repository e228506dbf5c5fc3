//! Given (clue) digits.

use serde::{Deserialize, Serialize};
use sudovar_core::{BoardData, Cell, Item, Position};

/// Persisted data: one optional given digit per cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GivenNumbersData {
    /// `numbers[y][x]` is the given digit at that cell, if any.
    pub numbers: Vec<Vec<Option<u32>>>,
}

impl GivenNumbersData {
    pub(crate) fn new(size: u32) -> Self {
        let size = crate::grid_len(size);
        Self { numbers: vec![vec![None; size]; size] }
    }

    /// Every given digit becomes black text centered on its cell.
    pub(crate) fn export_to_penpa(&self) -> BoardData {
        let mut items = Vec::new();
        for (y, row) in self.numbers.iter().enumerate() {
            for (x, number) in row.iter().enumerate() {
                if let Some(number) = number {
                    items.push(Item::Text {
                        position: Position::Cell(Cell::from_indices(y, x)),
                        value: number.to_string(),
                        color: 1,
                        style: "1".to_owned(),
                    });
                }
            }
        }
        BoardData { items, margin: 0 }
    }
}
