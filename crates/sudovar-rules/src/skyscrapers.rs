//! Skyscraper clues: counts of visible "buildings" from outside the board.

use serde::{Deserialize, Serialize};
use sudovar_core::{BoardData, Cell, Item, Position};

/// Persisted data: one optional clue per row and column end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkyscrapersData {
    /// Clues above each column, looking down.
    pub up: Vec<Option<u32>>,
    /// Clues below each column, looking up.
    pub down: Vec<Option<u32>>,
    /// Clues left of each row, looking right.
    pub left: Vec<Option<u32>>,
    /// Clues right of each row, looking left.
    pub right: Vec<Option<u32>>,
}

impl SkyscrapersData {
    pub(crate) fn new(size: u32) -> Self {
        let len = crate::grid_len(size);
        Self {
            up: vec![None; len],
            down: vec![None; len],
            left: vec![None; len],
            right: vec![None; len],
        }
    }

    /// Clues become texts in the outside ring; the margin is declared only
    /// when at least one clue exists.
    pub(crate) fn export_to_penpa(&self) -> BoardData {
        let size = i32::try_from(self.up.len()).unwrap_or(0);
        let mut items = Vec::new();
        let mut push = |y: i32, x: i32, clue: Option<u32>| {
            if let Some(clue) = clue {
                items.push(Item::Text {
                    position: Position::Cell(Cell::new(y, x)),
                    value: clue.to_string(),
                    color: 1,
                    style: "1".to_owned(),
                });
            }
        };
        for (i, &clue) in self.up.iter().enumerate() {
            push(-1, i32::try_from(i).unwrap_or(0), clue);
        }
        for (i, &clue) in self.down.iter().enumerate() {
            push(size, i32::try_from(i).unwrap_or(0), clue);
        }
        for (i, &clue) in self.left.iter().enumerate() {
            push(i32::try_from(i).unwrap_or(0), -1, clue);
        }
        for (i, &clue) in self.right.iter().enumerate() {
            push(i32::try_from(i).unwrap_or(0), size, clue);
        }
        let margin = u32::from(!items.is_empty());
        BoardData { items, margin }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clues_export_to_outside_cells() {
        let mut data = SkyscrapersData::new(4);
        data.up[2] = Some(3);
        data.right[0] = Some(1);

        let export = data.export_to_penpa();
        assert_eq!(export.margin, 1);
        assert_eq!(
            export.items,
            vec![
                Item::Text {
                    position: Position::Cell(Cell::new(-1, 2)),
                    value: "3".to_owned(),
                    color: 1,
                    style: "1".to_owned(),
                },
                Item::Text {
                    position: Position::Cell(Cell::new(0, 4)),
                    value: "1".to_owned(),
                    color: 1,
                    style: "1".to_owned(),
                },
            ],
        );
    }

    #[test]
    fn no_clues_means_no_margin() {
        let export = SkyscrapersData::new(9).export_to_penpa();
        assert_eq!(export, BoardData::default());
    }
}
