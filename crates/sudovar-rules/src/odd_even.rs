//! Odd/even cell markers.

use serde::{Deserialize, Serialize};
use sudovar_core::{BoardData, Cell, Item, Position};

/// Marker for an unconstrained cell.
pub const KIND_NONE: u8 = 0;
/// Marker for an odd cell (gray circle).
pub const KIND_ODD: u8 = 1;
/// Marker for an even cell (gray square).
pub const KIND_EVEN: u8 = 2;

/// Persisted data: a parity marker per cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OddEvenData {
    /// `cell_kind[y][x]` is one of [`KIND_NONE`], [`KIND_ODD`],
    /// [`KIND_EVEN`].
    pub cell_kind: Vec<Vec<u8>>,
}

impl OddEvenData {
    pub(crate) fn new(size: u32) -> Self {
        let size = crate::grid_len(size);
        Self { cell_kind: vec![vec![KIND_NONE; size]; size] }
    }

    /// Odd cells become large gray circles, even cells large gray squares,
    /// both drawn behind digits.
    pub(crate) fn export_to_penpa(&self) -> BoardData {
        let mut items = Vec::new();
        for (y, row) in self.cell_kind.iter().enumerate() {
            for (x, &kind) in row.iter().enumerate() {
                let name = match kind {
                    KIND_ODD => "circle_L",
                    KIND_EVEN => "square_L",
                    _ => continue,
                };
                items.push(Item::Symbol {
                    position: Position::Cell(Cell::from_indices(y, x)),
                    color: 3,
                    name: name.to_owned(),
                    is_front: false,
                });
            }
        }
        BoardData { items, margin: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_become_symbols() {
        let mut data = OddEvenData::new(3);
        data.cell_kind[0][1] = KIND_ODD;
        data.cell_kind[2][2] = KIND_EVEN;

        let export = data.export_to_penpa();
        assert_eq!(
            export.items,
            vec![
                Item::Symbol {
                    position: Position::Cell(Cell::new(0, 1)),
                    color: 3,
                    name: "circle_L".to_owned(),
                    is_front: false,
                },
                Item::Symbol {
                    position: Position::Cell(Cell::new(2, 2)),
                    color: 3,
                    name: "square_L".to_owned(),
                    is_front: false,
                },
            ],
        );
    }
}
