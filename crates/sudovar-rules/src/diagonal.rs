//! Main/anti diagonal constraints.

use serde::{Deserialize, Serialize};
use sudovar_core::{BoardData, DiagonalDirection, Item};

/// Persisted data: which diagonals are constrained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagonalData {
    /// Top-left to bottom-right.
    pub main_diagonal: bool,
    /// Top-right to bottom-left.
    pub anti_diagonal: bool,
}

impl DiagonalData {
    pub(crate) fn new() -> Self {
        Self { main_diagonal: true, anti_diagonal: true }
    }

    pub(crate) fn export_to_penpa(&self) -> BoardData {
        let mut items = Vec::new();
        if self.main_diagonal {
            items.push(Item::Diagonal { direction: DiagonalDirection::Main });
        }
        if self.anti_diagonal {
            items.push(Item::Diagonal { direction: DiagonalDirection::Anti });
        }
        BoardData { items, margin: 0 }
    }
}
