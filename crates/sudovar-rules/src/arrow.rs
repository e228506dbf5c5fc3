//! Arrows: the shaft digits sum to the digit in the bulb.

use serde::{Deserialize, Serialize};
use sudovar_core::{BoardData, Cell, Item};

/// Persisted data: the arrow paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowData {
    /// Each path lists its cells bulb-first.
    pub arrows: Vec<Vec<Cell>>,
}

impl ArrowData {
    pub(crate) fn new() -> Self {
        Self { arrows: Vec::new() }
    }

    pub(crate) fn export_to_penpa(&self) -> BoardData {
        let items = self
            .arrows
            .iter()
            .filter(|cells| !cells.is_empty())
            .map(|cells| Item::Arrow { cells: cells.clone() })
            .collect();
        BoardData { items, margin: 0 }
    }
}
