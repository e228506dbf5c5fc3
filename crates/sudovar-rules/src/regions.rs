//! Shared data shape for region-based rules (killer cages, extra regions).

use serde::{Deserialize, Serialize};
use sudovar_core::Cell;

/// A set of cells with an optional attached value (a cage sum).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// The region's cells, in the order the user drew them.
    pub cells: Vec<Cell>,
    /// Attached value, if any; killer cages use this for the sum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_value: Option<u32>,
}

impl Region {
    /// The top-left-most cell (smallest `y`, then smallest `x`), where
    /// corner annotations go. `None` for an empty region.
    #[must_use]
    pub fn anchor_cell(&self) -> Option<Cell> {
        self.cells.iter().copied().min_by_key(|cell| (cell.y, cell.x))
    }
}
