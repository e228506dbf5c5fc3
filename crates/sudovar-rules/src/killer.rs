//! Killer cages: regions whose digits sum to a target without repeating.

use serde::{Deserialize, Serialize};
use sudovar_core::{BoardData, Corner, Item, SmallCell};

use crate::regions::Region;

/// Viewer frame style for cage outlines (dashed).
const CAGE_FRAME_STYLE: i64 = 10;

/// Persisted data: the cages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KillerData {
    /// The cages; `extra_value` carries the cage sum, if given.
    pub regions: Vec<Region>,
}

impl KillerData {
    pub(crate) fn new() -> Self {
        Self { regions: Vec::new() }
    }

    /// Every cage becomes a dashed frame outline; a cage with a sum also
    /// gets the sum as small text in the upper-left corner of its
    /// top-left-most cell.
    pub(crate) fn export_to_penpa(&self) -> BoardData {
        let mut items = Vec::new();
        for region in &self.regions {
            if region.cells.is_empty() {
                continue;
            }
            items.push(Item::Region {
                cells: region.cells.clone(),
                style: CAGE_FRAME_STYLE,
            });
            if let (Some(sum), Some(anchor)) = (region.extra_value, region.anchor_cell())
            {
                items.push(Item::SmallText {
                    position: SmallCell::new(anchor.y, anchor.x, Corner::UpLeft),
                    value: sum.to_string(),
                    color: 1,
                });
            }
        }
        BoardData { items, margin: 0 }
    }
}
