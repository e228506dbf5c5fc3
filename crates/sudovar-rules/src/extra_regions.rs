//! Extra regions: additional cell sets acting as houses.

use serde::{Deserialize, Serialize};
use sudovar_core::{BoardData, Item};

use crate::regions::Region;

const REGION_FRAME_STYLE: i64 = 10;
const REGION_SURFACE_STYLE: i64 = 8;

/// Persisted data: the regions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraRegionsData {
    /// The regions; `extra_value` is unused here.
    pub regions: Vec<Region>,
}

impl ExtraRegionsData {
    pub(crate) fn new() -> Self {
        Self { regions: Vec::new() }
    }

    /// Every region becomes a gray surface fill per cell plus a frame
    /// outline.
    pub(crate) fn export_to_penpa(&self) -> BoardData {
        let mut items = Vec::new();
        for region in &self.regions {
            if region.cells.is_empty() {
                continue;
            }
            for &cell in &region.cells {
                items.push(Item::Cell { position: cell, style: REGION_SURFACE_STYLE });
            }
            items.push(Item::Region {
                cells: region.cells.clone(),
                style: REGION_FRAME_STYLE,
            });
        }
        BoardData { items, margin: 0 }
    }
}
