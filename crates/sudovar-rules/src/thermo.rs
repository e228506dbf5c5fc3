//! Thermometers: digits strictly increase from the bulb along the path.

use serde::{Deserialize, Serialize};
use sudovar_core::{BoardData, Cell, Item};

/// Persisted data: the thermometer paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThermoData {
    /// Each path lists its cells bulb-first.
    pub thermos: Vec<Vec<Cell>>,
}

impl ThermoData {
    pub(crate) fn new() -> Self {
        Self { thermos: Vec::new() }
    }

    pub(crate) fn export_to_penpa(&self) -> BoardData {
        let items = self
            .thermos
            .iter()
            .filter(|cells| !cells.is_empty())
            .map(|cells| Item::Thermo { cells: cells.clone() })
            .collect();
        BoardData { items, margin: 0 }
    }
}
