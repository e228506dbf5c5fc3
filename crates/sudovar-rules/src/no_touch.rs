//! No-touch rule: equal digits must not touch diagonally. A global rule
//! with no per-board data and no visual marks.

use serde::{Deserialize, Serialize};
use sudovar_core::BoardData;

/// Persisted data: none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoTouchData {}

impl NoTouchData {
    pub(crate) fn export_to_penpa(&self) -> BoardData {
        BoardData::default()
    }
}
