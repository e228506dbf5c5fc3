//! Non-consecutive rule: orthogonally adjacent digits must not be
//! consecutive. A global rule with no per-board data and no visual marks.

use serde::{Deserialize, Serialize};
use sudovar_core::BoardData;

/// Persisted data: none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonConsecutiveData {}

impl NonConsecutiveData {
    pub(crate) fn export_to_penpa(&self) -> BoardData {
        BoardData::default()
    }
}
