//! Per-cell forbidden candidate digits.
//!
//! A purely logical constraint: the target wire format has no way to show
//! "digit d is forbidden here", so this rule deliberately provides no
//! export capability (see [`RuleData::export_to_penpa`]).
//!
//! [`RuleData::export_to_penpa`]: crate::RuleData::export_to_penpa

use serde::{Deserialize, Serialize};

/// Persisted data: a flag per cell and digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForbiddenCandidatesData {
    /// `is_forbidden[y][x][d]` forbids digit `d + 1` at cell `(y, x)`.
    pub is_forbidden: Vec<Vec<Vec<bool>>>,
}

impl ForbiddenCandidatesData {
    pub(crate) fn new(size: u32) -> Self {
        let size = crate::grid_len(size);
        Self { is_forbidden: vec![vec![vec![false; size]; size]; size] }
    }
}
