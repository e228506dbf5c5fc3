//! The answer grid: digits filled in while testing a puzzle.
//!
//! Answers are working state for the puzzle author, not clues, so the rule
//! participates in save/load but contributes nothing to an export.

use serde::{Deserialize, Serialize};
use sudovar_core::BoardData;

/// Persisted data: one optional digit per cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerData {
    /// `numbers[y][x]` is the answer digit at that cell, if any.
    pub numbers: Vec<Vec<Option<u32>>>,
}

impl AnswerData {
    pub(crate) fn new(size: u32) -> Self {
        let size = crate::grid_len(size);
        Self { numbers: vec![vec![None; size]; size] }
    }

    pub(crate) fn export_to_penpa(&self) -> BoardData {
        BoardData::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_are_never_exported() {
        let mut data = AnswerData::new(4);
        data.numbers[1][1] = Some(3);
        assert_eq!(data.export_to_penpa(), BoardData::default());
    }
}
