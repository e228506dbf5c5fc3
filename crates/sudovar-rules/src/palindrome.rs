//! Palindrome lines: digits read the same from either end of the path.

use serde::{Deserialize, Serialize};
use sudovar_core::{BoardData, Cell, Item, Position};

/// Viewer line style for palindrome segments (thick gray).
const PALINDROME_LINE_STYLE: i64 = 3;

/// Persisted data: the palindrome paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PalindromeData {
    /// Each path lists its cells end to end.
    pub palindromes: Vec<Vec<Cell>>,
}

impl PalindromeData {
    pub(crate) fn new() -> Self {
        Self { palindromes: Vec::new() }
    }

    /// Each path becomes one line segment per consecutive cell pair.
    pub(crate) fn export_to_penpa(&self) -> BoardData {
        let mut items = Vec::new();
        for path in &self.palindromes {
            for pair in path.windows(2) {
                items.push(Item::Line {
                    position1: Position::Cell(pair[0]),
                    position2: Position::Cell(pair[1]),
                    style: PALINDROME_LINE_STYLE,
                });
            }
        }
        BoardData { items, margin: 0 }
    }
}
