//! The puzzle-under-construction model.

use crate::{RuleData, RuleKind};

/// Data for every known rule, indexed by [`RuleKind`].
///
/// The set is structurally complete: it can only be built by filling every
/// rule with its default data, and replacement never removes an entry.
/// Which entries are authoritative is decided by the owning problem's
/// enabled-rule list; the rest are carried along and regenerated with
/// defaults on load.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleDataSet {
    data: Vec<RuleData>,
}

impl RuleDataSet {
    /// Creates default data for every known rule.
    #[must_use]
    pub fn new(size: u32, block_width: u32) -> Self {
        let data = RuleKind::ALL
            .into_iter()
            .map(|kind| RuleData::initial(kind, size, block_width))
            .collect();
        Self { data }
    }

    /// Returns the data for one rule.
    #[must_use]
    pub fn get(&self, kind: RuleKind) -> &RuleData {
        &self.data[kind.index()]
    }

    /// Returns the data for one rule, mutably.
    #[must_use]
    pub fn get_mut(&mut self, kind: RuleKind) -> &mut RuleData {
        &mut self.data[kind.index()]
    }

    /// Replaces one rule's data.
    pub fn set(&mut self, data: RuleData) {
        let index = data.kind().index();
        self.data[index] = data;
    }
}

/// A sudoku-variant puzzle being edited.
///
/// Created by the editor UI or by the save/load codec; consumed read-only
/// by the exporter and the codec.
///
/// # Examples
///
/// ```
/// use sudovar_rules::{Problem, RuleKind};
///
/// let mut problem = Problem::new(9, 3);
/// problem.enable(RuleKind::Killer);
/// assert_eq!(
///     problem.enabled_rules,
///     vec![RuleKind::GivenNumbers, RuleKind::Blocks, RuleKind::Killer],
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    /// Board side length; the board is `size × size`.
    pub size: u32,
    /// Enabled rules, in enabling order. Export iterates this order.
    pub enabled_rules: Vec<RuleKind>,
    /// Data for every known rule, enabled or not.
    pub rule_data: RuleDataSet,
}

impl Problem {
    /// Creates a fresh problem with the default rule set
    /// (given numbers and blocks) enabled.
    #[must_use]
    pub fn new(size: u32, block_width: u32) -> Self {
        Self {
            size,
            enabled_rules: vec![RuleKind::GivenNumbers, RuleKind::Blocks],
            rule_data: RuleDataSet::new(size, block_width),
        }
    }

    /// Creates a problem with an explicit enabled-rule list.
    #[must_use]
    pub fn with_rules(size: u32, block_width: u32, enabled_rules: Vec<RuleKind>) -> Self {
        Self {
            size,
            enabled_rules,
            rule_data: RuleDataSet::new(size, block_width),
        }
    }

    /// Whether a rule is enabled.
    #[must_use]
    pub fn is_enabled(&self, kind: RuleKind) -> bool {
        self.enabled_rules.contains(&kind)
    }

    /// Enables a rule, keeping the enabling order; no-op if already enabled.
    pub fn enable(&mut self, kind: RuleKind) {
        if !self.is_enabled(kind) {
            self.enabled_rules.push(kind);
        }
    }
}
