//! The closed rule registry of the sudoku-variant editor core.
//!
//! A *rule* is a pluggable constraint type (killer cages, thermometers,
//! skyscraper clues, ...) with its own persisted data shape and its own
//! export logic. The editor UI owns each rule's interaction; this crate
//! owns everything export and persistence need:
//!
//! - [`RuleKind`]: the closed set of rule names,
//! - per-rule data types (one module per rule, e.g. [`killer::KillerData`]),
//! - [`RuleData`]: the tagged union over all per-rule data, with the
//!   registry operations [`RuleData::initial`] (default-data factory),
//!   [`RuleData::export_to_penpa`] (the rule export contract), and the
//!   JSON codec hooks used by the save/load string format,
//! - [`Problem`]: a board size, the ordered set of enabled rules, and a
//!   complete per-rule data set.
//!
//! # Examples
//!
//! ```
//! use sudovar_rules::{Problem, RuleKind};
//!
//! let problem = Problem::new(9, 3);
//! assert!(problem.is_enabled(RuleKind::GivenNumbers));
//! assert!(!problem.is_enabled(RuleKind::Killer));
//! // Every known rule has data, enabled or not.
//! let _ = problem.rule_data.get(RuleKind::Killer);
//! ```

pub mod answer;
pub mod arrow;
pub mod blocks;
pub mod consecutive;
pub mod diagonal;
pub mod extra_regions;
pub mod forbidden_candidates;
pub mod given_numbers;
pub mod killer;
pub mod no_touch;
pub mod non_consecutive;
pub mod odd_even;
pub mod palindrome;
mod problem;
pub mod regions;
pub mod skyscrapers;
pub mod thermo;
pub mod xv;

use serde::Serialize;
use sudovar_core::BoardData;

pub use self::problem::{Problem, RuleDataSet};
use self::{
    answer::AnswerData, arrow::ArrowData, blocks::BlocksData,
    consecutive::ConsecutiveData, diagonal::DiagonalData,
    extra_regions::ExtraRegionsData, forbidden_candidates::ForbiddenCandidatesData,
    given_numbers::GivenNumbersData, killer::KillerData, no_touch::NoTouchData,
    non_consecutive::NonConsecutiveData, odd_even::OddEvenData,
    palindrome::PalindromeData, skyscrapers::SkyscrapersData, thermo::ThermoData,
    xv::XvData,
};

/// Identifies one of the known rules.
///
/// The declaration order is the registry order: exports iterate a problem's
/// enabled rules in this order, and [`RuleKind::ALL`] lists it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleKind {
    /// The solver's answer grid; never exported as clues.
    Answer,
    /// Given (clue) digits.
    GivenNumbers,
    /// Block (box) borders.
    Blocks,
    /// Main/anti diagonal constraints.
    Diagonal,
    /// Odd/even cell markers.
    OddEven,
    /// Orthogonally adjacent digits must not be consecutive.
    NonConsecutive,
    /// Equal digits must not touch diagonally.
    NoTouch,
    /// X and V sum marks on cell borders.
    Xv,
    /// Consecutive-pair marks on cell borders.
    Consecutive,
    /// Per-cell forbidden candidate digits.
    ForbiddenCandidates,
    /// Killer cages with optional sums.
    Killer,
    /// Extra regions acting as additional houses.
    ExtraRegions,
    /// Thermometers.
    Thermo,
    /// Arrows.
    Arrow,
    /// Palindrome lines.
    Palindrome,
    /// Skyscraper clues around the board.
    Skyscrapers,
}

impl RuleKind {
    /// All known rules, in registry order.
    pub const ALL: [Self; 16] = [
        Self::Answer,
        Self::GivenNumbers,
        Self::Blocks,
        Self::Diagonal,
        Self::OddEven,
        Self::NonConsecutive,
        Self::NoTouch,
        Self::Xv,
        Self::Consecutive,
        Self::ForbiddenCandidates,
        Self::Killer,
        Self::ExtraRegions,
        Self::Thermo,
        Self::Arrow,
        Self::Palindrome,
        Self::Skyscrapers,
    ];

    /// The rule's persisted name.
    ///
    /// These names appear verbatim in saved problem strings and must not
    /// change.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Answer => "answer",
            Self::GivenNumbers => "givenNumbers",
            Self::Blocks => "blocks",
            Self::Diagonal => "diagonal",
            Self::OddEven => "oddEven",
            Self::NonConsecutive => "nonConsecutive",
            Self::NoTouch => "noTouch",
            Self::Xv => "xv",
            Self::Consecutive => "consecutive",
            Self::ForbiddenCandidates => "forbiddenCandidates",
            Self::Killer => "killer",
            Self::ExtraRegions => "extraRegions",
            Self::Thermo => "thermo",
            Self::Arrow => "arrow",
            Self::Palindrome => "palindrome",
            Self::Skyscrapers => "skyscrapers",
        }
    }

    /// Looks up a rule by its persisted name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Converts a board size into a container length.
pub(crate) fn grid_len(size: u32) -> usize {
    usize::try_from(size).expect("board size fits in usize")
}

/// Strongly-typed per-rule data, tagged by rule.
///
/// This is the Rust rendition of the original editor's opaque
/// `ruleData: Map<string, any>`: one variant per rule, each carrying that
/// rule's persisted shape.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleData {
    /// Data for [`RuleKind::Answer`].
    Answer(AnswerData),
    /// Data for [`RuleKind::GivenNumbers`].
    GivenNumbers(GivenNumbersData),
    /// Data for [`RuleKind::Blocks`].
    Blocks(BlocksData),
    /// Data for [`RuleKind::Diagonal`].
    Diagonal(DiagonalData),
    /// Data for [`RuleKind::OddEven`].
    OddEven(OddEvenData),
    /// Data for [`RuleKind::NonConsecutive`].
    NonConsecutive(NonConsecutiveData),
    /// Data for [`RuleKind::NoTouch`].
    NoTouch(NoTouchData),
    /// Data for [`RuleKind::Xv`].
    Xv(XvData),
    /// Data for [`RuleKind::Consecutive`].
    Consecutive(ConsecutiveData),
    /// Data for [`RuleKind::ForbiddenCandidates`].
    ForbiddenCandidates(ForbiddenCandidatesData),
    /// Data for [`RuleKind::Killer`].
    Killer(KillerData),
    /// Data for [`RuleKind::ExtraRegions`].
    ExtraRegions(ExtraRegionsData),
    /// Data for [`RuleKind::Thermo`].
    Thermo(ThermoData),
    /// Data for [`RuleKind::Arrow`].
    Arrow(ArrowData),
    /// Data for [`RuleKind::Palindrome`].
    Palindrome(PalindromeData),
    /// Data for [`RuleKind::Skyscrapers`].
    Skyscrapers(SkyscrapersData),
}

impl RuleData {
    /// Creates a rule's default data for a fresh board.
    ///
    /// `block_width` only affects [`RuleKind::Blocks`]; `0` means "no
    /// block borders".
    #[must_use]
    pub fn initial(kind: RuleKind, size: u32, block_width: u32) -> Self {
        match kind {
            RuleKind::Answer => Self::Answer(AnswerData::new(size)),
            RuleKind::GivenNumbers => Self::GivenNumbers(GivenNumbersData::new(size)),
            RuleKind::Blocks => Self::Blocks(BlocksData::new(size, block_width)),
            RuleKind::Diagonal => Self::Diagonal(DiagonalData::new()),
            RuleKind::OddEven => Self::OddEven(OddEvenData::new(size)),
            RuleKind::NonConsecutive => Self::NonConsecutive(NonConsecutiveData {}),
            RuleKind::NoTouch => Self::NoTouch(NoTouchData {}),
            RuleKind::Xv => Self::Xv(XvData::new(size)),
            RuleKind::Consecutive => Self::Consecutive(ConsecutiveData::new(size)),
            RuleKind::ForbiddenCandidates => {
                Self::ForbiddenCandidates(ForbiddenCandidatesData::new(size))
            }
            RuleKind::Killer => Self::Killer(KillerData::new()),
            RuleKind::ExtraRegions => Self::ExtraRegions(ExtraRegionsData::new()),
            RuleKind::Thermo => Self::Thermo(ThermoData::new()),
            RuleKind::Arrow => Self::Arrow(ArrowData::new()),
            RuleKind::Palindrome => Self::Palindrome(PalindromeData::new()),
            RuleKind::Skyscrapers => Self::Skyscrapers(SkyscrapersData::new(size)),
        }
    }

    /// The rule this data belongs to.
    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        match self {
            Self::Answer(_) => RuleKind::Answer,
            Self::GivenNumbers(_) => RuleKind::GivenNumbers,
            Self::Blocks(_) => RuleKind::Blocks,
            Self::Diagonal(_) => RuleKind::Diagonal,
            Self::OddEven(_) => RuleKind::OddEven,
            Self::NonConsecutive(_) => RuleKind::NonConsecutive,
            Self::NoTouch(_) => RuleKind::NoTouch,
            Self::Xv(_) => RuleKind::Xv,
            Self::Consecutive(_) => RuleKind::Consecutive,
            Self::ForbiddenCandidates(_) => RuleKind::ForbiddenCandidates,
            Self::Killer(_) => RuleKind::Killer,
            Self::ExtraRegions(_) => RuleKind::ExtraRegions,
            Self::Thermo(_) => RuleKind::Thermo,
            Self::Arrow(_) => RuleKind::Arrow,
            Self::Palindrome(_) => RuleKind::Palindrome,
            Self::Skyscrapers(_) => RuleKind::Skyscrapers,
        }
    }

    /// Produces the rule's export contribution, or `None` for a rule with
    /// no export capability.
    ///
    /// This is the rule export contract: the result reflects only this
    /// rule's own data (aggregation and conflict detection across rules
    /// belong to the exporter), and the declared margin covers exactly the
    /// outside rings the returned items use. A rule with nothing to draw
    /// returns an empty contribution, not `None`.
    #[must_use]
    pub fn export_to_penpa(&self) -> Option<BoardData> {
        match self {
            Self::Answer(data) => Some(data.export_to_penpa()),
            Self::GivenNumbers(data) => Some(data.export_to_penpa()),
            Self::Blocks(data) => Some(data.export_to_penpa()),
            Self::Diagonal(data) => Some(data.export_to_penpa()),
            Self::OddEven(data) => Some(data.export_to_penpa()),
            Self::NonConsecutive(data) => Some(data.export_to_penpa()),
            Self::NoTouch(data) => Some(data.export_to_penpa()),
            Self::Xv(data) => Some(data.export_to_penpa()),
            Self::Consecutive(data) => Some(data.export_to_penpa()),
            // Forbidden candidates have no representation in the wire
            // format; exporting a problem with this rule enabled is a
            // typed error at the export entry point.
            Self::ForbiddenCandidates(_) => None,
            Self::Killer(data) => Some(data.export_to_penpa()),
            Self::ExtraRegions(data) => Some(data.export_to_penpa()),
            Self::Thermo(data) => Some(data.export_to_penpa()),
            Self::Arrow(data) => Some(data.export_to_penpa()),
            Self::Palindrome(data) => Some(data.export_to_penpa()),
            Self::Skyscrapers(data) => Some(data.export_to_penpa()),
        }
    }

    /// Serializes the rule's data to its persisted JSON shape.
    ///
    /// # Panics
    ///
    /// Panics if serialization fails, which the persisted shapes cannot do
    /// (no non-string map keys, no fallible serializers).
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        fn value<T: Serialize>(data: &T) -> serde_json::Value {
            serde_json::to_value(data).expect("rule data serializes to JSON")
        }
        match self {
            Self::Answer(data) => value(data),
            Self::GivenNumbers(data) => value(data),
            Self::Blocks(data) => value(data),
            Self::Diagonal(data) => value(data),
            Self::OddEven(data) => value(data),
            Self::NonConsecutive(data) => value(data),
            Self::NoTouch(data) => value(data),
            Self::Xv(data) => value(data),
            Self::Consecutive(data) => value(data),
            Self::ForbiddenCandidates(data) => value(data),
            Self::Killer(data) => value(data),
            Self::ExtraRegions(data) => value(data),
            Self::Thermo(data) => value(data),
            Self::Arrow(data) => value(data),
            Self::Palindrome(data) => value(data),
            Self::Skyscrapers(data) => value(data),
        }
    }

    /// Deserializes a rule's data from its persisted JSON shape.
    ///
    /// # Errors
    ///
    /// Returns the underlying decode error when `value` does not match the
    /// rule's shape.
    pub fn from_json(
        kind: RuleKind,
        value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            RuleKind::Answer => Self::Answer(serde_json::from_value(value)?),
            RuleKind::GivenNumbers => Self::GivenNumbers(serde_json::from_value(value)?),
            RuleKind::Blocks => Self::Blocks(serde_json::from_value(value)?),
            RuleKind::Diagonal => Self::Diagonal(serde_json::from_value(value)?),
            RuleKind::OddEven => Self::OddEven(serde_json::from_value(value)?),
            RuleKind::NonConsecutive => {
                Self::NonConsecutive(serde_json::from_value(value)?)
            }
            RuleKind::NoTouch => Self::NoTouch(serde_json::from_value(value)?),
            RuleKind::Xv => Self::Xv(serde_json::from_value(value)?),
            RuleKind::Consecutive => Self::Consecutive(serde_json::from_value(value)?),
            RuleKind::ForbiddenCandidates => {
                Self::ForbiddenCandidates(serde_json::from_value(value)?)
            }
            RuleKind::Killer => Self::Killer(serde_json::from_value(value)?),
            RuleKind::ExtraRegions => Self::ExtraRegions(serde_json::from_value(value)?),
            RuleKind::Thermo => Self::Thermo(serde_json::from_value(value)?),
            RuleKind::Arrow => Self::Arrow(serde_json::from_value(value)?),
            RuleKind::Palindrome => Self::Palindrome(serde_json::from_value(value)?),
            RuleKind::Skyscrapers => Self::Skyscrapers(serde_json::from_value(value)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in RuleKind::ALL {
            assert_eq!(RuleKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(RuleKind::from_name("noSuchRule"), None);
    }

    #[test]
    fn all_is_in_declaration_order() {
        for (i, kind) in RuleKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn initial_data_matches_kind() {
        for kind in RuleKind::ALL {
            let data = RuleData::initial(kind, 6, 3);
            assert_eq!(data.kind(), kind);
        }
    }

    #[test]
    fn json_round_trip_for_every_rule() {
        for kind in RuleKind::ALL {
            let data = RuleData::initial(kind, 4, 2);
            let decoded = RuleData::from_json(kind, data.to_json()).unwrap();
            assert_eq!(decoded, data);
        }
    }

    #[test]
    fn only_forbidden_candidates_lacks_export() {
        for kind in RuleKind::ALL {
            let data = RuleData::initial(kind, 4, 0);
            let export = data.export_to_penpa();
            assert_eq!(export.is_none(), kind == RuleKind::ForbiddenCandidates);
        }
    }
}
