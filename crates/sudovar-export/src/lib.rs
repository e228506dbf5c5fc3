//! Penpa URL export for sudoku-variant problems.
//!
//! The exporter turns a [`Problem`] into a URL the external Penpa viewer
//! can open. Each enabled rule contributes a [`BoardData`] through the
//! rule export contract; the contributions are aggregated into the
//! format's ID-addressed buckets with first-write-wins conflict
//! detection, assembled into the multi-line wire document, deflated, and
//! base64-encoded behind a fixed URL prefix.
//!
//! # Examples
//!
//! ```
//! use sudovar_export::export_problem;
//! use sudovar_rules::Problem;
//!
//! let export = export_problem(&Problem::new(9, 3)).unwrap();
//! assert!(export.url.starts_with(sudovar_export::URL_PREFIX));
//! assert!(!export.has_conflicts);
//! ```

mod aggregate;
mod document;
mod point;

use log::warn;
use sudovar_core::BoardData;
use sudovar_rules::{Problem, RuleKind};

pub use self::document::{URL_PREFIX, export_board_data};

/// A successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PenpaExport {
    /// The shareable viewer URL.
    pub url: String,
    /// Whether any item was dropped because another item already claimed
    /// its wire-format key.
    pub has_conflicts: bool,
}

/// An export that could not even start.
///
/// Conflicts are not errors: they are reported on the successful result.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ExportError {
    /// An enabled rule has no export capability.
    #[display("export is not supported for rule \"{}\"", rule.name())]
    ExportNotSupported {
        /// The rule lacking an export.
        rule: RuleKind,
    },
}

/// Exports a problem to a shareable Penpa URL.
///
/// Iterates the enabled rules in their enabling order and collects each
/// rule's contribution. Conflicts between contributions are flagged on
/// the result, not fatal.
///
/// # Errors
///
/// Fails with [`ExportError::ExportNotSupported`] when an enabled rule
/// has no wire-format representation.
pub fn export_problem(problem: &Problem) -> Result<PenpaExport, ExportError> {
    let mut data = Vec::with_capacity(problem.enabled_rules.len());
    for &rule in &problem.enabled_rules {
        let board: BoardData = problem
            .rule_data
            .get(rule)
            .export_to_penpa()
            .ok_or(ExportError::ExportNotSupported { rule })?;
        data.push(board);
    }
    let export = export_board_data(problem.size, &data);
    if export.has_conflicts {
        warn!("export dropped overlapping items; the URL is missing some constraint data");
    }
    Ok(export)
}

#[cfg(test)]
mod tests {
    use sudovar_core::{Cell, Item, Position};
    use sudovar_rules::RuleData;

    use super::*;

    fn text_at(y: i32, x: i32, value: &str) -> Item {
        Item::Text {
            position: Position::Cell(Cell::new(y, x)),
            value: value.to_owned(),
            color: 1,
            style: "1".to_owned(),
        }
    }

    #[test]
    fn empty_4x4_answer_and_givens_export_the_golden_url() {
        use std::io::Read as _;

        use base64::Engine as _;
        use base64::engine::general_purpose::STANDARD;
        use flate2::read::DeflateDecoder;

        let problem =
            Problem::with_rules(4, 0, vec![RuleKind::Answer, RuleKind::GivenNumbers]);
        let export = export_problem(&problem).unwrap();
        assert!(!export.has_conflicts);

        // The URL must embed the golden document byte for byte.
        let encoded = export.url.strip_prefix(URL_PREFIX).unwrap();
        let bytes = STANDARD.decode(encoded).unwrap();
        let mut text = String::new();
        DeflateDecoder::new(&bytes[..]).read_to_string(&mut text).unwrap();
        assert_eq!(text, crate::document::EMPTY_4X4_DOCUMENT);

        assert_eq!(export, export_problem(&problem).unwrap());
    }

    #[test]
    fn overlapping_rules_flag_conflicts() {
        let mut problem = Problem::with_rules(4, 0, vec![RuleKind::GivenNumbers]);
        if let RuleData::GivenNumbers(data) =
            problem.rule_data.get_mut(RuleKind::GivenNumbers)
        {
            data.numbers[0][0] = Some(1);
        }

        // A second contribution claiming the same cell text key.
        let clash = BoardData { items: vec![text_at(0, 0, "2")], margin: 0 };
        let givens = problem
            .rule_data
            .get(RuleKind::GivenNumbers)
            .export_to_penpa()
            .unwrap();
        let export = export_board_data(4, &[givens, clash]);
        assert!(export.has_conflicts);
    }

    #[test]
    fn rule_without_export_is_a_typed_error() {
        let problem = Problem::with_rules(4, 0, vec![RuleKind::ForbiddenCandidates]);
        let err = export_problem(&problem).unwrap_err();
        assert_eq!(
            err,
            ExportError::ExportNotSupported { rule: RuleKind::ForbiddenCandidates },
        );
        assert_eq!(
            err.to_string(),
            "export is not supported for rule \"forbiddenCandidates\"",
        );
    }

    #[test]
    fn skyscraper_margin_pads_the_whole_board() {
        let mut problem = Problem::with_rules(4, 0, vec![RuleKind::Skyscrapers]);
        if let RuleData::Skyscrapers(data) =
            problem.rule_data.get_mut(RuleKind::Skyscrapers)
        {
            data.left[0] = Some(2);
        }

        let export = export_problem(&problem).unwrap();
        let unpadded =
            export_problem(&Problem::with_rules(4, 0, vec![RuleKind::Answer])).unwrap();
        assert_ne!(export.url, unpadded.url);
    }
}
