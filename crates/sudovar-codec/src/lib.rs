//! Compact save/load strings for sudoku-variant problems.
//!
//! A saved problem is a JSON object `{"size", "enabledRules", "ruleData"}`
//! holding data for the *enabled* rules only, raw-deflated and encoded
//! with the URL-safe base64 alphabet so it can be pasted anywhere a URI
//! component fits. Loading reconstructs a full [`Problem`]: rules absent
//! from the saved string get their default data back. Disabled-rule data
//! is discarded on save by design; the editor warns about this in its
//! save dialog.
//!
//! The format carries no version tag. Rule-data shapes are part of the
//! format and must stay decodable.
//!
//! # Examples
//!
//! ```
//! use sudovar_codec::{load_problem_from_string, save_problem_as_string};
//! use sudovar_rules::Problem;
//!
//! let problem = Problem::new(9, 3);
//! let saved = save_problem_as_string(&problem);
//! assert_eq!(load_problem_from_string(&saved).unwrap(), problem);
//! ```

use std::io::{Read as _, Write as _};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use flate2::Compression;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use serde_json::{Map, Value, json};
use sudovar_rules::{Problem, RuleData, RuleDataSet, RuleKind};

/// A save string that cannot be turned back into a problem.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CodecError {
    /// The string does not decode, decompress, or parse to the saved
    /// shape.
    #[display("invalid problem string")]
    InvalidProblemString,
    /// The string names a rule this build does not know.
    #[display("unknown rule \"{name}\"")]
    UnknownRule {
        /// The unrecognized rule name.
        name: String,
    },
}

/// Serializes a problem to a compact, URI-component-safe string.
///
/// Only enabled rules' data is persisted.
#[must_use]
pub fn save_problem_as_string(problem: &Problem) -> String {
    let mut rule_data = Map::new();
    for &rule in &problem.enabled_rules {
        rule_data.insert(
            rule.name().to_owned(),
            problem.rule_data.get(rule).to_json(),
        );
    }
    let names: Vec<_> = problem.enabled_rules.iter().map(|rule| rule.name()).collect();
    let doc = json!({
        "size": problem.size,
        "enabledRules": names,
        "ruleData": rule_data,
    });

    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(doc.to_string().as_bytes())
        .expect("writing to an in-memory encoder cannot fail");
    let bytes = encoder.finish().expect("in-memory deflate cannot fail");
    URL_SAFE_NO_PAD.encode(bytes)
}

fn inflate(s: &str) -> Result<String, CodecError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(s)
        .map_err(|_| CodecError::InvalidProblemString)?;
    let mut text = String::new();
    DeflateDecoder::new(&bytes[..])
        .read_to_string(&mut text)
        .map_err(|_| CodecError::InvalidProblemString)?;
    Ok(text)
}

/// Reconstructs a problem from a saved string.
///
/// Every known rule gets a data entry: saved data for the rules the
/// string enables, freshly-made defaults (with block width 0) for the
/// rest.
///
/// # Errors
///
/// [`CodecError::InvalidProblemString`] when the string does not decode
/// to the saved shape; [`CodecError::UnknownRule`] when it enables a rule
/// this build does not know.
pub fn load_problem_from_string(s: &str) -> Result<Problem, CodecError> {
    let text = inflate(s)?;
    let doc: Value =
        serde_json::from_str(&text).map_err(|_| CodecError::InvalidProblemString)?;

    let size = doc
        .get("size")
        .and_then(Value::as_u64)
        .and_then(|size| u32::try_from(size).ok())
        .ok_or(CodecError::InvalidProblemString)?;
    let names = doc
        .get("enabledRules")
        .and_then(Value::as_array)
        .ok_or(CodecError::InvalidProblemString)?;
    let saved_data = doc
        .get("ruleData")
        .and_then(Value::as_object)
        .ok_or(CodecError::InvalidProblemString)?;

    let mut enabled_rules = Vec::with_capacity(names.len());
    let mut rule_data = RuleDataSet::new(size, 0);
    for name in names {
        let name = name.as_str().ok_or(CodecError::InvalidProblemString)?;
        let rule = RuleKind::from_name(name)
            .ok_or_else(|| CodecError::UnknownRule { name: name.to_owned() })?;
        let value = saved_data
            .get(name)
            .ok_or(CodecError::InvalidProblemString)?
            .clone();
        let data = RuleData::from_json(rule, value)
            .map_err(|_| CodecError::InvalidProblemString)?;
        enabled_rules.push(rule);
        rule_data.set(data);
    }

    Ok(Problem { size, enabled_rules, rule_data })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use sudovar_core::Cell;
    use sudovar_rules::killer::KillerData;
    use sudovar_rules::regions::Region;

    use super::*;

    #[test]
    fn round_trip_preserves_enabled_rule_data() {
        let mut problem = Problem::new(4, 2);
        problem.enable(RuleKind::Killer);
        if let RuleData::GivenNumbers(data) =
            problem.rule_data.get_mut(RuleKind::GivenNumbers)
        {
            data.numbers[1][2] = Some(3);
        }
        problem.rule_data.set(RuleData::Killer(KillerData {
            regions: vec![Region {
                cells: vec![Cell::new(0, 0), Cell::new(0, 1)],
                extra_value: Some(5),
            }],
        }));

        let loaded = load_problem_from_string(&save_problem_as_string(&problem)).unwrap();
        assert_eq!(loaded, problem);
    }

    #[test]
    fn disabled_rule_data_is_replaced_by_defaults() {
        let mut problem = Problem::with_rules(4, 0, vec![RuleKind::GivenNumbers]);
        // Edits to a disabled rule do not survive a save.
        problem.rule_data.set(RuleData::Killer(KillerData {
            regions: vec![Region { cells: vec![Cell::new(0, 0)], extra_value: None }],
        }));

        let loaded = load_problem_from_string(&save_problem_as_string(&problem)).unwrap();
        assert_eq!(
            loaded.rule_data.get(RuleKind::Killer),
            &RuleData::initial(RuleKind::Killer, 4, 0),
        );
        assert_eq!(loaded.enabled_rules, vec![RuleKind::GivenNumbers]);
    }

    #[test]
    fn blocks_default_uses_zero_block_width_on_load() {
        // A 4x4 problem saved without blocks enabled loads with a
        // borderless blocks grid even though it was created with one.
        let problem = Problem::with_rules(4, 2, vec![RuleKind::Answer]);
        let loaded = load_problem_from_string(&save_problem_as_string(&problem)).unwrap();
        assert_eq!(
            loaded.rule_data.get(RuleKind::Blocks),
            &RuleData::initial(RuleKind::Blocks, 4, 0),
        );
    }

    #[test]
    fn garbage_strings_are_rejected() {
        for s in ["", "not base64 !!!", "aGVsbG8", "eyJzaXplIjo0fQ"] {
            assert_eq!(
                load_problem_from_string(s),
                Err(CodecError::InvalidProblemString),
                "{s:?}",
            );
        }
    }

    #[test]
    fn unknown_rule_names_are_reported() {
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
        encoder
            .write_all(br#"{"size":4,"enabledRules":["noSuchRule"],"ruleData":{}}"#)
            .unwrap();
        let s = URL_SAFE_NO_PAD.encode(encoder.finish().unwrap());
        assert_eq!(
            load_problem_from_string(&s),
            Err(CodecError::UnknownRule { name: "noSuchRule".to_owned() }),
        );
    }

    #[test]
    fn enabled_rule_without_data_is_invalid() {
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
        encoder
            .write_all(br#"{"size":4,"enabledRules":["killer"],"ruleData":{}}"#)
            .unwrap();
        let s = URL_SAFE_NO_PAD.encode(encoder.finish().unwrap());
        assert_eq!(load_problem_from_string(&s), Err(CodecError::InvalidProblemString));
    }

    #[test]
    fn saved_strings_are_uri_component_safe() {
        let mut problem = Problem::new(9, 3);
        for kind in RuleKind::ALL {
            problem.enable(kind);
        }
        let saved = save_problem_as_string(&problem);
        assert!(
            saved
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
        );
    }

    proptest! {
        #[test]
        fn round_trip_any_given_numbers(
            digits in proptest::collection::vec(
                proptest::collection::vec(proptest::option::of(1_u32..=4), 4),
                4,
            ),
        ) {
            let mut problem = Problem::with_rules(4, 2, vec![RuleKind::GivenNumbers]);
            if let RuleData::GivenNumbers(data) =
                problem.rule_data.get_mut(RuleKind::GivenNumbers)
            {
                data.numbers = digits;
            }
            let loaded =
                load_problem_from_string(&save_problem_as_string(&problem)).unwrap();
            prop_assert_eq!(
                loaded.rule_data.get(RuleKind::GivenNumbers),
                problem.rule_data.get(RuleKind::GivenNumbers)
            );
        }
    }
}
