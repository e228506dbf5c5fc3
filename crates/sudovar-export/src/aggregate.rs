//! Aggregation of rule items into the wire format's keyed buckets.
//!
//! Every item kind has its own bucket: a mapping from a computed ID (or an
//! ID-pair string) to a kind-specific value tuple, except arrows and
//! thermometers, which are flat lists of ID paths. Two items addressing
//! the same key in the same bucket are a *conflict*: the first write wins,
//! the second is dropped, and the export is flagged so the caller can warn
//! that some constraint data is missing from the URL.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};
use sudovar_core::{DiagonalDirection, Item, frame_lines};

use crate::point::IdMapper;

/// Edge style the viewer draws board diagonals with.
const DIAGONAL_EDGE_STYLE: i64 = 12;

/// The aggregated item buckets plus the conflict flag.
///
/// ID-keyed buckets serialize in ascending numeric key order; pair-keyed
/// buckets serialize in insertion order. Both match how the external
/// viewer's own editor writes them.
#[derive(Debug, Default)]
struct Buckets {
    texts: BTreeMap<i64, Value>,
    small_texts: BTreeMap<i64, Value>,
    symbols: BTreeMap<i64, Value>,
    cells: BTreeMap<i64, Value>,
    edges: Map<String, Value>,
    lines: Map<String, Value>,
    frames: Map<String, Value>,
    thermos: Vec<Vec<i64>>,
    arrows: Vec<Vec<i64>>,
    has_conflicts: bool,
}

impl Buckets {
    fn insert_id(bucket: &mut BTreeMap<i64, Value>, flag: &mut bool, key: i64, value: Value) {
        if bucket.contains_key(&key) {
            *flag = true;
        } else {
            bucket.insert(key, value);
        }
    }

    fn insert_pair(bucket: &mut Map<String, Value>, flag: &mut bool, key: String, value: Value) {
        if bucket.contains_key(&key) {
            *flag = true;
        } else {
            bucket.insert(key, value);
        }
    }

    fn add(&mut self, mapper: IdMapper, board_size: u32, item: &Item) {
        match item {
            Item::Text { position, value, color, style } => {
                Self::insert_id(
                    &mut self.texts,
                    &mut self.has_conflicts,
                    mapper.position_id(*position),
                    json!([value, color, style]),
                );
            }
            Item::SmallText { position, value, color } => {
                Self::insert_id(
                    &mut self.small_texts,
                    &mut self.has_conflicts,
                    mapper.small_cell_id(*position),
                    json!([value, color]),
                );
            }
            Item::Symbol { position, color, name, is_front } => {
                Self::insert_id(
                    &mut self.symbols,
                    &mut self.has_conflicts,
                    mapper.position_id(*position),
                    json!([color, name, if *is_front { 2 } else { 1 }]),
                );
            }
            Item::Cell { position, style } => {
                Self::insert_id(
                    &mut self.cells,
                    &mut self.has_conflicts,
                    mapper.cell_id(*position),
                    json!(style),
                );
            }
            Item::Edge { position, style } => {
                let (a, b) = mapper.edge_vertex_ids(*position);
                Self::insert_pair(
                    &mut self.edges,
                    &mut self.has_conflicts,
                    format!("{a},{b}"),
                    json!(style),
                );
            }
            Item::Line { position1, position2, style } => {
                let a = mapper.position_id(*position1);
                let b = mapper.position_id(*position2);
                let (a, b) = if a < b { (a, b) } else { (b, a) };
                Self::insert_pair(
                    &mut self.lines,
                    &mut self.has_conflicts,
                    format!("{a},{b}"),
                    json!(style),
                );
            }
            Item::Diagonal { direction } => {
                let size = i32::try_from(board_size).unwrap_or(i32::MAX);
                for i in 0..size {
                    let (a, b) = match direction {
                        DiagonalDirection::Main => {
                            (mapper.vertex_id(i, i), mapper.vertex_id(i + 1, i + 1))
                        }
                        DiagonalDirection::Anti => (
                            mapper.vertex_id(i, size - i),
                            mapper.vertex_id(i + 1, size - (i + 1)),
                        ),
                    };
                    Self::insert_pair(
                        &mut self.edges,
                        &mut self.has_conflicts,
                        format!("{a},{b}"),
                        json!(DIAGONAL_EDGE_STYLE),
                    );
                }
            }
            Item::Arrow { cells } => {
                self.arrows
                    .push(cells.iter().map(|&cell| mapper.cell_id(cell)).collect());
            }
            Item::Thermo { cells } => {
                self.thermos
                    .push(cells.iter().map(|&cell| mapper.cell_id(cell)).collect());
            }
            Item::Region { cells, style } => {
                for (corner1, corner2) in frame_lines(cells) {
                    let a = mapper.small_cell_id(corner1);
                    let b = mapper.small_cell_id(corner2);
                    let (a, b) = if a < b { (a, b) } else { (b, a) };
                    Self::insert_pair(
                        &mut self.frames,
                        &mut self.has_conflicts,
                        format!("{a},{b}"),
                        json!(style),
                    );
                }
            }
        }
    }
}

fn to_json<T: serde::Serialize>(bucket: &T) -> String {
    serde_json::to_string(bucket).expect("item buckets serialize to JSON")
}

/// Aggregates items into the single wire line holding every bucket.
///
/// Returns the line and whether any conflict was detected. Bucket field
/// tags are the target format's opaque names and every unused tag is a
/// fixed empty placeholder.
pub(crate) fn items_line(board_size: u32, margin: u32, items: &[Item]) -> (String, bool) {
    let mapper = IdMapper::new(board_size, margin);
    let mut buckets = Buckets::default();
    for item in items {
        buckets.add(mapper, board_size, item);
    }

    let line = format!(
        "{{zR:{{z_:[]}},zU:{{z_:[]}},z8:{{z_:[]}},zS:{},zN:{},z1:{},zY:{},zF:{{}},z2:{{}},zT:{},z3:{},zD:[],z0:[],z5:[],zL:{},zE:{},zW:{{}},zC:{},z4:{{}},z6:[],z7:[]}}",
        to_json(&buckets.cells),
        to_json(&buckets.texts),
        to_json(&buckets.small_texts),
        to_json(&buckets.symbols),
        to_json(&buckets.thermos),
        to_json(&buckets.arrows),
        to_json(&buckets.lines),
        to_json(&buckets.edges),
        to_json(&buckets.frames),
    );
    (line, buckets.has_conflicts)
}

/// The all-empty buckets line, reused verbatim by the document assembler
/// for the stanzas the export never fills.
pub(crate) fn empty_items_line() -> String {
    items_line(1, 0, &[]).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use sudovar_core::{Cell, Corner, Edge, EdgeDirection, Position, SmallCell};

    #[test]
    fn empty_items_produce_the_empty_template() {
        let (line, conflicts) = items_line(4, 0, &[]);
        assert_eq!(
            line,
            "{zR:{z_:[]},zU:{z_:[]},z8:{z_:[]},zS:{},zN:{},z1:{},zY:{},zF:{},z2:{},zT:[],z3:[],zD:[],z0:[],z5:[],zL:{},zE:{},zW:{},zC:{},z4:{},z6:[],z7:[]}",
        );
        assert!(!conflicts);
    }

    #[test]
    fn text_items_land_in_the_text_bucket() {
        let item = Item::Text {
            position: Position::Cell(Cell::new(0, 0)),
            value: "5".to_owned(),
            color: 1,
            style: "1".to_owned(),
        };
        let (line, conflicts) = items_line(4, 0, &[item]);
        assert!(line.contains(r#"zN:{"18":["5",1,"1"]}"#), "{line}");
        assert!(!conflicts);
    }

    #[test]
    fn duplicate_keys_flag_a_conflict_and_keep_the_first_write() {
        let at = |value: &str| Item::Text {
            position: Position::Cell(Cell::new(2, 2)),
            value: value.to_owned(),
            color: 1,
            style: "1".to_owned(),
        };
        let (line, conflicts) = items_line(4, 0, &[at("3"), at("7")]);
        assert!(conflicts);
        assert!(line.contains(r#"["3",1,"1"]"#));
        assert!(!line.contains(r#"["7",1,"1"]"#));
    }

    #[test]
    fn same_position_in_different_buckets_is_not_a_conflict() {
        let items = [
            Item::Text {
                position: Position::Cell(Cell::new(1, 1)),
                value: "2".to_owned(),
                color: 1,
                style: "1".to_owned(),
            },
            Item::Cell { position: Cell::new(1, 1), style: 8 },
        ];
        let (_, conflicts) = items_line(4, 0, &items);
        assert!(!conflicts);
    }

    #[test]
    fn numeric_keys_serialize_in_ascending_order() {
        let at = |y: i32, x: i32| Item::Cell { position: Cell::new(y, x), style: 8 };
        // Insert out of order; ids 34, 18, 26.
        let (line, _) = items_line(4, 0, &[at(2, 0), at(0, 0), at(1, 0)]);
        assert!(line.contains(r#"zS:{"18":8,"26":8,"34":8}"#), "{line}");
    }

    #[test]
    fn diagonal_expands_into_styled_vertex_edges() {
        let (line, conflicts) =
            items_line(4, 0, &[Item::Diagonal { direction: DiagonalDirection::Main }]);
        let mapper = IdMapper::new(4, 0);
        let first = format!("\"{},{}\":12", mapper.vertex_id(0, 0), mapper.vertex_id(1, 1));
        assert!(line.contains(&first), "{line}");
        assert!(!conflicts);
        // One edge per board row.
        assert_eq!(line.matches(":12").count(), 4);
    }

    #[test]
    fn both_diagonals_do_not_conflict() {
        let items = [
            Item::Diagonal { direction: DiagonalDirection::Main },
            Item::Diagonal { direction: DiagonalDirection::Anti },
        ];
        let (_, conflicts) = items_line(4, 0, &items);
        assert!(!conflicts);
    }

    #[test]
    fn line_keys_are_canonicalized_smaller_first() {
        let item = Item::Line {
            position1: Position::Cell(Cell::new(1, 1)),
            position2: Position::Cell(Cell::new(0, 0)),
            style: 3,
        };
        let (line, _) = items_line(4, 0, &[item]);
        assert!(line.contains(r#"zL:{"18,27":3}"#), "{line}");
    }

    #[test]
    fn edge_keys_keep_direction_order() {
        // A vertical edge's first endpoint is the top vertex, which is
        // numerically smaller; the order is positional, not sorted.
        let item = Item::Edge {
            position: Edge::new(0, 0, EdgeDirection::Vertical),
            style: 2,
        };
        let (line, _) = items_line(4, 0, &[item]);
        let mapper = IdMapper::new(4, 0);
        let key = format!("\"{},{}\":2", mapper.vertex_id(0, 1), mapper.vertex_id(1, 1));
        assert!(line.contains(&key), "{line}");
    }

    #[test]
    fn region_expands_into_frame_segments() {
        let item = Item::Region { cells: vec![Cell::new(0, 0)], style: 10 };
        let (line, conflicts) = items_line(4, 0, &[item]);
        assert!(!conflicts);
        // A single cell outlines with its four sides.
        assert_eq!(line.matches(":10").count(), 4);
        let mapper = IdMapper::new(4, 0);
        let ul = mapper.small_cell_id(SmallCell::new(0, 0, Corner::UpLeft));
        let ur = mapper.small_cell_id(SmallCell::new(0, 0, Corner::UpRight));
        assert!(line.contains(&format!("\"{ul},{ur}\":10")), "{line}");
    }

    #[test]
    fn thermos_and_arrows_allow_duplicates() {
        let path = vec![Cell::new(0, 0), Cell::new(0, 1)];
        let items = [
            Item::Thermo { cells: path.clone() },
            Item::Thermo { cells: path.clone() },
            Item::Arrow { cells: path },
        ];
        let (line, conflicts) = items_line(4, 0, &items);
        assert!(!conflicts);
        assert!(line.contains("zT:[[18,19],[18,19]]"), "{line}");
        assert!(line.contains("z3:[[18,19]]"), "{line}");
    }
}
