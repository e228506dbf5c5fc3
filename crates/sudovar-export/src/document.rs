//! Assembly of the full wire document and its shareable URL.
//!
//! The document is a newline-delimited micro-format mixing a CSV-like
//! header, JSON fragments, and bare literal lines. Everything the export
//! does not parameterize is boilerplate the external viewer requires
//! verbatim.

use std::io::Write as _;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use flate2::Compression;
use flate2::write::DeflateEncoder;
use log::debug;
use sudovar_core::BoardData;

use crate::PenpaExport;
use crate::aggregate::{empty_items_line, items_line};
use crate::point::IdMapper;

/// Where a produced document can be opened.
pub const URL_PREFIX: &str = "https://opt-pan.github.io/penpa-edit/#m=solve&p=";

/// Cell edge length in viewer pixels.
const CELL_SIZE: i64 = 38;

const MODE_LINE: &str = r#"["1","2","1"]~zS~["",1]"#;

const SOLUTION_FLAGS_LINE: &str = r#"{"sol_surface":false,"sol_number":false,"sol_loopline":false,"sol_ignoreloopline":false,"sol_loopedge":false,"sol_ignoreborder":false,"sol_wall":false,"sol_square":false,"sol_circle":false,"sol_tri":false,"sol_arrow":false,"sol_math":false,"sol_battleship":false,"sol_tent":false,"sol_star":false,"sol_akari":false,"sol_mine":false}"#;

const PANEL_LINE: &str = "[2,26,21]";

const STYLE_CONFIG_LINE: &str = r#"{z9:zQ,zG:["1","2","1"],zQ:{zM:zP,zS:["",1],zL:["1",2],zE:["1",2],zW:["",2],zC:["1",10],zN:["1",1],zY:["circle_L",1],zP:[z3,""],zB:["",""],"move":["1",""],"combi":["battleship",""],"sudoku":["1",1]},zA:{zM:zS,zS:["",1],zL:["1",3],zE:["1",3],zW:["",3],zC:["1",10],zN:["1",2],zY:["circle_L",1],zP:[zT,""],zB:["",""],"move":["1",""],"combi":["battleship",""],"sudoku":["1",9]}}"#;

const OR_SOLUTION_FLAGS_LINE: &str = r#"{"sol_or_surface":false,"sol_or_number":false,"sol_or_loopline":false,"sol_or_loopedge":false,"sol_or_wall":false,"sol_or_square":false,"sol_or_circle":false,"sol_or_tri":false,"sol_or_arrow":false,"sol_or_math":false,"sol_or_battleship":false,"sol_or_tent":false,"sol_or_star":false,"sol_or_akari":false,"sol_or_mine":false}"#;

/// The header encodes the padded extent, pixel sizing, and a layout
/// constant the viewer derives its coordinate system from. The constant's
/// polynomial depends on the parity of `n` but is an integer either way.
fn header_line(n: i64) -> String {
    let pixels = CELL_SIZE * (n + 1);
    let magic = if n % 2 == 0 {
        (3 * n * n + 23 * n + 42) / 2
    } else {
        (n * n + 8 * n + 15) / 2
    };
    format!(
        "square,{n},{n},{CELL_SIZE},0,1,1,{pixels},{pixels},{magic},{magic},0,0,0,0,Title: ,Author: ,,,OFF,false"
    )
}

fn margin_line(margin: u32) -> String {
    format!("[{margin},{margin},{margin},{margin}]")
}

/// Delta-encodes the playable cells' IDs in row-major order, starting
/// from 0.
fn cells_line(board_size: u32, margin: u32) -> String {
    let mapper = IdMapper::new(board_size, margin);
    let size = i32::try_from(board_size).unwrap_or(i32::MAX);
    let mut deltas = Vec::new();
    let mut last = 0;
    for y in 0..size {
        for x in 0..size {
            let id = mapper.cell_id(sudovar_core::Cell::new(y, x));
            deltas.push((id - last).to_string());
            last = id;
        }
    }
    format!("[{}]", deltas.join(","))
}

/// Builds the complete document text, pre-compression.
pub(crate) fn document(board_size: u32, data: &[BoardData]) -> (String, bool) {
    let margin = data.iter().map(|board| board.margin).max().unwrap_or(0);
    let n = i64::from(board_size) + 2 * i64::from(margin);

    let items: Vec<_> = data.iter().flat_map(|board| board.items.iter().cloned()).collect();
    let (items, has_conflicts) = items_line(board_size, margin, &items);

    let text = format!(
        "{header}\n{margins}\n{MODE_LINE}\n{items}\n\n{cells}\n[]\n{SOLUTION_FLAGS_LINE}\n\"x\"\n\"x\"\n{PANEL_LINE}\n{STYLE_CONFIG_LINE}\n\"x\"\n0\n{empty}\nx\n{OR_SOLUTION_FLAGS_LINE}\n[]\nfalse",
        header = header_line(n),
        margins = margin_line(margin),
        cells = cells_line(board_size, margin),
        empty = empty_items_line(),
    );
    (text, has_conflicts)
}

/// Raw-deflates the document and base64-encodes it the way the viewer's
/// own editor does.
fn deflate_base64(text: &str) -> String {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(text.as_bytes())
        .expect("writing to an in-memory encoder cannot fail");
    let bytes = encoder.finish().expect("in-memory deflate cannot fail");
    STANDARD.encode(bytes)
}

/// Exports already-collected rule contributions to a shareable URL.
///
/// A single global margin, the maximum over all contributions, keeps the
/// coordinate math consistent across rules.
#[must_use]
pub fn export_board_data(board_size: u32, data: &[BoardData]) -> PenpaExport {
    let (text, has_conflicts) = document(board_size, data);
    debug!("assembled {} document bytes before compression", text.len());
    let url = format!("{URL_PREFIX}{}", deflate_base64(&text));
    PenpaExport { url, has_conflicts }
}

// Golden document for an empty 4x4 board, shared with the entry-point
// tests so the scenario stays pinned through the rules path too.
#[cfg(test)]
pub(crate) const EMPTY_4X4_DOCUMENT: &str = "\
square,4,4,38,0,1,1,190,190,91,91,0,0,0,0,Title: ,Author: ,,,OFF,false
[0,0,0,0]
[\"1\",\"2\",\"1\"]~zS~[\"\",1]
{zR:{z_:[]},zU:{z_:[]},z8:{z_:[]},zS:{},zN:{},z1:{},zY:{},zF:{},z2:{},zT:[],z3:[],zD:[],z0:[],z5:[],zL:{},zE:{},zW:{},zC:{},z4:{},z6:[],z7:[]}

[18,1,1,1,5,1,1,1,5,1,1,1,5,1,1,1]
[]
{\"sol_surface\":false,\"sol_number\":false,\"sol_loopline\":false,\"sol_ignoreloopline\":false,\"sol_loopedge\":false,\"sol_ignoreborder\":false,\"sol_wall\":false,\"sol_square\":false,\"sol_circle\":false,\"sol_tri\":false,\"sol_arrow\":false,\"sol_math\":false,\"sol_battleship\":false,\"sol_tent\":false,\"sol_star\":false,\"sol_akari\":false,\"sol_mine\":false}
\"x\"
\"x\"
[2,26,21]
{z9:zQ,zG:[\"1\",\"2\",\"1\"],zQ:{zM:zP,zS:[\"\",1],zL:[\"1\",2],zE:[\"1\",2],zW:[\"\",2],zC:[\"1\",10],zN:[\"1\",1],zY:[\"circle_L\",1],zP:[z3,\"\"],zB:[\"\",\"\"],\"move\":[\"1\",\"\"],\"combi\":[\"battleship\",\"\"],\"sudoku\":[\"1\",1]},zA:{zM:zS,zS:[\"\",1],zL:[\"1\",3],zE:[\"1\",3],zW:[\"\",3],zC:[\"1\",10],zN:[\"1\",2],zY:[\"circle_L\",1],zP:[zT,\"\"],zB:[\"\",\"\"],\"move\":[\"1\",\"\"],\"combi\":[\"battleship\",\"\"],\"sudoku\":[\"1\",9]}}
\"x\"
0
{zR:{z_:[]},zU:{z_:[]},z8:{z_:[]},zS:{},zN:{},z1:{},zY:{},zF:{},z2:{},zT:[],z3:[],zD:[],z0:[],z5:[],zL:{},zE:{},zW:{},zC:{},z4:{},z6:[],z7:[]}
x
{\"sol_or_surface\":false,\"sol_or_number\":false,\"sol_or_loopline\":false,\"sol_or_loopedge\":false,\"sol_or_wall\":false,\"sol_or_square\":false,\"sol_or_circle\":false,\"sol_or_tri\":false,\"sol_or_arrow\":false,\"sol_or_math\":false,\"sol_or_battleship\":false,\"sol_or_tent\":false,\"sol_or_star\":false,\"sol_or_akari\":false,\"sol_or_mine\":false}
[]
false";
