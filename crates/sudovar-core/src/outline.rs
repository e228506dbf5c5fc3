//! Frame-line derivation for cell regions.
//!
//! Given an arbitrary set of cells, [`frame_lines`] computes the minimal
//! set of corner-to-corner segments outlining it. The outline is what the
//! wire format draws as a cage border; it follows the inset corner
//! quadrants of the member cells, so segments of adjacent but distinct
//! regions never coincide.

use std::collections::HashSet;

use crate::geom::{Cell, Corner, SmallCell};

/// Computes the outline segments of a cell region.
///
/// The input cells need not be connected and may describe a region with
/// holes; every boundary, outer or inner, is covered exactly once.
/// Two cells touching only diagonally are treated as separate islands.
///
/// Each segment spans one cell side, except where the boundary runs
/// straight through two adjacent cells (the segment starts at the
/// neighbor's corner, so the junction is covered without a separate
/// connector) and at inner corners, where a short bridge joins the two
/// diagonal cells' corners.
///
/// Duplicate input cells are ignored beyond the first occurrence.
///
/// # Examples
///
/// ```
/// use sudovar_core::{Cell, frame_lines};
///
/// // An isolated cell is outlined by its four sides.
/// assert_eq!(frame_lines(&[Cell::new(0, 0)]).len(), 4);
///
/// // A domino shares one interior edge; six segments remain.
/// assert_eq!(frame_lines(&[Cell::new(0, 0), Cell::new(0, 1)]).len(), 6);
/// ```
#[must_use]
pub fn frame_lines(cells: &[Cell]) -> Vec<(SmallCell, SmallCell)> {
    let members: HashSet<Cell> = cells.iter().copied().collect();
    let at = |y: i32, x: i32| members.contains(&Cell::new(y, x));

    let mut segments = Vec::new();
    let mut emitted = HashSet::new();
    for &Cell { y, x } in cells {
        if !emitted.insert((y, x)) {
            continue;
        }

        let up = at(y - 1, x);
        let down = at(y + 1, x);
        let left = at(y, x - 1);
        let right = at(y, x + 1);
        let up_left = at(y - 1, x - 1);
        let up_right = at(y - 1, x + 1);
        let down_left = at(y + 1, x - 1);

        if !up {
            let start = if left && !up_left {
                SmallCell::new(y, x - 1, Corner::UpRight)
            } else {
                SmallCell::new(y, x, Corner::UpLeft)
            };
            segments.push((start, SmallCell::new(y, x, Corner::UpRight)));
        }
        if !down {
            let start = if left && !down_left {
                SmallCell::new(y, x - 1, Corner::DownRight)
            } else {
                SmallCell::new(y, x, Corner::DownLeft)
            };
            segments.push((start, SmallCell::new(y, x, Corner::DownRight)));
        }
        if !left {
            let start = if up && !up_left {
                SmallCell::new(y - 1, x, Corner::DownLeft)
            } else {
                SmallCell::new(y, x, Corner::UpLeft)
            };
            segments.push((start, SmallCell::new(y, x, Corner::DownLeft)));
        }
        if !right {
            let start = if up && !up_right {
                SmallCell::new(y - 1, x, Corner::DownRight)
            } else {
                SmallCell::new(y, x, Corner::UpRight)
            };
            segments.push((start, SmallCell::new(y, x, Corner::DownRight)));
        }

        // Inner-corner bridges. Owned by the lower cell of the diagonal
        // pair so each bridge is emitted exactly once; a pure diagonal
        // touch (neither cardinal present) is two islands, and three or
        // more cells meeting at the vertex make it interior.
        if up_left && (up != left) {
            segments.push((
                SmallCell::new(y, x, Corner::UpLeft),
                SmallCell::new(y - 1, x - 1, Corner::DownRight),
            ));
        }
        if up_right && (up != right) {
            segments.push((
                SmallCell::new(y, x, Corner::UpRight),
                SmallCell::new(y - 1, x + 1, Corner::DownLeft),
            ));
        }
    }
    segments
}
