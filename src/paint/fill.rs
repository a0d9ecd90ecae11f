// Paint operations over a color state.
//
// Flood fill is a breadth-first sweep over the precomputed adjacency
// table: recolor the start cell, then keep pulling cells off a FIFO and
// recoloring any neighbor that still shows the start's old color. A cell
// changes color the moment it is discovered, so nothing enqueues twice.

use std::collections::VecDeque;

use crate::core::types::{CellIndex, ColorId, ColorState, PALETTE_SIZE};
use crate::core::{GridError, Result};
use crate::grid::AdjacencyTable;

pub(crate) fn check_cell(state: &ColorState, cell: CellIndex) -> Result<()> {
    if cell >= state.len() {
        return Err(GridError::OutOfRange { index: cell, len: state.len() });
    }
    Ok(())
}

pub(crate) fn check_color(color: ColorId) -> Result<()> {
    if color >= PALETTE_SIZE {
        return Err(GridError::InvalidColor(color));
    }
    Ok(())
}

/// Set a single cell unconditionally. No traversal.
pub fn paint_one(state: &mut ColorState, cell: CellIndex, color: ColorId) -> Result<()> {
    check_cell(state, cell)?;
    check_color(color)?;
    state[cell] = color;
    Ok(())
}

/// Repaint the maximal same-colored region containing `start` with
/// `new_color`, in place. Returns the number of cells repainted.
///
/// A start cell already showing `new_color` is a no-op: the region to
/// repaint is empty, not the whole grid.
pub fn flood_fill(
    table: &AdjacencyTable,
    state: &mut ColorState,
    start: CellIndex,
    new_color: ColorId,
) -> Result<usize> {
    if state.len() != table.cell_count() {
        return Err(GridError::InvalidSize(state.len()));
    }
    check_cell(state, start)?;
    check_color(new_color)?;

    let old_color = state[start];
    if old_color == new_color {
        return Ok(0);
    }

    let mut queue: VecDeque<CellIndex> = VecDeque::new();
    state[start] = new_color;
    queue.push_back(start);
    let mut repainted = 1;

    while let Some(cell) = queue.pop_front() {
        for &next in table.neighbors(cell) {
            if state[next] == old_color {
                state[next] = new_color;
                repainted += 1;
                queue.push_back(next);
            }
        }
    }

    tracing::debug!(start, new_color, repainted, "flood fill finished");
    Ok(repainted)
}
