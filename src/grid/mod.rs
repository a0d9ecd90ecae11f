pub mod adjacency;
pub mod init;

pub use adjacency::AdjacencyTable;
pub use init::{random_state, SAND_PROBABILITY};

use rustc_hash::FxHashMap;

use crate::core::types::{CellIndex, ColorId, ColorState};

// --- Index helpers and state analysis ---

pub fn cell_index(row: usize, col: usize, side: usize) -> CellIndex {
    row * side + col
}

pub fn cell_coords(index: CellIndex, side: usize) -> (usize, usize) {
    (index / side, index % side)
}

/// Cells per color, for host summaries and tests.
pub fn color_histogram(state: &ColorState) -> FxHashMap<ColorId, usize> {
    let mut counts: FxHashMap<ColorId, usize> = FxHashMap::default();
    for &c in state {
        *counts.entry(c).or_default() += 1;
    }
    counts
}
