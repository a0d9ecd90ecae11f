// 4-connected neighbor table for an n x n grid.
//
// Each cell's neighbors are the in-bounds subset of {i-n, i+n, i-1, i+1}:
// corners keep two candidates, non-corner edge cells three, interior
// cells all four. Built once per grid, immutable afterward.

use crate::core::types::CellIndex;
use crate::core::{GridError, Result};

/// Precomputed neighbor lists, stored as one flat arena of cell indices
/// with per-cell offsets. `offsets` has `cell_count() + 1` entries;
/// cell `i` owns `arena[offsets[i]..offsets[i + 1]]`.
#[derive(Debug, Clone)]
pub struct AdjacencyTable {
    side: usize,
    arena: Vec<CellIndex>,
    offsets: Vec<usize>,
}

impl AdjacencyTable {
    /// Build the table for an `n` x `n` grid. O(n^2), done once.
    ///
    /// `n == 1` is degenerate but valid: one cell, no neighbors.
    pub fn build(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(GridError::InvalidSize(n));
        }
        let cells = n * n;
        let mut arena = Vec::with_capacity(4 * cells);
        let mut offsets = Vec::with_capacity(cells + 1);
        offsets.push(0);

        for i in 0..cells {
            let row = i / n;
            let col = i % n;
            // Top row excludes i-n, bottom row i+n, left column i-1,
            // right column i+1. Corners hit two exclusions at once.
            if row > 0 {
                arena.push(i - n);
            }
            if col > 0 {
                arena.push(i - 1);
            }
            if col + 1 < n {
                arena.push(i + 1);
            }
            if row + 1 < n {
                arena.push(i + n);
            }
            offsets.push(arena.len());
        }

        tracing::debug!(
            cells,
            edges = arena.len() / 2,
            "adjacency table built for {}x{} grid",
            n,
            n
        );
        Ok(Self { side: n, arena, offsets })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn cell_count(&self) -> usize {
        self.side * self.side
    }

    /// Neighbor indices of `cell`. Callers validate `cell` first; the
    /// stored indices are always in `[0, cell_count())`.
    pub fn neighbors(&self, cell: CellIndex) -> &[CellIndex] {
        &self.arena[self.offsets[cell]..self.offsets[cell + 1]]
    }

    pub fn degree(&self, cell: CellIndex) -> usize {
        self.offsets[cell + 1] - self.offsets[cell]
    }
}
