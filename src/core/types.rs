use serde::{Deserialize, Serialize};

/// Linear index of a cell: `row * side + col`.
pub type CellIndex = usize;

pub type ColorId = u8;

/// Colors the palette recognizes. The traversal itself works for any
/// number of colors; only validation depends on this.
pub const PALETTE_SIZE: u8 = 2;

pub const OCEAN: ColorId = 0;
pub const SAND: ColorId = 1;

/// Per-cell color assignment, indexed by `CellIndex`. The only mutable
/// piece of the core.
pub type ColorState = Vec<ColorId>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaintMode {
    /// Repaint the clicked cell only.
    Draw,
    /// Flood the clicked cell's same-colored region.
    Fill,
}

/// One user action, fully formed by the host. Consumed immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintRequest {
    pub cell: CellIndex,
    pub color: ColorId,
    pub mode: PaintMode,
}
