use rand::Rng;

use super::fill::{check_cell, check_color, flood_fill, paint_one};
use crate::core::types::{CellIndex, ColorId, ColorState, PaintMode, PaintRequest, OCEAN};
use crate::core::{GridError, Result};
use crate::grid::{random_state, AdjacencyTable};

/// One grid's table, state and current tool selection, behind the three
/// core paint operations. Plain data: the UI host owns all event wiring
/// and hands fully formed clicks or requests down here.
#[derive(Debug, Clone)]
pub struct Session {
    table: AdjacencyTable,
    state: ColorState,
    selected: ColorId,
    mode: PaintMode,
}

impl Session {
    /// Wrap an existing table and state. The state must cover the table's
    /// cells exactly.
    pub fn new(table: AdjacencyTable, state: ColorState) -> Result<Self> {
        if state.len() != table.cell_count() {
            return Err(GridError::InvalidSize(state.len()));
        }
        Ok(Self {
            table,
            state,
            selected: OCEAN,
            mode: PaintMode::Fill,
        })
    }

    /// Fresh session with a randomly initialized state.
    pub fn with_random_state<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Self> {
        let table = AdjacencyTable::build(n)?;
        let state = random_state(n, rng)?;
        Self::new(table, state)
    }

    pub fn table(&self) -> &AdjacencyTable {
        &self.table
    }

    pub fn state(&self) -> &ColorState {
        &self.state
    }

    pub fn side(&self) -> usize {
        self.table.side()
    }

    pub fn selected(&self) -> ColorId {
        self.selected
    }

    pub fn mode(&self) -> PaintMode {
        self.mode
    }

    pub fn select_color(&mut self, color: ColorId) -> Result<()> {
        check_color(color)?;
        self.selected = color;
        Ok(())
    }

    pub fn select_mode(&mut self, mode: PaintMode) {
        self.mode = mode;
    }

    /// A click on `cell` with the current selection. Clicking a cell that
    /// already shows the selected color paints nothing, in either mode.
    /// Returns the number of cells repainted.
    pub fn click(&mut self, cell: CellIndex) -> Result<usize> {
        check_cell(&self.state, cell)?;
        if self.state[cell] == self.selected {
            return Ok(0);
        }
        self.apply(&PaintRequest {
            cell,
            color: self.selected,
            mode: self.mode,
        })
    }

    /// Apply a fully formed request, ignoring the current selection.
    /// Returns the number of cells written.
    pub fn apply(&mut self, request: &PaintRequest) -> Result<usize> {
        match request.mode {
            PaintMode::Draw => {
                paint_one(&mut self.state, request.cell, request.color)?;
                Ok(1)
            }
            PaintMode::Fill => {
                flood_fill(&self.table, &mut self.state, request.cell, request.color)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SAND;

    fn ocean_session(n: usize) -> Session {
        let table = AdjacencyTable::build(n).unwrap();
        Session::new(table, vec![OCEAN; n * n]).unwrap()
    }

    #[test]
    fn new_rejects_mismatched_state() {
        let table = AdjacencyTable::build(3).unwrap();
        assert!(matches!(
            Session::new(table, vec![OCEAN; 4]),
            Err(GridError::InvalidSize(4))
        ));
    }

    #[test]
    fn starts_with_ocean_selected_in_fill_mode() {
        let session = ocean_session(3);
        assert_eq!(session.selected(), OCEAN);
        assert_eq!(session.mode(), PaintMode::Fill);
    }

    #[test]
    fn click_on_selected_color_is_suppressed() {
        let mut session = ocean_session(3);
        assert_eq!(session.click(4).unwrap(), 0);
        assert!(session.state().iter().all(|&c| c == OCEAN));
    }

    #[test]
    fn draw_mode_paints_one_cell() {
        let mut session = ocean_session(3);
        session.select_color(SAND).unwrap();
        session.select_mode(PaintMode::Draw);
        assert_eq!(session.click(4).unwrap(), 1);
        assert_eq!(session.state()[4], SAND);
        let sand_cells = session.state().iter().filter(|&&c| c == SAND).count();
        assert_eq!(sand_cells, 1);
    }

    #[test]
    fn fill_mode_floods_the_region() {
        let mut session = ocean_session(3);
        session.select_color(SAND).unwrap();
        assert_eq!(session.click(0).unwrap(), 9);
        assert!(session.state().iter().all(|&c| c == SAND));
    }

    #[test]
    fn select_color_rejects_unknown_id() {
        let mut session = ocean_session(2);
        assert!(matches!(
            session.select_color(5),
            Err(GridError::InvalidColor(5))
        ));
    }

    #[test]
    fn apply_bypasses_the_click_guard() {
        // An explicit draw request may rewrite a cell to its own color.
        let mut session = ocean_session(2);
        let written = session
            .apply(&PaintRequest { cell: 1, color: OCEAN, mode: PaintMode::Draw })
            .unwrap();
        assert_eq!(written, 1);
        assert_eq!(session.state()[1], OCEAN);
    }

    #[test]
    fn click_rejects_out_of_range_cell() {
        let mut session = ocean_session(2);
        assert!(matches!(
            session.click(10),
            Err(GridError::OutOfRange { index: 10, len: 4 })
        ));
    }
}
