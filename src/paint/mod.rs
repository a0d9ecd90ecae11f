pub mod fill;
pub mod session;

pub use fill::{flood_fill, paint_one};
pub use session::Session;

use rand::Rng;

use crate::core::types::ColorState;
use crate::core::Result;
use crate::grid::{random_state, AdjacencyTable};

/// Build the adjacency table and a random starting state in one go.
pub fn initialize_grid<R: Rng + ?Sized>(
    n: usize,
    rng: &mut R,
) -> Result<(AdjacencyTable, ColorState)> {
    let table = AdjacencyTable::build(n)?;
    let state = random_state(n, rng)?;
    Ok((table, state))
}
