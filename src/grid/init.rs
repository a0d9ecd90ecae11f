use rand::Rng;

use crate::core::types::{ColorState, OCEAN, SAND};
use crate::core::{GridError, Result};

/// Chance that a freshly initialized cell comes up sand rather than ocean.
pub const SAND_PROBABILITY: f64 = 0.35;

/// Random starting state for an `n` x `n` grid: each cell independently
/// becomes sand with probability [`SAND_PROBABILITY`], otherwise ocean.
/// The random source is supplied by the caller.
pub fn random_state<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<ColorState> {
    if n == 0 {
        return Err(GridError::InvalidSize(n));
    }
    let mut state = ColorState::with_capacity(n * n);
    for _ in 0..n * n {
        let color = if rng.random::<f64>() < SAND_PROBABILITY {
            SAND
        } else {
            OCEAN
        };
        state.push(color);
    }
    Ok(state)
}
