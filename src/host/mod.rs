pub mod scenario;

pub use scenario::{load_scenario, run_scenario, Scenario};

use crate::core::types::ColorState;

/// Row-per-line digit rendering of a state, for terminal hosts.
pub fn state_to_string(state: &ColorState, side: usize) -> String {
    state
        .chunks(side)
        .map(|row| {
            row.iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
