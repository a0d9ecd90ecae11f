use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use gridfill::core::types::{PaintMode, OCEAN, SAND};
use gridfill::grid::color_histogram;
use gridfill::host::{load_scenario, run_scenario, state_to_string};
use gridfill::paint::Session;

const DEFAULT_SIDE: usize = 25;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("gridfill — two-color grid painter");
    println!("=================================\n");

    if let Some(path) = std::env::args().nth(1) {
        return replay(&path);
    }

    demo_fill()?;
    demo_draw()?;
    Ok(())
}

fn demo_fill() -> anyhow::Result<()> {
    println!("--- Flood fill ---");
    let mut rng = StdRng::seed_from_u64(7);
    let mut session = Session::with_random_state(DEFAULT_SIDE, &mut rng)?;

    let counts = color_histogram(session.state());
    println!(
        "  {}x{} grid: {} ocean, {} sand",
        DEFAULT_SIDE,
        DEFAULT_SIDE,
        counts.get(&OCEAN).copied().unwrap_or(0),
        counts.get(&SAND).copied().unwrap_or(0)
    );

    session.select_color(SAND)?;
    let repainted = session.click(0)?;
    println!("  filling from cell 0 with sand repainted {} cells", repainted);

    let counts = color_histogram(session.state());
    println!(
        "  now {} ocean, {} sand",
        counts.get(&OCEAN).copied().unwrap_or(0),
        counts.get(&SAND).copied().unwrap_or(0)
    );
    Ok(())
}

fn demo_draw() -> anyhow::Result<()> {
    println!("\n--- Draw mode ---");
    let mut rng = StdRng::seed_from_u64(42);
    let mut session = Session::with_random_state(5, &mut rng)?;
    println!("{}\n", state_to_string(session.state(), session.side()));

    session.select_mode(PaintMode::Draw);
    session.select_color(SAND)?;
    for cell in [0, 6, 12, 18, 24] {
        session.click(cell)?;
    }
    println!("  after drawing the diagonal:");
    println!("{}", state_to_string(session.state(), session.side()));
    Ok(())
}

fn replay(path: &str) -> anyhow::Result<()> {
    let scenario = load_scenario(path)?;
    println!(
        "replaying {} events on a {}x{} grid (seed {})",
        scenario.events.len(),
        scenario.size,
        scenario.size,
        scenario.seed
    );

    let session = run_scenario(&scenario)?;
    let counts = color_histogram(session.state());
    println!(
        "final state: {} ocean, {} sand",
        counts.get(&OCEAN).copied().unwrap_or(0),
        counts.get(&SAND).copied().unwrap_or(0)
    );
    if scenario.size <= 32 {
        println!("{}", state_to_string(session.state(), session.side()));
    }
    Ok(())
}
