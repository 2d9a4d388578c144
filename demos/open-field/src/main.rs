//! open-field — smallest demo for the rust_nav framework.
//!
//! One agent wanders a 1 m × 1 m open arena for 2000 simulated seconds while
//! 100 place cells fire against its position.  The full trajectory and rate
//! log land in `output/open-field/` as CSV, ready for plotting with any
//! external tool.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

use nav_agent::{Agent, AgentParams};
use nav_cells::{PlaceCellParams, PlaceCells, RatePopulation};
use nav_core::{SimConfig, SimRng};
use nav_env::{Environment, EnvironmentConfig};
use nav_output::{CsvWriter, SimOutputObserver};
use nav_sim::SimBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const DURATION_SECS: f64 = 2_000.0;
const DT_SECS: f64 = 0.05;
const PLACE_CELL_COUNT: usize = 100;
const PREVIEW_ROWS: usize = 10;
const PREVIEW_CELLS: usize = 5;

// RNG streams, one per stochastic component.
const AGENT_STREAM: u64 = 0;
const CELLS_STREAM: u64 = 1;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== open-field — rust_nav spatial navigation ===");
    println!("Duration: {DURATION_SECS} s  |  dt: {DT_SECS} s  |  Seed: {SEED}");
    println!();

    // 1. Build the arena: 2D, solid walls, 1 m square, 1 cm bins.
    let env = Arc::new(Environment::new(EnvironmentConfig {
        scale: 1.0,
        aspect: 1.0,
        dx: 0.01,
        ..EnvironmentConfig::default()
    })?);
    println!(
        "Arena: {} m × {} m, {:?} boundaries",
        env.width(),
        env.height(),
        env.boundary_conditions()
    );

    // 2. The agent, on its own RNG stream.
    let mut rng = SimRng::new(SEED);
    let params = AgentParams {
        dt: DT_SECS,
        ..AgentParams::default()
    };
    let agent = Agent::new(Arc::clone(&env), params, rng.child(AGENT_STREAM))?;

    // 3. 100 place cells scattered over the arena.
    let pcs = PlaceCells::new(
        Arc::clone(&env),
        PlaceCellParams {
            n: PLACE_CELL_COUNT,
            ..PlaceCellParams::default()
        },
        &mut rng.child(CELLS_STREAM),
    )?;
    let population = RatePopulation::new("place_cells", pcs);
    println!("Place cells: {PLACE_CELL_COUNT}");

    // 4. Sim config: snapshot every step so the CSV holds the full run.
    let config = SimConfig {
        duration_secs: DURATION_SECS,
        dt_secs: DT_SECS,
        seed: SEED,
        snapshot_interval_steps: 1,
    };
    println!("Sim: {} steps", config.steps());
    println!();

    // 5. Build the sim.
    let mut sim = SimBuilder::new(config, agent).population(population).build()?;

    // 6. Set up CSV output.
    std::fs::create_dir_all("output/open-field")?;
    let writer = CsvWriter::new(Path::new("output/open-field"))?;
    let mut obs = SimOutputObserver::new(writer);

    // 7. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 8. Previews of the recorded histories.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!();
    println!("First {PREVIEW_ROWS} positions:");
    for (i, pos) in sim.agent.history().head_positions(PREVIEW_ROWS).iter().enumerate() {
        println!("  [{i}] {pos}");
    }
    println!();
    println!("First {PREVIEW_ROWS} firing-rate vectors (first {PREVIEW_CELLS} cells):");
    for (i, rates) in sim.populations[0].history().head(PREVIEW_ROWS).iter().enumerate() {
        let cells: Vec<String> = rates
            .iter()
            .take(PREVIEW_CELLS)
            .map(|r| format!("{r:.4}"))
            .collect();
        println!("  [{i}] [{}, …]", cells.join(", "));
    }
    println!();

    // 9. Run summary.
    println!("{:<28} {:<14}", "Metric", "Value");
    println!("{}", "-".repeat(42));
    println!("{:<28} {:<14}", "Steps", sim.agent.history().len());
    println!(
        "{:<28} {:<14.2}",
        "Distance travelled (m)",
        sim.agent.distance_travelled()
    );
    println!("{:<28} {:<14}", "Final position", sim.agent.pos().to_string());
    println!();
    println!("Plot-ready output:");
    println!("  output/open-field/trajectory.csv   (step, t_secs, x, y)");
    println!("  output/open-field/firing_rates.csv (step, t_secs, population, cell_id, rate)");

    Ok(())
}
