//! Wealth Exchange Simulation Engine
//!
//! Agents on a grid wander between neighboring cells and hand single
//! units of wealth to whoever shares their cell, while the engine tracks
//! how unequal the distribution becomes.

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;

use sim_core::config::Config;
use sim_core::events::{EventLogger, TickEvents};
use sim_core::output::{
    generate_snapshot, write_current_state, write_metric_series, write_snapshot_to_dir,
    SnapshotGenerator,
};
use sim_core::systems::{advance_tick, collect_metrics, MetricsHistory};
use sim_core::{setup, SimulationState};
use sim_events::EventType;

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "wealth_sim")]
#[command(about = "An agent-based wealth exchange simulation")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of ticks to simulate (defaults to the tuning file value)
    #[arg(long)]
    ticks: Option<u64>,

    /// Number of agents (defaults to the tuning file value)
    #[arg(long)]
    agents: Option<usize>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<u32>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<u32>,

    /// Interval between world snapshots (in ticks)
    #[arg(long)]
    snapshot_interval: Option<u64>,

    /// Path to a tuning file (defaults to tuning.toml when present)
    #[arg(long)]
    tuning: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let config = match &args.tuning {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: could not load {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Config::load_or_default(),
    };

    let mut model = config.model.clone();
    if let Some(agents) = args.agents {
        model.num_agents = agents;
    }
    if let Some(width) = args.width {
        model.grid_width = width;
    }
    if let Some(height) = args.height {
        model.grid_height = height;
    }
    if let Err(e) = model.validate() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let ticks = args.ticks.unwrap_or(config.simulation.default_ticks);
    let snapshot_interval = args
        .snapshot_interval
        .unwrap_or(config.simulation.snapshot_interval)
        .max(1);

    println!("Wealth Exchange Simulation");
    println!("==========================");
    println!("Seed: {}", args.seed);
    println!("Ticks: {}", ticks);
    println!("Agents: {}", model.num_agents);
    println!(
        "Grid: {}x{} ({})",
        model.grid_width,
        model.grid_height,
        if model.torus { "torus" } else { "bounded" }
    );
    println!("Snapshot interval: {}", snapshot_interval);
    println!();

    // Ensure output directories exist
    fs::create_dir_all("output/snapshots").unwrap_or_else(|e| {
        eprintln!("Warning: Could not create output directories: {}", e);
    });

    let mut event_logger = EventLogger::new("output/events.jsonl").unwrap_or_else(|e| {
        eprintln!("Warning: Could not open event log: {}. Events discarded.", e);
        EventLogger::null()
    });

    println!("Building world...");
    let mut world = setup::build_world(&model, args.seed);
    world.insert_resource(SnapshotGenerator::new(snapshot_interval));
    println!(
        "  Spawned {} agents holding {} units total",
        model.num_agents, model.num_agents
    );

    // Initial snapshot (tick 0)
    let initial_snapshot = generate_snapshot(&mut world, "simulation_start");
    if let Err(e) = write_snapshot_to_dir(&initial_snapshot) {
        eprintln!("  Warning: Could not write initial snapshot: {}", e);
    }
    if let Err(e) = write_current_state(&initial_snapshot) {
        eprintln!("  Warning: Could not write current state: {}", e);
    } else {
        println!("  Wrote initial snapshot (tick 0)");
    }

    println!();
    println!("Starting simulation...");
    println!();

    // Main simulation loop
    for _ in 0..ticks {
        advance_tick(&mut world);
        collect_metrics(&mut world);

        let tick = world.resource::<SimulationState>().current_tick;

        // Drain this tick's events into the log
        let (move_count, transfer_count) = {
            let events = world.resource::<TickEvents>();
            (
                events.count_of(EventType::Movement),
                events.count_of(EventType::Transfer),
            )
        };
        {
            let mut events = world.resource_mut::<TickEvents>();
            if let Err(e) = event_logger.log_tick(&mut events) {
                eprintln!("Warning: Could not log events at tick {}: {}", tick, e);
            }
        }

        // Report summary every 10 ticks
        if tick % 10 == 0 {
            let gini = world
                .resource::<MetricsHistory>()
                .latest_gini()
                .unwrap_or(0.0);
            println!(
                "[Tick {:>4}] gini {:.3} - {} moves, {} transfers",
                tick, gini, move_count, transfer_count
            );
        }

        // Generate periodic snapshots
        let should_snapshot = world.resource::<SnapshotGenerator>().should_snapshot(tick);
        if should_snapshot {
            let snapshot = generate_snapshot(&mut world, "periodic");
            if let Err(e) = write_snapshot_to_dir(&snapshot) {
                eprintln!("Warning: Could not write snapshot at tick {}: {}", tick, e);
            }
            if let Err(e) = write_current_state(&snapshot) {
                eprintln!("Warning: Could not write current state at tick {}: {}", tick, e);
            }
            world
                .resource_mut::<SnapshotGenerator>()
                .mark_snapshot(tick);
        }

        // Print progress every 100 ticks
        if tick % 100 == 0 {
            println!("Tick {} / {}", tick, ticks);
        }
    }

    // Final snapshot and metric series
    let final_snapshot = generate_snapshot(&mut world, "simulation_end");
    if let Err(e) = write_snapshot_to_dir(&final_snapshot) {
        eprintln!("Warning: Could not write final snapshot: {}", e);
    }
    if let Err(e) = write_current_state(&final_snapshot) {
        eprintln!("Warning: Could not write final current state: {}", e);
    }
    if let Err(e) = write_metric_series(world.resource::<MetricsHistory>()) {
        eprintln!("Warning: Could not write metric series: {}", e);
    }
    if let Err(e) = event_logger.flush() {
        eprintln!("Warning: Could not flush event log: {}", e);
    }

    println!();
    let history = world.resource::<MetricsHistory>();
    println!(
        "Simulation complete. Ran {} ticks, final gini {:.3} (started at {:.3}).",
        ticks,
        history.latest_gini().unwrap_or(0.0),
        history.records().first().map(|r| r.gini).unwrap_or(0.0)
    );
    println!(
        "Logged {} events, collected {} metric records.",
        event_logger.event_count(),
        history.len()
    );

    let generator = world.resource::<SnapshotGenerator>();
    println!("Generated {} snapshots.", generator.snapshot_count());
}
