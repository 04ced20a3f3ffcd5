//! World Construction
//!
//! Builds a ready-to-run world: resources, agents placed at random cells
//! with one unit of wealth each, and the tick-0 metric record collected.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::components::agent::{Agent, AgentId, Wealth};
use crate::components::grid::{Grid, Position};
use crate::config::ModelConfig;
use crate::events::TickEvents;
use crate::systems::metrics::{collect_metrics, MetricsHistory};
use crate::{SimRng, SimulationState};

/// Starting wealth for every agent
pub const STARTING_WEALTH: u32 = 1;

/// Build a complete world from a model configuration and a seed.
///
/// The caller is expected to have validated the configuration.
pub fn build_world(config: &ModelConfig, seed: u64) -> World {
    let mut world = World::new();

    world.insert_resource(SimulationState {
        current_tick: 0,
        num_agents: config.num_agents,
    });
    world.insert_resource(config.activation);
    world.insert_resource(TickEvents::new());
    world.insert_resource(MetricsHistory::new());

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut grid = Grid::new(config.grid_width, config.grid_height, config.torus);
    spawn_agents(&mut world, &mut grid, config.num_agents, &mut rng);

    world.insert_resource(grid);
    world.insert_resource(SimRng(rng));

    // Tick-0 baseline, recorded before any step runs
    collect_metrics(&mut world);

    world
}

/// Spawn agents at uniformly random cells, each holding one unit.
pub fn spawn_agents(world: &mut World, grid: &mut Grid, count: usize, rng: &mut SmallRng) {
    for index in 0..count {
        let cell = grid.random_cell(rng);
        let entity = world
            .spawn((
                Agent,
                AgentId::from_index(index),
                Wealth(STARTING_WEALTH),
                Position::new(cell),
            ))
            .id();
        grid.place(entity, cell);
    }
}
