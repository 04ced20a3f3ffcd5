//! Simulation Facade
//!
//! Owns a world and drives the advance-then-collect cycle. This is the
//! embedding surface for in-process drivers: a dashboard's step control
//! maps onto [`Simulation::advance`], play/pause onto calling or not
//! calling it between ticks, and reset onto [`Simulation::reset`].

use bevy_ecs::prelude::*;
use std::collections::HashMap;

use sim_events::{portray, AgentPortrayal, MetricRecord, WorldSnapshot};

use crate::components::agent::{AgentId, Wealth};
use crate::config::{ConfigError, ModelConfig};
use crate::output::snapshot::{generate_snapshot, SnapshotGenerator};
use crate::setup::build_world;
use crate::systems::exchange::{advance_tick, total_wealth};
use crate::systems::metrics::{collect_metrics, MetricsHistory};
use crate::SimulationState;

/// A single simulation run: model state plus the knobs it was built with.
pub struct Simulation {
    world: World,
    config: ModelConfig,
    seed: u64,
}

impl Simulation {
    /// Validate the configuration and build a fresh world. The tick-0
    /// metric record is collected before this returns.
    pub fn new(config: ModelConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        tracing::info!(
            agents = config.num_agents,
            width = config.grid_width,
            height = config.grid_height,
            seed,
            "building simulation"
        );
        let mut world = build_world(&config, seed);
        world.insert_resource(SnapshotGenerator::new(1));
        Ok(Self {
            world,
            config,
            seed,
        })
    }

    /// Advance one tick and collect its metric record.
    pub fn advance(&mut self) {
        advance_tick(&mut self.world);
        collect_metrics(&mut self.world);
    }

    /// Advance a fixed number of ticks.
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.advance();
        }
    }

    /// Rebuild the world with the original seed, discarding all state.
    pub fn reset(&mut self) {
        self.reset_with_seed(self.seed);
    }

    /// Rebuild the world with a new seed.
    pub fn reset_with_seed(&mut self, seed: u64) {
        tracing::info!(seed, "resetting simulation");
        self.seed = seed;
        self.world = build_world(&self.config, seed);
        self.world.insert_resource(SnapshotGenerator::new(1));
    }

    /// Ticks completed so far.
    pub fn current_tick(&self) -> u64 {
        self.world.resource::<SimulationState>().current_tick
    }

    /// The fixed agent count.
    pub fn agent_count(&self) -> usize {
        self.world.resource::<SimulationState>().num_agents
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Sum of all agents' wealth.
    pub fn total_wealth(&mut self) -> u64 {
        total_wealth(&mut self.world)
    }

    /// Gini of the most recent metric record.
    pub fn gini(&self) -> f64 {
        self.world
            .resource::<MetricsHistory>()
            .latest_gini()
            .unwrap_or(0.0)
    }

    /// The full metric time series collected so far.
    pub fn history(&self) -> &[MetricRecord] {
        self.world.resource::<MetricsHistory>().records()
    }

    /// Current wealth of every agent, keyed by agent id.
    pub fn wealth_by_agent(&mut self) -> HashMap<String, u32> {
        let mut query = self.world.query::<(&AgentId, &Wealth)>();
        query
            .iter(&self.world)
            .map(|(id, wealth)| (id.0.clone(), wealth.0))
            .collect()
    }

    /// Per-agent portrayal records for a dashboard to render.
    pub fn portrayals(&mut self) -> Vec<(String, AgentPortrayal)> {
        let mut query = self.world.query::<(&AgentId, &Wealth)>();
        let mut portrayals: Vec<(String, AgentPortrayal)> = query
            .iter(&self.world)
            .map(|(id, wealth)| (id.0.clone(), portray(wealth.0)))
            .collect();
        portrayals.sort_by(|a, b| a.0.cmp(&b.0));
        portrayals
    }

    /// Build a snapshot of the current state.
    pub fn snapshot(&mut self, triggered_by: &str) -> WorldSnapshot {
        generate_snapshot(&mut self.world, triggered_by)
    }

    /// Direct world access for embedders that need more than the
    /// accessors above.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
