//! Wealth Exchange Simulation Engine Library
//!
//! Agents on a fixed grid move to random neighboring cells and hand one
//! unit of wealth to a randomly chosen co-located peer each tick. The
//! engine records a Gini coefficient time series and per-agent wealth
//! snapshots for external dashboards to consume.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;

pub mod components;
pub mod config;
pub mod events;
pub mod output;
pub mod runner;
pub mod setup;
pub mod systems;

pub use components::*;
pub use config::{Config, ModelConfig, SimulationConfig};
pub use runner::Simulation;
pub use systems::{advance_tick, collect_metrics, gini_coefficient, Activation, MetricsHistory};

/// Seeded random number generator resource
///
/// The single source of randomness for the whole model: activation order,
/// movement, partner choice, and initial placement all draw from it, which
/// is what makes fixed-seed runs reproducible.
#[derive(Resource)]
pub struct SimRng(pub SmallRng);

/// Global simulation state resource
#[derive(Resource, Debug)]
pub struct SimulationState {
    /// Ticks completed so far
    pub current_tick: u64,
    /// Fixed for the life of the model
    pub num_agents: usize,
}
