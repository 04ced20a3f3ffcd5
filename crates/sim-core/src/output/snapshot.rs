//! Snapshot Generation
//!
//! Builds world snapshots at regular intervals and writes them where the
//! dashboard looks for them: one file per snapshot under
//! `output/snapshots/` plus `output/current_state.json`, overwritten
//! every time.

use bevy_ecs::prelude::*;
use std::fs;
use std::path::Path;

use sim_events::{generate_snapshot_id, portray, AgentSnapshot, WorldSnapshot, WorldStateSnapshot};

use crate::components::agent::{AgentId, Wealth};
use crate::components::grid::{Grid, Position};
use crate::systems::metrics::MetricsHistory;
use crate::SimulationState;

/// Resource to track snapshot generation
#[derive(Resource)]
pub struct SnapshotGenerator {
    next_snapshot_id: u64,
    snapshot_interval: u64,
    last_snapshot_tick: u64,
}

impl SnapshotGenerator {
    pub fn new(snapshot_interval: u64) -> Self {
        Self {
            next_snapshot_id: 1,
            snapshot_interval,
            last_snapshot_tick: 0,
        }
    }

    pub fn should_snapshot(&self, current_tick: u64) -> bool {
        current_tick == 0 || current_tick % self.snapshot_interval == 0
    }

    pub fn next_id(&mut self) -> String {
        let id = generate_snapshot_id(self.next_snapshot_id);
        self.next_snapshot_id += 1;
        id
    }

    pub fn mark_snapshot(&mut self, tick: u64) {
        self.last_snapshot_tick = tick;
    }

    pub fn snapshot_count(&self) -> u64 {
        self.next_snapshot_id - 1
    }
}

/// Generate a complete world snapshot
pub fn generate_snapshot(world: &mut World, triggered_by: &str) -> WorldSnapshot {
    let tick = world.resource::<SimulationState>().current_tick;

    let snapshot_id = {
        let mut generator = world.resource_mut::<SnapshotGenerator>();
        generator.next_id()
    };

    let mut snapshot = WorldSnapshot::new(snapshot_id, tick, triggered_by);

    let mut total_wealth = 0u64;
    {
        let mut query = world.query::<(&AgentId, &Position, &Wealth)>();
        for (agent_id, position, wealth) in query.iter(world) {
            total_wealth += u64::from(wealth.0);
            snapshot.agents.push(AgentSnapshot {
                agent_id: agent_id.0.clone(),
                x: position.cell.x,
                y: position.cell.y,
                wealth: wealth.0,
                portrayal: portray(wealth.0),
            });
        }
    }
    // Stable ordering for diff-friendly output files
    snapshot.agents.sort_by(|a, b| a.agent_id.cmp(&b.agent_id));

    let grid = world.resource::<Grid>();
    snapshot.world = WorldStateSnapshot {
        width: grid.width(),
        height: grid.height(),
        torus: grid.torus(),
        agent_count: snapshot.agents.len(),
        total_wealth,
        gini: world
            .resource::<MetricsHistory>()
            .latest_gini()
            .unwrap_or(0.0),
    };

    snapshot
}

/// Write snapshot to file
pub fn write_snapshot(snapshot: &WorldSnapshot, path: impl AsRef<Path>) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write snapshot to the snapshots directory
pub fn write_snapshot_to_dir(snapshot: &WorldSnapshot) -> std::io::Result<()> {
    let path = format!("output/snapshots/snap_{:06}.json", snapshot.tick);
    write_snapshot(snapshot, path)
}

/// Write current state (overwrites each time)
pub fn write_current_state(snapshot: &WorldSnapshot) -> std::io::Result<()> {
    write_snapshot(snapshot, "output/current_state.json")
}
