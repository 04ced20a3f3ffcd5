//! Snapshot Types
//!
//! Serialization structs for world snapshots and state output.
//!
//! Snapshots capture the complete state of the simulation at a point in
//! time, used for visualization, analysis, and debugging.

use serde::{Deserialize, Serialize};

use crate::portrayal::AgentPortrayal;

/// Generates a snapshot ID with the given sequence number.
pub fn generate_snapshot_id(sequence: u64) -> String {
    format!("snap_{:06}", sequence)
}

/// Global world state at snapshot time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldStateSnapshot {
    pub width: u32,
    pub height: u32,
    pub torus: bool,
    pub agent_count: usize,
    pub total_wealth: u64,
    /// Gini coefficient of the wealth distribution at snapshot time
    pub gini: f64,
}

/// Full agent snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub agent_id: String,
    pub x: u32,
    pub y: u32,
    pub wealth: u32,
    pub portrayal: AgentPortrayal,
}

/// A complete world snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub snapshot_id: String,
    pub tick: u64,
    /// What caused this snapshot ("simulation_start", "periodic", ...)
    pub triggered_by: String,
    pub world: WorldStateSnapshot,
    pub agents: Vec<AgentSnapshot>,
}

impl WorldSnapshot {
    pub fn new(snapshot_id: impl Into<String>, tick: u64, triggered_by: impl Into<String>) -> Self {
        Self {
            snapshot_id: snapshot_id.into(),
            tick,
            triggered_by: triggered_by.into(),
            world: WorldStateSnapshot::default(),
            agents: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portrayal::portray;

    #[test]
    fn test_snapshot_id_format() {
        assert_eq!(generate_snapshot_id(1), "snap_000001");
        assert_eq!(generate_snapshot_id(123456), "snap_123456");
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut snapshot = WorldSnapshot::new("snap_000001", 100, "periodic");
        snapshot.world = WorldStateSnapshot {
            width: 10,
            height: 10,
            torus: true,
            agent_count: 1,
            total_wealth: 1,
            gini: 0.0,
        };
        snapshot.agents.push(AgentSnapshot {
            agent_id: "agent_0000".to_string(),
            x: 4,
            y: 7,
            wealth: 1,
            portrayal: portray(1),
        });

        let json = serde_json::to_string_pretty(&snapshot).unwrap();
        assert!(json.contains("snap_000001"));
        assert!(json.contains("agent_0000"));

        // Verify it can be parsed back
        let parsed: WorldSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.snapshot_id, "snap_000001");
        assert_eq!(parsed.agents.len(), 1);
        assert_eq!(parsed.world.total_wealth, 1);
    }
}
