//! Agent Portrayal
//!
//! Visual attributes a dashboard renders for each agent, derived purely
//! from that agent's wealth. Broke agents are drawn smaller and in a
//! distinct color so wealth concentration is visible at a glance.

use serde::{Deserialize, Serialize};

/// Marker size for agents holding wealth
pub const SOLVENT_SIZE: f32 = 50.0;
/// Marker size for broke agents
pub const BROKE_SIZE: f32 = 20.0;
/// Marker color for agents holding wealth
pub const SOLVENT_COLOR: &str = "#1f77b4";
/// Marker color for broke agents
pub const BROKE_COLOR: &str = "#d62728";

/// Visual attributes for a single agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentPortrayal {
    pub size: f32,
    pub color: String,
}

/// Derive the portrayal for an agent from its wealth
pub fn portray(wealth: u32) -> AgentPortrayal {
    if wealth > 0 {
        AgentPortrayal {
            size: SOLVENT_SIZE,
            color: SOLVENT_COLOR.to_string(),
        }
    } else {
        AgentPortrayal {
            size: BROKE_SIZE,
            color: BROKE_COLOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solvent_portrayal() {
        let portrayal = portray(3);
        assert_eq!(portrayal.size, SOLVENT_SIZE);
        assert_eq!(portrayal.color, SOLVENT_COLOR);
    }

    #[test]
    fn test_broke_portrayal() {
        let portrayal = portray(0);
        assert_eq!(portrayal.size, BROKE_SIZE);
        assert_eq!(portrayal.color, BROKE_COLOR);
    }

    #[test]
    fn test_single_unit_counts_as_solvent() {
        assert_eq!(portray(1), portray(100));
    }
}
