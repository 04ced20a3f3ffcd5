//! Agent Components
//!
//! Identity and wealth for individual agents.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Marker component identifying an entity as an agent
#[derive(Component, Debug, Clone, Default)]
pub struct Agent;

/// Unique identifier for an agent
#[derive(Component, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub String);

impl AgentId {
    /// Build the canonical id for the agent at the given spawn index
    pub fn from_index(index: usize) -> Self {
        Self(format!("agent_{:04}", index))
    }
}

/// Integer wealth held by an agent
///
/// Wealth never goes negative: the only decrement is `give_unit`, which
/// refuses when the balance is zero.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wealth(pub u32);

impl Wealth {
    pub fn is_broke(&self) -> bool {
        self.0 == 0
    }

    /// Remove one unit. Returns false (and leaves the balance untouched)
    /// when the agent has nothing to give.
    pub fn give_unit(&mut self) -> bool {
        if self.0 == 0 {
            return false;
        }
        self.0 -= 1;
        true
    }

    /// Add one unit.
    pub fn receive_unit(&mut self) {
        self.0 += 1;
    }
}
