//! Metric Record Types
//!
//! One record per tick: the Gini coefficient of the wealth distribution
//! plus the full per-agent wealth snapshot. Records are append-only; the
//! sequence of records over a run forms the model-level and agent-level
//! time series a dashboard plots.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An immutable per-tick metric snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Tick index (0 = state at model construction, before any step)
    pub tick: u64,
    /// Gini coefficient of the wealth distribution, in [0, 1]
    pub gini: f64,
    /// Wealth of every agent at this tick, keyed by agent id
    pub wealth_by_agent: HashMap<String, u32>,
}

impl MetricRecord {
    /// Total wealth across all agents at this tick
    pub fn total_wealth(&self) -> u64 {
        self.wealth_by_agent.values().map(|&w| u64::from(w)).sum()
    }

    /// Number of agents captured in this record
    pub fn agent_count(&self) -> usize {
        self.wealth_by_agent.len()
    }
}
