//! Metric Collection
//!
//! Computes the Gini coefficient of the wealth distribution after every
//! tick (and once at model construction) and appends the result, together
//! with a per-agent wealth snapshot, to an append-only history.

use bevy_ecs::prelude::*;
use std::collections::HashMap;

use sim_events::MetricRecord;

use crate::components::agent::{AgentId, Wealth};
use crate::SimulationState;

/// Resource: the growing metric time series for one run
#[derive(Resource, Debug, Default)]
pub struct MetricsHistory {
    records: Vec<MetricRecord>,
}

impl MetricsHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Records arrive in tick order and are never
    /// removed or rewritten.
    pub fn push(&mut self, record: MetricRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[MetricRecord] {
        &self.records
    }

    pub fn latest(&self) -> Option<&MetricRecord> {
        self.records.last()
    }

    /// Gini of the most recent record.
    pub fn latest_gini(&self) -> Option<f64> {
        self.latest().map(|record| record.gini)
    }

    /// Change in Gini between the first and latest records.
    pub fn gini_change(&self) -> Option<f64> {
        if self.records.len() < 2 {
            return None;
        }
        let first = self.records.first()?.gini;
        let last = self.records.last()?.gini;
        Some(last - first)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Calculate the Gini coefficient of a wealth distribution.
///
/// Sorting ascending as x0 <= x1 <= ... and writing
/// B = sum(x_i * (n - i)) / (n * sum(x_i)), the coefficient is
/// 1 + 1/n - 2B. Degenerate inputs have defined results: an empty
/// population, a single agent, and an all-broke population all read as
/// perfectly equal (0.0).
pub fn gini_coefficient(wealths: &[u32]) -> f64 {
    let n = wealths.len();
    if n == 0 {
        return 0.0;
    }

    let total: u64 = wealths.iter().map(|&w| u64::from(w)).sum();
    if total == 0 {
        return 0.0;
    }

    let mut sorted = wealths.to_vec();
    sorted.sort_unstable();

    let weighted: u64 = sorted
        .iter()
        .enumerate()
        .map(|(i, &x)| u64::from(x) * (n - i) as u64)
        .sum();

    let b = weighted as f64 / (n as f64 * total as f64);
    (1.0 + 1.0 / n as f64 - 2.0 * b).clamp(0.0, 1.0)
}

/// Capture the current tick's metric record into the history.
pub fn collect_metrics(world: &mut World) {
    let tick = world.resource::<SimulationState>().current_tick;

    let mut wealth_by_agent = HashMap::new();
    let mut wealths = Vec::new();
    let mut query = world.query::<(&AgentId, &Wealth)>();
    for (id, wealth) in query.iter(world) {
        wealths.push(wealth.0);
        wealth_by_agent.insert(id.0.clone(), wealth.0);
    }

    let record = MetricRecord {
        tick,
        gini: gini_coefficient(&wealths),
        wealth_by_agent,
    };

    world.resource_mut::<MetricsHistory>().push(record);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gini_equal_distribution_is_zero() {
        let gini = gini_coefficient(&[5, 5, 5, 5]);
        assert!(gini.abs() < 1e-12, "equal wealth should read 0: {gini}");
    }

    #[test]
    fn test_gini_maximal_inequality_closed_form() {
        // One agent holds everything: G = (n - 1) / n
        let gini = gini_coefficient(&[0, 0, 0, 10]);
        assert!((gini - 0.75).abs() < 1e-12, "expected 0.75, got {gini}");
    }

    #[test]
    fn test_gini_degenerate_inputs() {
        assert_eq!(gini_coefficient(&[]), 0.0);
        assert_eq!(gini_coefficient(&[7]), 0.0);
        assert_eq!(gini_coefficient(&[0, 0, 0]), 0.0);
    }

    #[test]
    fn test_gini_stays_in_bounds() {
        let samples: &[&[u32]] = &[
            &[1, 1, 2, 3, 5, 8],
            &[0, 1, 0, 1, 0, 1],
            &[100, 1],
            &[3, 3, 3, 0],
        ];
        for wealths in samples {
            let gini = gini_coefficient(wealths);
            assert!((0.0..=1.0).contains(&gini), "{wealths:?} -> {gini}");
        }
    }

    #[test]
    fn test_gini_order_independent() {
        let a = gini_coefficient(&[4, 0, 2, 1]);
        let b = gini_coefficient(&[1, 2, 0, 4]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_history_accessors() {
        let mut history = MetricsHistory::new();
        assert!(history.is_empty());
        assert!(history.latest_gini().is_none());
        assert!(history.gini_change().is_none());

        history.push(MetricRecord {
            tick: 0,
            gini: 0.0,
            wealth_by_agent: HashMap::new(),
        });
        history.push(MetricRecord {
            tick: 1,
            gini: 0.25,
            wealth_by_agent: HashMap::new(),
        });

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest_gini(), Some(0.25));
        assert_eq!(history.gini_change(), Some(0.25));
    }
}
