//! Simulation Systems
//!
//! The step engine (movement + wealth exchange), the activation ordering
//! strategy, and the per-tick metric collector.

pub mod activation;
pub mod exchange;
pub mod metrics;

pub use activation::Activation;
pub use exchange::{advance_tick, total_wealth};
pub use metrics::{collect_metrics, gini_coefficient, MetricsHistory};
