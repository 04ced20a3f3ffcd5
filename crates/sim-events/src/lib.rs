//! Shared data types and serialization for the wealth exchange simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! External consumers (dashboards, analysis scripts) deserialize the
//! simulation's output files with these types.

pub mod event;
pub mod metrics;
pub mod portrayal;
pub mod snapshot;

// Re-export event types
pub use event::{CellRef, Event, EventType};

// Re-export metric types
pub use metrics::MetricRecord;

// Re-export portrayal types
pub use portrayal::{portray, AgentPortrayal, BROKE_COLOR, BROKE_SIZE, SOLVENT_COLOR, SOLVENT_SIZE};

// Re-export snapshot types
pub use snapshot::{generate_snapshot_id, AgentSnapshot, WorldSnapshot, WorldStateSnapshot};
