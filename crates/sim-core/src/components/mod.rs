//! ECS Components and Resources
//!
//! Components for agents and the grid resource that owns cell occupancy.

pub mod agent;
pub mod grid;

pub use agent::{Agent, AgentId, Wealth};
pub use grid::{Grid, GridPos, Position};
