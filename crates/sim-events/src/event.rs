//! Event Types
//!
//! Tick event definitions matching the simulation's JSONL output schema.

use serde::{Deserialize, Serialize};

/// Primary event type categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// An agent relocated to a neighboring cell
    Movement,
    /// An agent gave one unit of wealth to a co-located peer
    Transfer,
}

/// A grid cell reference as it appears in output files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRef {
    pub x: u32,
    pub y: u32,
}

impl CellRef {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// A single simulation event, one JSONL line in `output/events.jsonl`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Tick during which the event occurred
    pub tick: u64,
    pub event_type: EventType,
    /// The acting agent
    pub agent_id: String,
    /// Movement origin (movement events only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<CellRef>,
    /// Movement destination (movement events only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<CellRef>,
    /// Receiving agent (transfer events only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
}

impl Event {
    /// Create a movement event
    pub fn movement(tick: u64, agent_id: impl Into<String>, from: CellRef, to: CellRef) -> Self {
        Self {
            tick,
            event_type: EventType::Movement,
            agent_id: agent_id.into(),
            from: Some(from),
            to: Some(to),
            recipient: None,
        }
    }

    /// Create a transfer event
    pub fn transfer(tick: u64, agent_id: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            tick,
            event_type: EventType::Transfer,
            agent_id: agent_id.into(),
            from: None,
            to: None,
            recipient: Some(recipient.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_event_serialization() {
        let event = Event::movement(7, "agent_0001", CellRef::new(2, 3), CellRef::new(3, 3));
        let json = serde_json::to_string(&event).unwrap();

        assert!(json.contains("\"movement\""));
        assert!(json.contains("agent_0001"));
        // Transfer-only fields are omitted entirely
        assert!(!json.contains("recipient"));

        let parsed: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.event_type, EventType::Movement);
        assert_eq!(parsed.to, Some(CellRef::new(3, 3)));
    }

    #[test]
    fn test_transfer_event_serialization() {
        let event = Event::transfer(12, "agent_0002", "agent_0005");
        let json = serde_json::to_string(&event).unwrap();

        assert!(json.contains("\"transfer\""));
        assert!(json.contains("agent_0005"));
        assert!(!json.contains("\"from\""));

        let parsed: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.recipient.as_deref(), Some("agent_0005"));
    }
}
