//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use serde::Serialize;

use crate::procedures::ProcedureKind;
use crate::state::NoticeLevel;
use crate::view::Surface;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EngineEvent {
    /// A procedure was dispatched
    ProcedureStarted { procedure: ProcedureKind },

    /// A procedure result was handled (committed or reported)
    ProcedureCompleted {
        procedure: ProcedureKind,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },

    /// A render pass touched these surfaces, in render order
    Rendered { surfaces: Vec<Surface> },

    /// The status line changed
    Notice { level: NoticeLevel, text: String },

    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::ProcedureStarted { .. } => "procedure_started",
            EngineEvent::ProcedureCompleted { .. } => "procedure_completed",
            EngineEvent::Rendered { .. } => "rendered",
            EngineEvent::Notice { .. } => "notice",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_event_tag() {
        let event = EngineEvent::ProcedureCompleted {
            procedure: ProcedureKind::SaveLinks,
            error: None,
        };
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event"], "procedure_completed");
        assert_eq!(json["procedure"], "save_links");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_rendered_lists_surfaces() {
        let event = EngineEvent::Rendered {
            surfaces: vec![Surface::FamilyFilter, Surface::Catalog],
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""event":"rendered""#));
        assert_eq!(event.event_type(), "rendered");
    }
}
