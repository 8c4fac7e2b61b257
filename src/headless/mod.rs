//! Headless mode - NDJSON event output instead of the TUI
//!
//! Commands are read line by line from stdin (see [`command`]) and every
//! engine event is written to stdout as one JSON object per line.
//!
//! # Example Output
//!
//! ```json
//! {"event":"ready","base_url":"http://127.0.0.1:5113/","timestamp":1714556400000}
//! {"event":"procedure_started","procedure":"boot","timestamp":1714556400001}
//! {"event":"rendered","surfaces":{"kpis":{"loaded":true,"modules":6,"suites":0,"runs":0,"last_roi":null}},"timestamp":1714556400020}
//! {"event":"procedure_completed","procedure":"boot","timestamp":1714556400020}
//! ```

pub mod command;
pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::error;

use suitehub_app::state::NoticeLevel;
use suitehub_app::view::{Surface, Surfaces};
use suitehub_app::{EngineEvent, ProcedureKind};

pub use runner::run_headless;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Engine created; nothing fetched yet
    Ready { base_url: String, timestamp: i64 },

    ProcedureStarted {
        procedure: ProcedureKind,
        timestamp: i64,
    },

    ProcedureCompleted {
        procedure: ProcedureKind,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
        timestamp: i64,
    },

    /// Re-rendered surfaces keyed by name, with their new view models
    Rendered {
        surfaces: Map<String, Value>,
        timestamp: i64,
    },

    Notice {
        level: NoticeLevel,
        text: String,
        timestamp: i64,
    },

    /// Bad stdin command or runtime failure
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },

    Shutdown { timestamp: i64 },
}

impl HeadlessEvent {
    /// Write this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json).and_then(|_| stdout.flush()) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn ready(base_url: &str) -> Self {
        Self::Ready {
            base_url: base_url.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Convert an engine event, reading rendered view models from `surfaces`
    pub fn from_engine(event: &EngineEvent, surfaces: &Surfaces) -> Self {
        let timestamp = Self::now();
        match event {
            EngineEvent::ProcedureStarted { procedure } => Self::ProcedureStarted {
                procedure: *procedure,
                timestamp,
            },
            EngineEvent::ProcedureCompleted { procedure, error } => Self::ProcedureCompleted {
                procedure: *procedure,
                error: error.clone(),
                timestamp,
            },
            EngineEvent::Rendered { surfaces: rendered } => Self::Rendered {
                surfaces: rendered
                    .iter()
                    .map(|s| (surface_name(*s).to_string(), surface_value(surfaces, *s)))
                    .collect(),
                timestamp,
            },
            EngineEvent::Notice { level, text } => Self::Notice {
                level: *level,
                text: text.clone(),
                timestamp,
            },
            EngineEvent::Shutdown => Self::Shutdown { timestamp },
        }
    }
}

fn surface_name(surface: Surface) -> &'static str {
    match surface {
        Surface::Kpis => "kpis",
        Surface::FamilyFilter => "family_filter",
        Surface::SuiteList => "suite_list",
        Surface::Detail => "detail",
        Surface::Runs => "runs",
        Surface::Catalog => "catalog",
    }
}

fn surface_value(surfaces: &Surfaces, surface: Surface) -> Value {
    let value = match surface {
        Surface::Kpis => serde_json::to_value(&surfaces.kpis),
        Surface::FamilyFilter => serde_json::to_value(&surfaces.family_filter),
        Surface::SuiteList => serde_json::to_value(&surfaces.suite_list),
        Surface::Detail => serde_json::to_value(&surfaces.detail),
        Surface::Runs => serde_json::to_value(&surfaces.runs),
        Surface::Catalog => serde_json::to_value(&surfaces.catalog),
    };
    value.unwrap_or_else(|e| {
        error!("Failed to serialize {:?}: {}", surface, e);
        Value::Null
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_serialization() {
        let event = HeadlessEvent::ready("http://127.0.0.1:5113/");
        let value = serde_json::to_value(&event).expect("serialization failed");

        assert_eq!(value["event"], "ready");
        assert_eq!(value["base_url"], "http://127.0.0.1:5113/");
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_rendered_carries_view_models() {
        let surfaces = Surfaces::default();
        let event = HeadlessEvent::from_engine(
            &EngineEvent::Rendered {
                surfaces: vec![Surface::Detail, Surface::Runs],
            },
            &surfaces,
        );
        let value = serde_json::to_value(&event).expect("serialization failed");

        assert_eq!(value["event"], "rendered");
        assert_eq!(value["surfaces"]["detail"]["kind"], "placeholder");
        assert_eq!(value["surfaces"]["runs"]["kind"], "hidden");
        assert!(value["surfaces"].get("catalog").is_none());
    }

    #[test]
    fn test_completed_error_is_optional() {
        let ok = HeadlessEvent::from_engine(
            &EngineEvent::ProcedureCompleted {
                procedure: ProcedureKind::Simulate,
                error: None,
            },
            &Surfaces::default(),
        );
        let value = serde_json::to_value(&ok).expect("serialization failed");
        assert_eq!(value["procedure"], "simulate");
        assert!(value.get("error").is_none());
    }
}
