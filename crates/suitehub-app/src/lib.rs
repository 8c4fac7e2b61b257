//! suitehub-app - Application state and orchestration for Suite Hub
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! dashboard: the synchronized model, the controller procedures that refresh
//! it from the remote API, request tickets that keep late responses from
//! overwriting newer data, and the view projections re-rendered from it.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod procedures;
pub mod process;
pub mod state;
pub mod tracker;
pub mod view;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UiAction, UpdateAction, UpdateResult};
pub use message::Message;
pub use procedures::{Procedure, ProcedureKind, Refresh};
pub use state::AppState;
pub use view::{Surface, Surfaces};
