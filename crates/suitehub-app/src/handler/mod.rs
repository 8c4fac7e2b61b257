//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `bindings`: UI action identifiers and the table binding them to procedures
//! - `commit`: Applying procedure results and re-rendering affected surfaces
//! - `keys`: Key event handlers per focused panel
//! - `navigation`: Focus, cursor and form editing

pub mod bindings;
pub(crate) mod commit;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod update;


use crate::message::Message;
use crate::procedures::Procedure;
use crate::tracker::TicketSet;

pub use bindings::UiAction;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Run a procedure in the background with the tickets it was dispatched with
    RunProcedure {
        procedure: Procedure,
        tickets: TicketSet,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
