//! Message types for the application (TEA pattern)

use crate::handler::bindings::UiAction;
use crate::input_key::InputKey;
use crate::procedures::{Procedure, Refresh};
use crate::tracker::TicketSet;

/// Direction for cursor and option cycling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

/// All possible messages in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from the terminal
    Key(InputKey),

    /// Periodic tick (notice expiry)
    Tick,

    /// Start the boot sequence
    Boot,

    /// Quit immediately
    Quit,

    /// A UI action identifier, bound to a procedure in `handler::bindings`
    Action(UiAction),

    // ─────────────────────────────────────────────────────────
    // Procedure Results
    // ─────────────────────────────────────────────────────────
    /// A background procedure finished
    ProcedureFinished {
        procedure: Procedure,
        tickets: TicketSet,
        outcome: Result<Refresh, String>,
    },

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    /// Jump to the new-suite form
    FocusForm,
    /// Move the cursor of the focused list
    MoveCursor(Step),
    CursorHome,
    CursorEnd,

    // ─────────────────────────────────────────────────────────
    // New-Suite Form
    // ─────────────────────────────────────────────────────────
    FormInput(char),
    FormBackspace,
    FormClearField,
    FormField(Step),
    /// Leave the form, keeping its contents
    FormCancel,
}
