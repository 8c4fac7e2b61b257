//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use suitehub_core::prelude::*;

use crate::message::{Message, Step};
use crate::state::{AppPhase, AppState};

use super::{bindings, commit, keys::handle_key, navigation, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            let ttl = state.notice_ttl();
            if state
                .ui
                .notice
                .as_ref()
                .is_some_and(|n| n.is_expired(Instant::now(), ttl))
            {
                state.ui.notice = None;
            }
            UpdateResult::none()
        }

        Message::Boot => bindings::boot(state),

        Message::Action(action) => bindings::dispatch(state, action),

        Message::ProcedureFinished {
            procedure,
            tickets,
            outcome,
        } => commit::procedure_finished(state, procedure, tickets, outcome),

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => navigation::handle_focus(state, Step::Next),
        Message::FocusPrev => navigation::handle_focus(state, Step::Prev),
        Message::FocusForm => navigation::handle_focus_form(state),
        Message::MoveCursor(step) => navigation::handle_move_cursor(state, step),
        Message::CursorHome => navigation::handle_cursor_home(state),
        Message::CursorEnd => navigation::handle_cursor_end(state),

        // ─────────────────────────────────────────────────────────
        // New-Suite Form
        // ─────────────────────────────────────────────────────────
        Message::FormInput(c) => navigation::handle_form_input(state, c),
        Message::FormBackspace => navigation::handle_form_backspace(state),
        Message::FormClearField => navigation::handle_form_clear_field(state),
        Message::FormField(step) => navigation::handle_form_field(state, step),
        Message::FormCancel => navigation::handle_form_cancel(state),
    }
}
