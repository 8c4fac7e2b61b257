//! Focus, cursor and form editing handlers

use crate::message::Step;
use crate::state::{AppState, Panel};

use super::UpdateResult;

pub fn handle_focus(state: &mut AppState, step: Step) -> UpdateResult {
    state.ui.focus = match step {
        Step::Next => state.ui.focus.next(),
        Step::Prev => state.ui.focus.prev(),
    };
    UpdateResult::none()
}

fn list_len(state: &AppState) -> usize {
    match state.ui.focus {
        Panel::Suites => state.surfaces.suite_list.entries.len(),
        Panel::Catalog => state.surfaces.catalog.rows.len(),
        Panel::Form => 0,
    }
}

fn cursor_mut(state: &mut AppState) -> Option<&mut usize> {
    match state.ui.focus {
        Panel::Suites => Some(&mut state.ui.suite_cursor),
        Panel::Catalog => Some(&mut state.ui.catalog_cursor),
        Panel::Form => None,
    }
}

pub fn handle_move_cursor(state: &mut AppState, step: Step) -> UpdateResult {
    let len = list_len(state);
    if len == 0 {
        return UpdateResult::none();
    }

    if let Some(cursor) = cursor_mut(state) {
        *cursor = match step {
            Step::Prev => cursor.saturating_sub(1),
            Step::Next => (*cursor + 1).min(len - 1),
        };
    }
    UpdateResult::none()
}

pub fn handle_cursor_home(state: &mut AppState) -> UpdateResult {
    if let Some(cursor) = cursor_mut(state) {
        *cursor = 0;
    }
    UpdateResult::none()
}

pub fn handle_cursor_end(state: &mut AppState) -> UpdateResult {
    let last = list_len(state).saturating_sub(1);
    if let Some(cursor) = cursor_mut(state) {
        *cursor = last;
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Form
// ─────────────────────────────────────────────────────────

pub fn handle_form_input(state: &mut AppState, c: char) -> UpdateResult {
    let field = state.ui.form.field;
    state.ui.form.value_mut(field).push(c);
    UpdateResult::none()
}

pub fn handle_form_backspace(state: &mut AppState) -> UpdateResult {
    let field = state.ui.form.field;
    state.ui.form.value_mut(field).pop();
    UpdateResult::none()
}

pub fn handle_form_clear_field(state: &mut AppState) -> UpdateResult {
    let field = state.ui.form.field;
    state.ui.form.value_mut(field).clear();
    UpdateResult::none()
}

pub fn handle_form_field(state: &mut AppState, step: Step) -> UpdateResult {
    let form = &mut state.ui.form;
    form.field = match step {
        Step::Next => form.field.next(),
        Step::Prev => form.field.prev(),
    };
    UpdateResult::none()
}

pub fn handle_form_cancel(state: &mut AppState) -> UpdateResult {
    state.ui.focus = Panel::Suites;
    UpdateResult::none()
}

pub fn handle_focus_form(state: &mut AppState) -> UpdateResult {
    state.ui.focus = Panel::Form;
    UpdateResult::none()
}
