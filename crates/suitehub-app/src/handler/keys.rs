//! Key event handlers for the focused panel

use crate::input_key::InputKey;
use crate::message::{Message, Step};
use crate::state::{AppState, FamilyFilter, Panel};

use super::bindings::UiAction;

/// Convert key events to messages based on the focused panel
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key.is_force_quit() {
        return Some(Message::Quit);
    }

    match state.ui.focus {
        Panel::Form => handle_key_form(key),
        Panel::Suites => handle_key_suites(state, key).or_else(|| handle_key_global(state, key)),
        Panel::Catalog => handle_key_catalog(state, key).or_else(|| handle_key_global(state, key)),
    }
}

/// Keys shared by the list panels
fn handle_key_global(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrev),

        InputKey::Char('j') | InputKey::Down => Some(Message::MoveCursor(Step::Next)),
        InputKey::Char('k') | InputKey::Up => Some(Message::MoveCursor(Step::Prev)),
        InputKey::Char('g') | InputKey::Home => Some(Message::CursorHome),
        InputKey::Char('G') | InputKey::End => Some(Message::CursorEnd),

        InputKey::Char('r') => Some(Message::Action(UiAction::Reload)),
        InputKey::Char('s') => Some(Message::Action(UiAction::SaveLinks)),
        InputKey::Char('m') => Some(Message::Action(UiAction::Simulate)),

        InputKey::Char('f') | InputKey::Char(']') => {
            cycle_family(state, Step::Next).map(|f| Message::Action(UiAction::FilterFamily(f)))
        }
        InputKey::Char('F') | InputKey::Char('[') => {
            cycle_family(state, Step::Prev).map(|f| Message::Action(UiAction::FilterFamily(f)))
        }

        InputKey::Char('n') => Some(Message::FocusForm),

        _ => None,
    }
}

fn handle_key_suites(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => state
            .surfaces
            .suite_list
            .entries
            .get(state.ui.suite_cursor)
            .map(|entry| Message::Action(entry.action.clone())),
        _ => None,
    }
}

fn handle_key_catalog(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => state
            .surfaces
            .catalog
            .rows
            .get(state.ui.catalog_cursor)
            .map(|row| Message::Action(UiAction::ToggleModule(row.id))),
        InputKey::Left => cycle_family(state, Step::Prev)
            .map(|f| Message::Action(UiAction::FilterFamily(f))),
        InputKey::Right => cycle_family(state, Step::Next)
            .map(|f| Message::Action(UiAction::FilterFamily(f))),
        _ => None,
    }
}

fn handle_key_form(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::FormCancel),
        InputKey::Enter => Some(Message::Action(UiAction::CreateSuite)),
        InputKey::Tab | InputKey::Down => Some(Message::FormField(Step::Next)),
        InputKey::BackTab | InputKey::Up => Some(Message::FormField(Step::Prev)),
        InputKey::Backspace => Some(Message::FormBackspace),
        InputKey::CharCtrl('u') => Some(Message::FormClearField),
        InputKey::Char(c) => Some(Message::FormInput(c)),
        _ => None,
    }
}

/// The filter option next to the active one, wrapping around
fn cycle_family(state: &AppState, step: Step) -> Option<FamilyFilter> {
    let options = &state.surfaces.family_filter.options;
    if options.len() < 2 {
        return None;
    }

    let active = state.surfaces.family_filter.active_index().unwrap_or(0);
    let next = match step {
        Step::Next => (active + 1) % options.len(),
        Step::Prev => (active + options.len() - 1) % options.len(),
    };
    Some(options[next].filter.clone())
}
