//! UI action identifiers and their binding to procedures
//!
//! Key handlers and the headless command reader only ever produce
//! [`UiAction`]s; this table is the one place deciding what each does.

use serde::Serialize;

use suitehub_core::prelude::*;
use suitehub_core::{ModuleId, NewSuite, SuiteId};

use crate::procedures::Procedure;
use crate::state::{AppState, FamilyFilter, NoticeLevel, SuiteForm};
use crate::view::{self, Slice};

use super::{UpdateAction, UpdateResult};

/// Shown when a suite-scoped action has no active suite
pub const NO_ACTIVE_SUITE: &str = "Select a suite first.";

/// Shown when the create form misses required fields
pub const MISSING_FIELDS: &str = "Name and mission are required.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UiAction {
    Reload,
    SelectSuite(SuiteId),
    FilterFamily(FamilyFilter),
    ToggleModule(ModuleId),
    SaveLinks,
    Simulate,
    /// Replace the new-suite form contents
    FillForm {
        name: String,
        owner: String,
        mission: String,
    },
    CreateSuite,
}

/// Route a UI action to its procedure
pub fn dispatch(state: &mut AppState, action: UiAction) -> UpdateResult {
    match action {
        UiAction::Reload => {
            let procedure = Procedure::Reload {
                active: state.active_suite(),
                auto_select_first: state.settings.behavior.auto_select_first,
            };
            start(state, procedure)
        }

        UiAction::SelectSuite(id) => start(state, Procedure::SelectSuite { id }),

        UiAction::FilterFamily(filter) => filter_family(state, filter),

        UiAction::ToggleModule(id) => toggle_module(state, id),

        UiAction::SaveLinks => match state.active_suite() {
            Some(id) => {
                let module_ids = state.ui.link_draft.iter().copied().collect();
                start(state, Procedure::SaveLinks { id, module_ids })
            }
            None => {
                state.notify(NoticeLevel::Warning, NO_ACTIVE_SUITE);
                UpdateResult::none()
            }
        },

        UiAction::Simulate => match state.active_suite() {
            Some(id) => start(state, Procedure::Simulate { id }),
            None => {
                state.notify(NoticeLevel::Warning, NO_ACTIVE_SUITE);
                UpdateResult::none()
            }
        },

        UiAction::FillForm {
            name,
            owner,
            mission,
        } => {
            state.ui.form = SuiteForm {
                name,
                owner,
                mission,
                ..Default::default()
            };
            UpdateResult::none()
        }

        UiAction::CreateSuite => {
            match validate_new_suite(&state.ui.form, &state.settings.behavior.default_owner) {
                Ok(suite) => start(state, Procedure::CreateSuite { suite }),
                Err(e) => {
                    debug!("Create suite rejected: {}", e);
                    state.notify(NoticeLevel::Warning, e.to_string());
                    UpdateResult::none()
                }
            }
        }
    }
}

/// Start the boot sequence
pub fn boot(state: &mut AppState) -> UpdateResult {
    let procedure = Procedure::Boot {
        auto_select_first: state.settings.behavior.auto_select_first,
    };
    start(state, procedure)
}

/// Claim tickets and hand the procedure to the event loop
fn start(state: &mut AppState, procedure: Procedure) -> UpdateResult {
    let tickets = procedure.claim(&mut state.tracker);
    let kind = procedure.kind();
    debug!("Dispatching {:?} with {:?}", kind, tickets);

    state.ui.in_flight.push(kind);
    if state
        .ui
        .notice
        .as_ref()
        .is_some_and(|n| n.level == NoticeLevel::Error)
    {
        state.ui.notice = None;
    }

    UpdateResult::action(UpdateAction::RunProcedure { procedure, tickets })
}

/// Trim the form and apply the owner fallback
///
/// Name and mission must be non-empty; nothing is sent otherwise.
pub fn validate_new_suite(form: &SuiteForm, default_owner: &str) -> Result<NewSuite> {
    let name = form.name.trim();
    let mission = form.mission.trim();
    if name.is_empty() || mission.is_empty() {
        return Err(Error::validation(MISSING_FIELDS));
    }

    let owner = match form.owner.trim() {
        "" => default_owner.trim(),
        owner => owner,
    };

    Ok(NewSuite {
        name: name.to_string(),
        owner: owner.to_string(),
        mission: mission.to_string(),
    })
}

fn filter_family(state: &mut AppState, filter: FamilyFilter) -> UpdateResult {
    if let FamilyFilter::Family(family) = &filter {
        if !state.families.contains(family) {
            state.notify(NoticeLevel::Warning, format!("Unknown family: {family}"));
            return UpdateResult::none();
        }
    }

    if state.ui.family_filter != filter {
        state.ui.family_filter = filter;
        state.ui.catalog_cursor = 0;
        view::refresh(state, &[Slice::FamilyFilter].into_iter().collect());
    }
    UpdateResult::none()
}

fn toggle_module(state: &mut AppState, id: ModuleId) -> UpdateResult {
    if state.active_suite().is_none() {
        state.notify(NoticeLevel::Warning, NO_ACTIVE_SUITE);
        return UpdateResult::none();
    }

    if !state.session.modules.iter().any(|m| m.id == id) {
        state.notify(NoticeLevel::Warning, format!("Unknown module: {id}"));
        return UpdateResult::none();
    }

    if !state.ui.link_draft.remove(&id) {
        state.ui.link_draft.insert(id);
    }
    view::refresh(state, &[Slice::LinkSelection].into_iter().collect());
    UpdateResult::none()
}
