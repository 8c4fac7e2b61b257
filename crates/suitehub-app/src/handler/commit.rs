//! Committing procedure results
//!
//! A finished procedure's [`Refresh`] is written in one step: every slice whose
//! ticket is still current replaces its counterpart wholesale, stale slices
//! are dropped, and then exactly the affected surfaces are re-rendered.

use suitehub_core::prelude::*;

use crate::procedures::{Procedure, ProcedureKind, Refresh, SelectionChange};
use crate::state::{AppState, Completion, FamilyFilter, NoticeLevel};
use crate::tracker::{Resource, TicketSet};
use crate::view::{self, Changes, Slice};

use super::UpdateResult;

/// Handle a finished procedure
pub fn procedure_finished(
    state: &mut AppState,
    procedure: Procedure,
    tickets: TicketSet,
    outcome: std::result::Result<Refresh, String>,
) -> UpdateResult {
    let kind = procedure.kind();
    if let Some(pos) = state.ui.in_flight.iter().position(|k| *k == kind) {
        state.ui.in_flight.remove(pos);
    }

    let mut changes = Changes::new();
    let error = match outcome {
        Ok(refresh) => {
            changes = commit(state, &procedure, &tickets, refresh);
            after_success(state, kind, &mut changes);
            None
        }
        Err(message) => {
            error!("{} failed: {}", kind.label(), message);
            if kind == ProcedureKind::Boot {
                state.ui.boot_error = Some(message.clone());
                changes.insert(Slice::BootError);
            } else {
                state.notify(NoticeLevel::Error, message.clone());
            }
            Some(message)
        }
    };

    view::refresh(state, &changes);

    state.last_completion = Some(Completion {
        procedure: kind,
        error,
    });
    state.completion_seq += 1;
    UpdateResult::none()
}

/// Write every still-current slice of `refresh` into the state
///
/// A selection reconciled against a fresh suite list additionally needs that
/// list to be current and the active suite to be the one it started from.
pub fn commit(
    state: &mut AppState,
    procedure: &Procedure,
    tickets: &TicketSet,
    refresh: Refresh,
) -> Changes {
    let mut changes = Changes::new();
    let current = |resource: Resource| tickets.is_current(resource, &state.tracker);

    let overview_ok = current(Resource::Overview);
    let catalog_ok = current(Resource::Catalog);
    let suites_ok = current(Resource::SuiteList);
    let selection_ok = current(Resource::ActiveSuite)
        && match procedure.selection_base() {
            Some(base) => suites_ok && state.session.current_suite_id == base,
            None => true,
        };

    if let Some(overview) = refresh.overview {
        if overview_ok {
            state.overview = Some(overview);
            changes.insert(Slice::Overview);
        } else {
            debug!("Discarding stale overview");
        }
    }

    if let Some(catalog) = refresh.catalog {
        if catalog_ok {
            state.session.modules = catalog.modules;
            state.families = catalog.families;
            changes.insert(Slice::Catalog);

            if let FamilyFilter::Family(family) = &state.ui.family_filter {
                if !state.families.contains(family) {
                    debug!("Family {} no longer exists, showing all", family);
                    state.ui.family_filter = FamilyFilter::All;
                    changes.insert(Slice::FamilyFilter);
                }
            }

            let known: Vec<_> = state.session.modules.iter().map(|m| m.id).collect();
            let before = state.ui.link_draft.len();
            state.ui.link_draft.retain(|id| known.contains(id));
            if state.ui.link_draft.len() != before {
                changes.insert(Slice::LinkSelection);
            }
        } else {
            debug!("Discarding stale catalog");
        }
    }

    if let Some(suites) = refresh.suites {
        if suites_ok {
            state.session.suites = suites;
            changes.insert(Slice::Suites);
        } else {
            debug!("Discarding stale suite list");
        }
    }

    if let Some(selection) = refresh.selection {
        if selection_ok {
            apply_selection(state, selection);
            changes.insert(Slice::ActiveSuite);
            changes.insert(Slice::LinkSelection);
            if state.ui.boot_error.take().is_some() {
                changes.insert(Slice::BootError);
            }
        } else {
            debug!("Discarding stale suite selection");
        }
    }

    changes
}

/// Write id, detail and runs together
fn apply_selection(state: &mut AppState, selection: SelectionChange) {
    let session = &mut state.session;
    match selection {
        SelectionChange::Select(selection) => {
            let selection = *selection;
            state.ui.link_draft = selection.detail.module_ids().collect();
            session.current_suite_id = Some(selection.id);
            session.current_detail = Some(selection.detail);
            session.current_runs = selection.runs;
            if let Some(index) = session.suite_index(selection.id) {
                state.ui.suite_cursor = index;
            }
        }
        SelectionChange::Clear => {
            session.current_suite_id = None;
            session.current_detail = None;
            session.current_runs = Vec::new();
            state.ui.link_draft.clear();
        }
    }
}

fn after_success(state: &mut AppState, kind: ProcedureKind, changes: &mut Changes) {
    match kind {
        ProcedureKind::Boot | ProcedureKind::Reload => {
            if state.ui.boot_error.take().is_some() {
                changes.insert(Slice::BootError);
            }
            if kind == ProcedureKind::Reload {
                state.notify(NoticeLevel::Info, "Dashboard reloaded.");
            }
        }
        ProcedureKind::CreateSuite => {
            state.ui.form.clear();
            state.notify(NoticeLevel::Info, "Suite created.");
        }
        ProcedureKind::SaveLinks => {
            state.notify(NoticeLevel::Info, "Module links saved.");
        }
        ProcedureKind::Simulate => {
            state.notify(NoticeLevel::Info, "Simulation recorded.");
        }
        ProcedureKind::SelectSuite => {}
    }
}
