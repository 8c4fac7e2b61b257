//! View renderers: deterministic projections from state to view models
//!
//! Each surface has one renderer. Renderers never mutate the model; the
//! controller decides which surfaces to re-render through [`graph`].

pub mod catalog;
pub mod detail;
pub mod family_filter;
pub mod graph;
pub mod kpis;
pub mod runs;
pub mod suites;

use serde::Serialize;

use crate::state::AppState;

pub use catalog::{CatalogRow, CatalogView};
pub use detail::{DetailPanel, DetailView};
pub use family_filter::{FamilyFilterView, FilterOption};
pub use graph::{Changes, Slice, Surface};
pub use kpis::KpiView;
pub use runs::{RunEntry, RunsView};
pub use suites::{SuiteEntry, SuiteListView};

/// View models of every dashboard region
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Surfaces {
    pub kpis: KpiView,
    pub family_filter: FamilyFilterView,
    pub suite_list: SuiteListView,
    pub detail: DetailView,
    pub runs: RunsView,
    pub catalog: CatalogView,
}

/// Render one surface from the current state
pub fn render_surface(state: &mut AppState, surface: Surface) {
    let session = &state.session;
    match surface {
        Surface::Kpis => {
            state.surfaces.kpis = kpis::render(state.overview.as_ref());
        }
        Surface::FamilyFilter => {
            state.surfaces.family_filter =
                family_filter::render(&state.families, &state.ui.family_filter);
        }
        Surface::SuiteList => {
            state.surfaces.suite_list = suites::render(&session.suites, session.current_suite_id);
        }
        Surface::Detail => {
            state.surfaces.detail = detail::render(
                session.current_detail.as_ref(),
                state.ui.boot_error.as_deref(),
                !session.suites.is_empty(),
            );
        }
        Surface::Runs => {
            state.surfaces.runs = runs::render(&session.current_runs, session.current_detail.is_some());
        }
        Surface::Catalog => {
            state.surfaces.catalog = catalog::render(
                &session.modules,
                &state.ui.family_filter,
                session.current_detail.as_ref(),
                &state.ui.link_draft,
            );
        }
    }
}

/// Re-render exactly the surfaces that read a changed slice, in render order
pub fn refresh(state: &mut AppState, changes: &Changes) -> Vec<Surface> {
    let affected = changes.affected();
    if affected.is_empty() {
        return affected;
    }

    for surface in &affected {
        render_surface(state, *surface);
    }
    state.last_rendered = affected.clone();
    state.render_seq += 1;
    state.clamp_cursors();
    affected
}

/// Re-render every surface
pub fn render_all(state: &mut AppState) {
    for surface in Surface::RENDER_ORDER {
        render_surface(state, surface);
    }
    state.last_rendered = Surface::RENDER_ORDER.to_vec();
    state.render_seq += 1;
    state.clamp_cursors();
}

#[cfg(test)]
mod tests {
    use super::*;
    use suitehub_remote::test_utils::sample_catalog;

    #[test]
    fn test_refresh_renders_only_affected_surfaces() {
        let mut state = AppState::new();
        state.session.modules = sample_catalog();
        let before = state.render_seq;

        let rendered = refresh(&mut state, &[Slice::Catalog].into_iter().collect());

        assert_eq!(rendered, vec![Surface::FamilyFilter, Surface::Catalog]);
        assert_eq!(state.surfaces.catalog.rows.len(), 6);
        assert_eq!(state.last_rendered, rendered);
        assert_eq!(state.render_seq, before + 1);
    }

    #[test]
    fn test_empty_changes_render_nothing() {
        let mut state = AppState::new();
        let before = state.render_seq;
        assert!(refresh(&mut state, &Changes::new()).is_empty());
        assert_eq!(state.render_seq, before);
    }

    #[test]
    fn test_writes_are_invisible_until_rendered() {
        let mut state = AppState::new();
        state.session.modules = sample_catalog();
        assert!(state.surfaces.catalog.rows.is_empty());

        render_all(&mut state);
        assert_eq!(state.surfaces.catalog.rows.len(), 6);
    }
}
