//! Main render/view function (View in TEA pattern)
//!
//! Draws the rendered surfaces held in [`AppState::surfaces`]; nothing here
//! reads the session model directly.


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use suitehub_app::state::{AppState, Panel};

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    let surfaces = &state.surfaces;
    let focus = state.ui.focus;

    frame.render_widget(widgets::DashboardHeader::new(&surfaces.kpis), areas.header);
    frame.render_widget(
        widgets::SuiteList::new(
            &surfaces.suite_list,
            state.ui.suite_cursor,
            focus == Panel::Suites,
        ),
        areas.suites,
    );
    frame.render_widget(
        widgets::SuiteFormPanel::new(
            &state.ui.form,
            focus == Panel::Form,
            &state.settings.behavior.default_owner,
        ),
        areas.form,
    );
    frame.render_widget(widgets::SuiteDetailPanel::new(&surfaces.detail), areas.detail);
    frame.render_widget(widgets::RunHistory::new(&surfaces.runs), areas.runs);
    frame.render_widget(widgets::FamilyBar::new(&surfaces.family_filter), areas.filter);
    frame.render_widget(
        widgets::CatalogTable::new(
            &surfaces.catalog,
            state.ui.catalog_cursor,
            focus == Panel::Catalog,
        ),
        areas.catalog,
    );
    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}
