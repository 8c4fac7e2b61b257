//! Screen layout definitions for the TUI
//!
//! ```text
//! ┌ header: title + KPIs ─────────────────────────────┐
//! ├ suites ─────────┬ detail ─────────────────────────┤
//! │                 ├ runs ───────────────────────────┤
//! │                 │ family filter                   │
//! ├ new suite ──────┼ catalog ────────────────────────┤
//! └─────────────────┴─────────────────────────────────┘
//!  status bar
//! ```

use ratatui::layout::{Constraint, Layout, Rect};

const HEADER_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;
const FORM_HEIGHT: u16 = 5;
const DETAIL_HEIGHT: u16 = 6;
const RUNS_HEIGHT: u16 = 6;
const FILTER_HEIGHT: u16 = 1;

/// Screen areas for the dashboard
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub suites: Rect,
    pub form: Rect,
    pub detail: Rect,
    pub runs: Rect,
    pub filter: Rect,
    pub catalog: Rect,
    pub status: Rect,
}

/// Split the screen into dashboard regions
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, status] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(area);

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)]).areas(body);

    let [suites, form] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(FORM_HEIGHT)]).areas(left);

    let [detail, runs, filter, catalog] = Layout::vertical([
        Constraint::Length(DETAIL_HEIGHT),
        Constraint::Length(RUNS_HEIGHT),
        Constraint::Length(FILTER_HEIGHT),
        Constraint::Min(3),
    ])
    .areas(right);

    ScreenAreas {
        header,
        suites,
        form,
        detail,
        runs,
        filter,
        catalog,
        status,
    }
}
