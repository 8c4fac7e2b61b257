//! Status bar widget
//!
//! Shows the current notice, otherwise key hints for the focused panel.
//! Running procedures are listed on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use suitehub_app::state::{AppState, Panel};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state.ui.focus {
            Panel::Suites => &[
                ("↑↓", "move"),
                ("⏎", "select"),
                ("tab", "panel"),
                ("n", "new"),
                ("m", "simulate"),
                ("r", "reload"),
                ("q", "quit"),
            ],
            Panel::Catalog => &[
                ("↑↓", "move"),
                ("space", "toggle"),
                ("f/F", "family"),
                ("s", "save links"),
                ("tab", "panel"),
                ("q", "quit"),
            ],
            Panel::Form => &[
                ("tab", "next field"),
                ("⏎", "create"),
                ("^u", "clear"),
                ("esc", "back"),
            ],
        }
    }

    fn left(&self) -> Line<'a> {
        if let Some(notice) = &self.state.ui.notice {
            return Line::from(Span::styled(
                format!(" {}", notice.text),
                styles::notice(notice.level),
            ));
        }

        if !self.state.settings.ui.show_hints {
            return Line::default();
        }

        let mut spans = vec![Span::raw(" ")];
        for (key, label) in self.hints() {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {label}  "), styles::text_muted()));
        }
        Line::from(spans)
    }

    fn right(&self) -> Line<'a> {
        let labels: Vec<&str> = self.state.ui.in_flight.iter().map(|k| k.label()).collect();
        if labels.is_empty() {
            return Line::default();
        }
        Line::from(Span::styled(format!("⟳ {} ", labels.join(", ")), styles::busy()))
            .right_aligned()
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let right = self.right();
        let [left_area, right_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(right.width() as u16),
        ])
        .areas(area);

        Paragraph::new(self.left()).render(left_area, buf);
        Paragraph::new(right).render(right_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use suitehub_app::state::NoticeLevel;
    use suitehub_app::ProcedureKind;

    #[test]
    fn test_notice_replaces_hints() {
        let mut state = AppState::new();
        state.notify(NoticeLevel::Warning, "Select a suite first.");

        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&state), Rect::new(0, 0, 80, 1));

        assert!(term.buffer_contains("Select a suite first."));
        assert!(!term.buffer_contains("reload"));
    }

    #[test]
    fn test_hints_follow_focus() {
        let mut state = AppState::new();
        state.ui.focus = Panel::Catalog;

        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&state), Rect::new(0, 0, 80, 1));

        assert!(term.buffer_contains("save links"));
    }

    #[test]
    fn test_in_flight_procedures_listed() {
        let mut state = AppState::new();
        state.ui.in_flight.push(ProcedureKind::Simulate);

        let mut term = TestTerminal::with_size(120, 1);
        term.render_widget(StatusBar::new(&state), Rect::new(0, 0, 120, 1));

        assert!(term.buffer_contains("Running simulation"));
    }
}
