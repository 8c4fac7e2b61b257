//! Run history of the active suite

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Cell, Paragraph, Row, Table, Widget},
};

use suitehub_app::view::{RunEntry, RunsView};

use crate::theme::styles;

pub struct RunHistory<'a> {
    view: &'a RunsView,
}

impl<'a> RunHistory<'a> {
    pub fn new(view: &'a RunsView) -> Self {
        Self { view }
    }
}

fn run_row(entry: &RunEntry) -> Row<'_> {
    Row::new(vec![
        Cell::from(Span::styled(entry.badge.as_str(), styles::run_badge(entry.ok))),
        Cell::from(Span::styled(entry.timestamp.as_str(), styles::text_secondary())),
        Cell::from(Span::styled(entry.roi.as_str(), styles::text_primary())),
        Cell::from(Span::styled(entry.effort.as_str(), styles::text_primary())),
        Cell::from(Span::styled(entry.recommendation.as_str(), styles::text_muted())),
    ])
}

impl Widget for RunHistory<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("Simulations", false);

        match self.view {
            RunsView::Hidden => block.render(area, buf),
            RunsView::Empty { message } => {
                Paragraph::new(Span::styled(message.as_str(), styles::text_muted()))
                    .block(block)
                    .render(area, buf);
            }
            RunsView::Entries(entries) => {
                let header = Row::new(["Status", "When", "ROI", "Effort", "Recommendation"])
                    .style(styles::text_muted());
                let widths = [
                    Constraint::Length(8),
                    Constraint::Length(20),
                    Constraint::Length(14),
                    Constraint::Length(7),
                    Constraint::Min(10),
                ];
                Table::new(entries.iter().map(run_row), widths)
                    .header(header)
                    .block(block)
                    .render(area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use suitehub_core::RunId;

    #[test]
    fn test_entries_render_badge_and_roi() {
        let view = RunsView::Entries(vec![RunEntry {
            id: RunId(7),
            badge: "OK".into(),
            ok: true,
            timestamp: "2024-05-01 09:40 UTC".into(),
            roi: "1520.00 €".into(),
            effort: "42.5".into(),
            recommendation: "Scale in phases.".into(),
        }]);
        let mut term = TestTerminal::with_size(100, 6);
        term.render_widget(RunHistory::new(&view), Rect::new(0, 0, 100, 6));

        assert!(term.buffer_contains("OK"));
        assert!(term.buffer_contains("1520.00 €"));
        assert!(term.buffer_contains("Scale in phases."));
    }

    #[test]
    fn test_empty_history_message() {
        let view = RunsView::Empty {
            message: "No simulations for this suite yet.".into(),
        };
        let mut term = TestTerminal::new();
        term.render_widget(RunHistory::new(&view), Rect::new(0, 0, 80, 6));
        assert!(term.buffer_contains("No simulations for this suite yet."));
    }
}
