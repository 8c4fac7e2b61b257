//! Active suite detail panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use suitehub_app::view::{DetailPanel, DetailView};

use crate::theme::styles;

pub struct SuiteDetailPanel<'a> {
    view: &'a DetailView,
}

impl<'a> SuiteDetailPanel<'a> {
    pub fn new(view: &'a DetailView) -> Self {
        Self { view }
    }
}

fn panel_lines(panel: &DetailPanel) -> Vec<Line<'_>> {
    vec![
        Line::from(vec![
            Span::styled(panel.name.as_str(), styles::accent_bold()),
            Span::styled(format!("  by {}", panel.owner), styles::text_secondary()),
        ]),
        Line::from(Span::styled(panel.mission.as_str(), styles::text_primary())),
        Line::from(vec![
            Span::styled("Modules ", styles::text_muted()),
            Span::styled(panel.module_count.to_string(), styles::text_primary()),
            Span::styled("  Cost ", styles::text_muted()),
            Span::styled(panel.total_cost.as_str(), styles::text_primary()),
            Span::styled("  Value ", styles::text_muted()),
            Span::styled(panel.total_value.to_string(), styles::text_primary()),
            Span::styled("  Complexity ", styles::text_muted()),
            Span::styled(panel.avg_complexity.as_str(), styles::text_primary()),
        ]),
    ]
}

impl Widget for SuiteDetailPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("Detail", false);

        let paragraph = match self.view {
            DetailView::Placeholder { text } => {
                Paragraph::new(Span::styled(text.as_str(), styles::text_muted()))
            }
            DetailView::Panel(panel) => Paragraph::new(panel_lines(panel)),
        };

        paragraph
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
