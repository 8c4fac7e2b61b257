//! Header bar with the app title and KPI counters

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use suitehub_app::view::KpiView;

use crate::theme::styles;

/// Title on the left, KPIs right-aligned
pub struct DashboardHeader<'a> {
    kpis: &'a KpiView,
}

impl<'a> DashboardHeader<'a> {
    pub fn new(kpis: &'a KpiView) -> Self {
        Self { kpis }
    }

    fn kpi_spans(&self) -> Vec<Span<'a>> {
        if !self.kpis.loaded {
            return vec![Span::styled("loading…", styles::text_muted())];
        }

        let mut spans = vec![
            kpi("Modules", self.kpis.modules.to_string()),
            Span::raw("  "),
            kpi("Suites", self.kpis.suites.to_string()),
            Span::raw("  "),
            kpi("Runs", self.kpis.runs.to_string()),
        ];
        if let Some(roi) = &self.kpis.last_roi {
            spans.push(Span::raw("  "));
            spans.push(kpi("Last ROI", roi.clone()));
        }
        spans
    }
}

fn kpi(label: &'static str, value: String) -> Span<'static> {
    Span::styled(format!("{label} {value}"), styles::text_primary())
}

impl Widget for DashboardHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled("Suite Hub", styles::accent_bold()),
        ]);
        let kpis = Line::from(self.kpi_spans()).right_aligned();

        let [title_area, kpi_area] = Layout::horizontal([
            Constraint::Length(title.width() as u16),
            Constraint::Min(0),
        ])
        .areas(inner);

        Paragraph::new(title).render(title_area, buf);
        if kpis.width() as u16 <= kpi_area.width {
            Paragraph::new(kpis).render(kpi_area, buf);
        }
    }
}
