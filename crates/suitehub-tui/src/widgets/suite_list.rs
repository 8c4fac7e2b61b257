//! Suite list panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use suitehub_app::view::{SuiteEntry, SuiteListView};

use super::truncate_to_width;
use crate::theme::styles;

pub struct SuiteList<'a> {
    view: &'a SuiteListView,
    cursor: usize,
    focused: bool,
}

impl<'a> SuiteList<'a> {
    pub fn new(view: &'a SuiteListView, cursor: usize, focused: bool) -> Self {
        Self {
            view,
            cursor,
            focused,
        }
    }
}

fn entry_item(entry: &SuiteEntry, width: usize) -> ListItem<'_> {
    let marker = if entry.active { "● " } else { "  " };
    let name_style = if entry.active {
        styles::accent_bold()
    } else {
        styles::text_primary()
    };

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(marker, styles::accent()),
            Span::styled(truncate_to_width(&entry.name, width), name_style),
        ]),
        Line::from(Span::styled(
            format!(
                "  {} · {} modules · {}",
                entry.owner, entry.module_count, entry.total_cost
            ),
            styles::text_muted(),
        )),
    ])
}

impl Widget for SuiteList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!("Suites ({})", self.view.entries.len());
        let block = styles::titled_block(&title, self.focused);

        if self.view.entries.is_empty() {
            Paragraph::new(Span::styled(" No suites yet", styles::text_muted()))
                .block(block)
                .render(area, buf);
            return;
        }

        let highlight = if self.focused {
            styles::focused_selected()
        } else {
            styles::unfocused_selected()
        };
        // Borders plus the active marker
        let name_width = usize::from(area.width.saturating_sub(4));
        let list = List::new(
            self.view
                .entries
                .iter()
                .map(|entry| entry_item(entry, name_width)),
        )
            .block(block)
            .highlight_style(highlight);

        let mut state = ListState::default().with_selected(Some(self.cursor));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use suitehub_app::UiAction;
    use suitehub_core::SuiteId;

    fn entry(id: i64, name: &str, active: bool) -> SuiteEntry {
        SuiteEntry {
            id: SuiteId(id),
            name: name.into(),
            owner: "Ops".into(),
            module_count: 3,
            total_cost: "558.00 €/mo".into(),
            active,
            action: UiAction::SelectSuite(SuiteId(id)),
        }
    }

    #[test]
    fn test_lists_entries_with_metrics() {
        let view = SuiteListView {
            entries: vec![entry(2, "Growth", true), entry(1, "Finance", false)],
        };
        let mut term = TestTerminal::new();
        term.render_widget(SuiteList::new(&view, 0, true), Rect::new(0, 0, 40, 10));

        assert!(term.buffer_contains("Suites (2)"));
        assert!(term.buffer_contains("● Growth"));
        assert!(term.buffer_contains("Finance"));
        assert!(term.buffer_contains("3 modules · 558.00 €/mo"));
    }

    #[test]
    fn test_empty_list_message() {
        let mut term = TestTerminal::new();
        term.render_widget(
            SuiteList::new(&SuiteListView::default(), 0, false),
            Rect::new(0, 0, 40, 5),
        );
        assert!(term.buffer_contains("No suites yet"));
    }
}
