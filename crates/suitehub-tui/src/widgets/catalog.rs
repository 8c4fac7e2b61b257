//! Module catalog table and the family filter bar above it

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use suitehub_app::view::{CatalogRow, CatalogView, FamilyFilterView};

use crate::theme::styles;

/// One-line family selector; the active option is highlighted
pub struct FamilyBar<'a> {
    view: &'a FamilyFilterView,
}

impl<'a> FamilyBar<'a> {
    pub fn new(view: &'a FamilyFilterView) -> Self {
        Self { view }
    }
}

impl Widget for FamilyBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(" Family: ", styles::text_muted())];
        for (i, option) in self.view.options.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", styles::text_muted()));
            }
            let style = if option.active {
                styles::focused_selected()
            } else if i == 0 {
                styles::text_secondary()
            } else {
                styles::family(i - 1)
            };
            spans.push(Span::styled(option.label.as_str(), style));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

pub struct CatalogTable<'a> {
    view: &'a CatalogView,
    cursor: usize,
    focused: bool,
}

impl<'a> CatalogTable<'a> {
    pub fn new(view: &'a CatalogView, cursor: usize, focused: bool) -> Self {
        Self {
            view,
            cursor,
            focused,
        }
    }
}

fn check_mark(row: &CatalogRow, linkable: bool) -> &'static str {
    match (linkable, row.checked, row.selected) {
        (false, _, _) => "   ",
        (true, true, true) => "[x]",
        // Checked but not saved yet
        (true, true, false) => "[+]",
        (true, false, true) => "[-]",
        (true, false, false) => "[ ]",
    }
}

fn catalog_row(row: &CatalogRow, linkable: bool) -> Row<'_> {
    let mark_style = if row.checked != row.selected {
        styles::keybinding()
    } else {
        styles::accent()
    };
    Row::new(vec![
        Cell::from(Span::styled(check_mark(row, linkable), mark_style)),
        Cell::from(Span::styled(row.name.as_str(), styles::text_primary())),
        Cell::from(Span::styled(row.family.as_str(), styles::text_secondary())),
        Cell::from(Span::styled(row.cost.as_str(), styles::text_primary())),
        Cell::from(Span::styled(row.value.to_string(), styles::text_primary())),
        Cell::from(Span::styled(row.complexity.to_string(), styles::text_primary())),
        Cell::from(Span::styled(row.maturity.as_str(), styles::text_muted())),
    ])
}

impl Widget for CatalogTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            "Catalog: {} ({}/{})",
            self.view.filter_label,
            self.view.rows.len(),
            self.view.total
        );
        let block = styles::titled_block(&title, self.focused);

        if self.view.rows.is_empty() {
            Paragraph::new(Span::styled(" No modules", styles::text_muted()))
                .block(block)
                .render(area, buf);
            return;
        }

        let header = Row::new(["", "Module", "Family", "Cost", "Value", "Cplx", "Maturity"])
            .style(styles::text_muted());
        let widths = [
            Constraint::Length(3),
            Constraint::Min(14),
            Constraint::Length(13),
            Constraint::Length(13),
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Length(9),
        ];
        let highlight = if self.focused {
            styles::focused_selected()
        } else {
            styles::unfocused_selected()
        };
        let linkable = self.view.linkable;
        let table = Table::new(self.view.rows.iter().map(|r| catalog_row(r, linkable)), widths)
            .header(header)
            .block(block)
            .row_highlight_style(highlight);

        let mut state = TableState::default().with_selected(Some(self.cursor));
        StatefulWidget::render(table, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use suitehub_app::state::FamilyFilter;
    use suitehub_app::view::FilterOption;
    use suitehub_core::ModuleId;

    fn row(id: i64, name: &str, selected: bool, checked: bool) -> CatalogRow {
        CatalogRow {
            id: ModuleId(id),
            name: name.into(),
            family: "marketing".into(),
            business_area: "Nous | marketing".into(),
            description: String::new(),
            cost: "149.00 €/mo".into(),
            value: 82,
            complexity: 44,
            maturity: "stable".into(),
            selected,
            checked,
        }
    }

    #[test]
    fn test_marks_distinguish_pending_changes() {
        assert_eq!(check_mark(&row(1, "A", true, true), true), "[x]");
        assert_eq!(check_mark(&row(1, "A", false, true), true), "[+]");
        assert_eq!(check_mark(&row(1, "A", true, false), true), "[-]");
        assert_eq!(check_mark(&row(1, "A", true, true), false), "   ");
    }

    #[test]
    fn test_table_title_counts_rows() {
        let view = CatalogView {
            filter_label: "marketing".into(),
            rows: vec![row(1, "SEO Advanced", true, true), row(2, "Web Analytics", false, false)],
            total: 6,
            linkable: true,
        };
        let mut term = TestTerminal::with_size(100, 10);
        term.render_widget(CatalogTable::new(&view, 0, true), Rect::new(0, 0, 100, 10));

        assert!(term.buffer_contains("Catalog: marketing (2/6)"));
        assert!(term.buffer_contains("SEO Advanced"));
        assert!(term.buffer_contains("[ ]"));
    }

    #[test]
    fn test_family_bar_lists_options() {
        let view = FamilyFilterView {
            options: vec![
                FilterOption {
                    label: "All families".into(),
                    filter: FamilyFilter::All,
                    active: true,
                },
                FilterOption {
                    label: "marketing".into(),
                    filter: FamilyFilter::Family("marketing".into()),
                    active: false,
                },
            ],
        };
        let mut term = TestTerminal::new();
        term.render_widget(FamilyBar::new(&view), Rect::new(0, 0, 80, 1));
        assert!(term.buffer_contains("All families │ marketing"));
    }
}
