//! New-suite form

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use suitehub_app::state::{FormField, SuiteForm};

use crate::theme::styles;

const FIELDS: [FormField; 3] = [FormField::Name, FormField::Owner, FormField::Mission];

pub struct SuiteFormPanel<'a> {
    form: &'a SuiteForm,
    focused: bool,
    /// Shown greyed out while the owner field is empty
    default_owner: &'a str,
}

impl<'a> SuiteFormPanel<'a> {
    pub fn new(form: &'a SuiteForm, focused: bool, default_owner: &'a str) -> Self {
        Self {
            form,
            focused,
            default_owner,
        }
    }

    fn field_line(&self, field: FormField) -> Line<'a> {
        let active = self.focused && self.form.field == field;
        let value = self.form.value(field);
        let label_style = if active {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };

        let mut spans = vec![Span::styled(format!(" {:<8}", field.label()), label_style)];
        if value.is_empty() && field == FormField::Owner {
            spans.push(Span::styled(self.default_owner, styles::text_muted()));
        } else {
            spans.push(Span::styled(value.to_string(), styles::input(active)));
        }
        if active {
            spans.push(Span::styled("▏", styles::accent()));
        }
        Line::from(spans)
    }
}

impl Widget for SuiteFormPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("New suite", self.focused);
        let lines: Vec<Line> = FIELDS.iter().map(|f| self.field_line(*f)).collect();
        Paragraph::new(lines).block(block).render(area, buf);
    }
}
