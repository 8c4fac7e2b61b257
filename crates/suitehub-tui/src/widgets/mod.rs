//! Custom widget components

mod catalog;
mod detail;
mod header;
mod runs;
mod status_bar;
mod suite_form;
mod suite_list;

pub use catalog::{CatalogTable, FamilyBar};
pub use detail::SuiteDetailPanel;
pub use header::DashboardHeader;
pub use runs::RunHistory;
pub use status_bar::StatusBar;
pub use suite_form::SuiteFormPanel;
pub use suite_list::SuiteList;

/// Cut `text` to at most `max_width` terminal columns, ending in `…` when cut
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
