//! Suite list renderer

use serde::Serialize;

use suitehub_core::format;
use suitehub_core::{Suite, SuiteId};

use crate::handler::bindings::UiAction;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuiteEntry {
    pub id: SuiteId,
    pub name: String,
    pub owner: String,
    pub module_count: u32,
    /// Formatted monthly cost of all members
    pub total_cost: String,
    pub active: bool,
    /// Action dispatched when the entry is chosen
    pub action: UiAction,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SuiteListView {
    pub entries: Vec<SuiteEntry>,
}

impl SuiteListView {
    pub fn active_index(&self) -> Option<usize> {
        self.entries.iter().position(|e| e.active)
    }
}

pub fn render(suites: &[Suite], current: Option<SuiteId>) -> SuiteListView {
    let entries = suites
        .iter()
        .map(|s| SuiteEntry {
            id: s.id,
            name: s.name.clone(),
            owner: s.owner.clone(),
            module_count: s.metrics.module_count,
            total_cost: format::money(s.metrics.total_cost),
            active: current == Some(s.id),
            action: UiAction::SelectSuite(s.id),
        })
        .collect();

    SuiteListView { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suitehub_core::SuiteMetrics;

    fn suite(id: i64, modules: u32, cost: f64) -> Suite {
        Suite {
            id: SuiteId(id),
            name: format!("Suite {id}"),
            owner: "Ops".into(),
            mission: "Mission".into(),
            created_at: None,
            updated_at: None,
            metrics: SuiteMetrics {
                module_count: modules,
                total_cost: cost,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_marks_current_suite_active() {
        let view = render(&[suite(2, 1, 10.0), suite(1, 0, 0.0)], Some(SuiteId(1)));
        assert_eq!(view.active_index(), Some(1));
        assert_eq!(view.entries[0].action, UiAction::SelectSuite(SuiteId(2)));
    }

    #[test]
    fn test_no_active_entry_without_selection() {
        let view = render(&[suite(1, 0, 0.0)], None);
        assert_eq!(view.active_index(), None);
    }

    #[test]
    fn test_entry_carries_summary_metrics() {
        let view = render(&[suite(4, 3, 588.0)], None);
        assert_eq!(view.entries[0].module_count, 3);
        assert_eq!(view.entries[0].total_cost, "588.00 €/mo");
    }
}
