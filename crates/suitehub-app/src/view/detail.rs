//! Suite detail renderer
//!
//! Produces either the placeholder or the panel, never both.

use serde::Serialize;

use suitehub_core::format;
use suitehub_core::{SuiteDetail, SuiteId};

/// Placeholder text when suites exist but none is selected
pub const SELECT_PROMPT: &str = "Select a suite to see its detail.";

/// Placeholder text when there are no suites at all
pub const EMPTY_PROMPT: &str = "No suites yet. Create one to get started.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailPanel {
    pub id: SuiteId,
    pub name: String,
    pub owner: String,
    pub mission: String,
    pub module_count: u32,
    pub total_cost: String,
    pub total_value: i64,
    pub avg_complexity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailView {
    Placeholder { text: String },
    Panel(DetailPanel),
}

impl Default for DetailView {
    fn default() -> Self {
        DetailView::Placeholder {
            text: SELECT_PROMPT.to_string(),
        }
    }
}

impl DetailView {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, DetailView::Placeholder { .. })
    }

    pub fn panel(&self) -> Option<&DetailPanel> {
        match self {
            DetailView::Panel(panel) => Some(panel),
            DetailView::Placeholder { .. } => None,
        }
    }
}

pub fn render(
    detail: Option<&SuiteDetail>,
    boot_error: Option<&str>,
    has_suites: bool,
) -> DetailView {
    if let Some(message) = boot_error {
        return DetailView::Placeholder {
            text: format!("Failed to load: {message}"),
        };
    }

    let Some(detail) = detail else {
        let text = if has_suites { SELECT_PROMPT } else { EMPTY_PROMPT };
        return DetailView::Placeholder {
            text: text.to_string(),
        };
    };

    DetailView::Panel(DetailPanel {
        id: detail.suite.id,
        name: detail.suite.name.clone(),
        owner: detail.suite.owner.clone(),
        mission: detail.suite.mission.clone(),
        module_count: detail.metrics.module_count,
        total_cost: format::money(detail.metrics.total_cost),
        total_value: detail.metrics.total_value,
        avg_complexity: format::score(detail.metrics.avg_complexity),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use suitehub_core::{SuiteInfo, SuiteMetrics};

    fn detail() -> SuiteDetail {
        SuiteDetail {
            suite: SuiteInfo {
                id: SuiteId(3),
                name: "Growth".into(),
                owner: "DAM2 Team".into(),
                mission: "Expand".into(),
            },
            metrics: SuiteMetrics {
                module_count: 2,
                total_cost: 268.0,
                total_value: 160,
                avg_complexity: 40.5,
            },
            modules: Vec::new(),
        }
    }

    #[test]
    fn test_placeholder_without_selection() {
        let view = render(None, None, true);
        assert_eq!(
            view,
            DetailView::Placeholder {
                text: SELECT_PROMPT.into()
            }
        );
        assert!(render(None, None, false).is_placeholder());
    }

    #[test]
    fn test_panel_with_selection() {
        let view = render(Some(&detail()), None, true);
        let panel = view.panel().unwrap();
        assert_eq!(panel.name, "Growth");
        assert_eq!(panel.total_cost, "268.00 €/mo");
        assert_eq!(panel.avg_complexity, "40.5");
        assert!(!view.is_placeholder());
    }

    #[test]
    fn test_boot_error_replaces_content() {
        let view = render(None, Some("Could not reach the Suite Hub API"), false);
        assert_eq!(
            view,
            DetailView::Placeholder {
                text: "Failed to load: Could not reach the Suite Hub API".into()
            }
        );
    }
}
