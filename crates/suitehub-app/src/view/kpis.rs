//! KPI renderer: aggregate counts from the overview payload

use serde::Serialize;

use suitehub_core::format;
use suitehub_core::Overview;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KpiView {
    /// False until the first overview arrives
    pub loaded: bool,
    pub modules: u32,
    pub suites: u32,
    pub runs: u32,
    /// ROI of the most recent run across all suites
    pub last_roi: Option<String>,
}

pub fn render(overview: Option<&Overview>) -> KpiView {
    let Some(overview) = overview else {
        return KpiView::default();
    };

    KpiView {
        loaded: true,
        modules: overview.modules,
        suites: overview.suites,
        runs: overview.runs,
        last_roi: overview
            .last_run
            .as_ref()
            .map(|run| format::euros(run.summary.estimated_roi)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use suitehub_core::{LastRun, RunSummary};

    #[test]
    fn test_counts_come_from_overview() {
        let view = render(Some(&Overview {
            modules: 12,
            suites: 3,
            runs: 7,
            last_run: Some(LastRun {
                created_at: Utc::now(),
                summary: RunSummary {
                    estimated_roi: 1234.5,
                    ..Default::default()
                },
            }),
        }));

        assert!(view.loaded);
        assert_eq!((view.modules, view.suites, view.runs), (12, 3, 7));
        assert_eq!(view.last_roi.as_deref(), Some("1234.50 €"));
    }

    #[test]
    fn test_not_loaded_without_overview() {
        assert_eq!(render(None), KpiView::default());
    }
}
