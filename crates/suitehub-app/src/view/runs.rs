//! Run history renderer

use serde::Serialize;

use suitehub_core::format;
use suitehub_core::{Run, RunId};

/// Shown when the active suite has no runs yet
pub const NO_RUNS_MESSAGE: &str = "No simulations for this suite yet.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunEntry {
    pub id: RunId,
    /// `OK` or the uppercased status label
    pub badge: String,
    pub ok: bool,
    pub timestamp: String,
    pub roi: String,
    pub effort: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "kind", content = "entries", rename_all = "snake_case")]
pub enum RunsView {
    /// No suite is active
    #[default]
    Hidden,
    Empty {
        message: String,
    },
    Entries(Vec<RunEntry>),
}

/// Runs in the order received; the server decides the order
pub fn render(runs: &[Run], has_active_suite: bool) -> RunsView {
    if !has_active_suite {
        return RunsView::Hidden;
    }

    if runs.is_empty() {
        return RunsView::Empty {
            message: NO_RUNS_MESSAGE.to_string(),
        };
    }

    RunsView::Entries(
        runs.iter()
            .map(|run| RunEntry {
                id: run.id,
                badge: format::status_badge(&run.status),
                ok: run.status.is_ok(),
                timestamp: format::timestamp(&run.created_at),
                roi: format::euros(run.summary.estimated_roi),
                effort: format::score(run.summary.integration_effort),
                recommendation: run.summary.recommendation.clone(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use suitehub_remote::test_utils::test_run;

    #[test]
    fn test_hidden_without_active_suite() {
        assert_eq!(render(&[test_run(1, "ok", 1.0)], false), RunsView::Hidden);
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(
            render(&[], true),
            RunsView::Empty {
                message: NO_RUNS_MESSAGE.into()
            }
        );
    }

    #[test]
    fn test_entries_keep_received_order() {
        let runs = vec![test_run(5, "warning", -20.0), test_run(9, "ok", 1234.5)];
        let RunsView::Entries(entries) = render(&runs, true) else {
            panic!("expected entries");
        };

        assert_eq!(entries[0].id, RunId(5));
        assert_eq!(entries[0].badge, "WARNING");
        assert!(!entries[0].ok);
        assert_eq!(entries[1].badge, "OK");
        assert_eq!(entries[1].roi, "1234.50 €");
        assert!(entries[1].timestamp.ends_with("UTC"));
    }
}
