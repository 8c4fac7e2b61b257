//! Controller procedures
//!
//! Each procedure is a short sequence of awaited remote calls. Procedures
//! never touch [`AppState`](crate::state::AppState): they return a [`Refresh`]
//! describing the wholesale replacements to commit, so a failure at any step
//! leaves the state exactly as it was.

use serde::Serialize;

use suitehub_core::prelude::*;
use suitehub_core::{
    Catalog, ModuleId, NewSuite, Overview, Run, Suite, SuiteBundle, SuiteDetail, SuiteId,
};
use suitehub_remote::RemoteApi;

use crate::tracker::{RequestTracker, Resource, TicketSet};

/// Active suite id, detail and runs, always written together
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteSelection {
    pub id: SuiteId,
    pub detail: SuiteDetail,
    pub runs: Vec<Run>,
}

impl From<SuiteBundle> for SuiteSelection {
    fn from(bundle: SuiteBundle) -> Self {
        Self {
            id: bundle.detail.suite.id,
            detail: bundle.detail,
            runs: bundle.runs,
        }
    }
}

/// What happens to the active suite
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionChange {
    Select(Box<SuiteSelection>),
    Clear,
}

/// Wholesale replacements produced by one procedure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Refresh {
    pub overview: Option<Overview>,
    pub catalog: Option<Catalog>,
    pub suites: Option<Vec<Suite>>,
    pub selection: Option<SelectionChange>,
}

impl Refresh {
    pub fn is_empty(&self) -> bool {
        self.overview.is_none()
            && self.catalog.is_none()
            && self.suites.is_none()
            && self.selection.is_none()
    }
}

/// A procedure together with its inputs
#[derive(Debug, Clone, PartialEq)]
pub enum Procedure {
    Boot {
        auto_select_first: bool,
    },
    Reload {
        active: Option<SuiteId>,
        auto_select_first: bool,
    },
    SelectSuite {
        id: SuiteId,
    },
    CreateSuite {
        suite: NewSuite,
    },
    SaveLinks {
        id: SuiteId,
        module_ids: Vec<ModuleId>,
    },
    Simulate {
        id: SuiteId,
    },
}

/// Procedure identity without inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcedureKind {
    Boot,
    Reload,
    SelectSuite,
    CreateSuite,
    SaveLinks,
    Simulate,
}

impl ProcedureKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProcedureKind::Boot => "Loading dashboard",
            ProcedureKind::Reload => "Reloading",
            ProcedureKind::SelectSuite => "Loading suite",
            ProcedureKind::CreateSuite => "Creating suite",
            ProcedureKind::SaveLinks => "Saving module links",
            ProcedureKind::Simulate => "Running simulation",
        }
    }
}

impl Procedure {
    pub fn kind(&self) -> ProcedureKind {
        match self {
            Procedure::Boot { .. } => ProcedureKind::Boot,
            Procedure::Reload { .. } => ProcedureKind::Reload,
            Procedure::SelectSuite { .. } => ProcedureKind::SelectSuite,
            Procedure::CreateSuite { .. } => ProcedureKind::CreateSuite,
            Procedure::SaveLinks { .. } => ProcedureKind::SaveLinks,
            Procedure::Simulate { .. } => ProcedureKind::Simulate,
        }
    }

    /// Resources this procedure replaces
    pub fn writes(&self) -> &'static [Resource] {
        match self {
            Procedure::Boot { .. } | Procedure::Reload { .. } => {
                &[Resource::Overview, Resource::Catalog, Resource::SuiteList]
            }
            Procedure::SelectSuite { .. } => &[Resource::ActiveSuite],
            Procedure::CreateSuite { .. } => &[
                Resource::Overview,
                Resource::SuiteList,
                Resource::ActiveSuite,
            ],
            Procedure::SaveLinks { .. } => &[Resource::SuiteList, Resource::ActiveSuite],
            Procedure::Simulate { .. } => &[Resource::Overview, Resource::ActiveSuite],
        }
    }

    /// Resources this procedure may write without superseding other requests
    ///
    /// Loading the dashboard only reconciles the active suite against the new
    /// list, so a selection dispatched meanwhile takes precedence.
    pub fn observes(&self) -> &'static [Resource] {
        match self {
            Procedure::Boot { .. } | Procedure::Reload { .. } => &[Resource::ActiveSuite],
            _ => &[],
        }
    }

    /// Active suite a list-derived selection was reconciled against
    ///
    /// `None` when the procedure's selection does not depend on the list.
    pub fn selection_base(&self) -> Option<Option<SuiteId>> {
        match self {
            Procedure::Boot { .. } => Some(None),
            Procedure::Reload { active, .. } => Some(*active),
            _ => None,
        }
    }

    /// Issue or observe the tickets this procedure needs
    pub fn claim(&self, tracker: &mut RequestTracker) -> TicketSet {
        let issued = self
            .writes()
            .iter()
            .fold(TicketSet::new(), |set, r| set.with(tracker.issue(*r)));
        self.observes()
            .iter()
            .fold(issued, |set, r| set.with(tracker.observe(*r)))
    }
}

/// Run a procedure to completion against `remote`
pub async fn run<R: RemoteApi + Sync>(remote: &R, procedure: &Procedure) -> Result<Refresh> {
    match procedure {
        Procedure::Boot { auto_select_first } => load_dashboard(remote, None, *auto_select_first).await,
        Procedure::Reload {
            active,
            auto_select_first,
        } => load_dashboard(remote, *active, *auto_select_first).await,
        Procedure::SelectSuite { id } => select_suite(remote, *id).await,
        Procedure::CreateSuite { suite } => create_suite(remote, suite).await,
        Procedure::SaveLinks { id, module_ids } => save_links(remote, *id, module_ids).await,
        Procedure::Simulate { id } => simulate(remote, *id).await,
    }
}

/// Overview, catalog and suite list, then reconcile the active suite
///
/// The active suite is kept when it is still listed. Otherwise the first
/// suite is selected (when `auto_select_first`) or the selection is cleared.
pub async fn load_dashboard<R: RemoteApi + Sync>(
    remote: &R,
    active: Option<SuiteId>,
    auto_select_first: bool,
) -> Result<Refresh> {
    let overview = remote.overview().await.context("loading overview")?;
    let catalog = remote.catalog().await.context("loading catalog")?;
    let suites = remote.suites().await.context("loading suite list")?;

    let still_listed = active.is_some_and(|id| suites.iter().any(|s| s.id == id));
    let selection = if still_listed {
        None
    } else {
        match suites.first() {
            Some(first) if auto_select_first => {
                let bundle = remote
                    .suite_detail(first.id)
                    .await
                    .with_context(|| format!("loading suite {}", first.id))?;
                Some(SelectionChange::Select(Box::new(bundle.into())))
            }
            _ if active.is_some() => Some(SelectionChange::Clear),
            _ => None,
        }
    };

    Ok(Refresh {
        overview: Some(overview),
        catalog: Some(catalog),
        suites: Some(suites),
        selection,
    })
}

/// Fetch detail and runs of one suite
pub async fn select_suite<R: RemoteApi + Sync>(remote: &R, id: SuiteId) -> Result<Refresh> {
    let bundle = remote
        .suite_detail(id)
        .await
        .with_context(|| format!("loading suite {id}"))?;

    Ok(Refresh {
        selection: Some(SelectionChange::Select(Box::new(bundle.into()))),
        ..Default::default()
    })
}

/// Create a suite, then reload the list, select the new suite and refresh
/// the overview
pub async fn create_suite<R: RemoteApi + Sync>(remote: &R, suite: &NewSuite) -> Result<Refresh> {
    let id = remote
        .create_suite(suite)
        .await
        .context("creating suite")?;
    info!("Created suite {} ({})", id, suite.name);

    let suites = remote.suites().await.context("loading suite list")?;
    let bundle = remote
        .suite_detail(id)
        .await
        .with_context(|| format!("loading suite {id}"))?;
    let overview = remote.overview().await.context("loading overview")?;

    Ok(Refresh {
        overview: Some(overview),
        suites: Some(suites),
        selection: Some(SelectionChange::Select(Box::new(bundle.into()))),
        ..Default::default()
    })
}

/// Replace the suite's membership with `module_ids`, then reload its detail
/// and the suite list
pub async fn save_links<R: RemoteApi + Sync>(
    remote: &R,
    id: SuiteId,
    module_ids: &[ModuleId],
) -> Result<Refresh> {
    remote
        .replace_modules(id, module_ids)
        .await
        .with_context(|| format!("saving modules of suite {id}"))?;

    let bundle = remote
        .suite_detail(id)
        .await
        .with_context(|| format!("loading suite {id}"))?;
    let suites = remote.suites().await.context("loading suite list")?;

    Ok(Refresh {
        suites: Some(suites),
        selection: Some(SelectionChange::Select(Box::new(bundle.into()))),
        ..Default::default()
    })
}

/// Record a simulation run, then reload the suite detail and the overview
pub async fn simulate<R: RemoteApi + Sync>(remote: &R, id: SuiteId) -> Result<Refresh> {
    remote
        .simulate(id)
        .await
        .with_context(|| format!("simulating suite {id}"))?;

    let bundle = remote
        .suite_detail(id)
        .await
        .with_context(|| format!("loading suite {id}"))?;
    let overview = remote.overview().await.context("loading overview")?;

    Ok(Refresh {
        overview: Some(overview),
        selection: Some(SelectionChange::Select(Box::new(bundle.into()))),
        ..Default::default()
    })
}
