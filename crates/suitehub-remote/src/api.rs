//! The remote operations the dashboard consumes

use suitehub_core::prelude::*;
use suitehub_core::{Catalog, ModuleId, NewSuite, Overview, Suite, SuiteBundle, SuiteId};

/// Access to the Suite Hub API
///
/// This is the only path by which remote data enters the application state.
/// Implementations return [`Error::Remote`] for failures reported by the
/// server and [`Error::Transport`] when the server could not be reached.
#[trait_variant::make(RemoteApi: Send)]
pub trait LocalRemoteApi {
    /// Aggregate counts plus the latest run
    async fn overview(&self) -> Result<Overview>;

    /// Full module catalog and its family labels
    async fn catalog(&self) -> Result<Catalog>;

    /// Suite summaries, newest first
    async fn suites(&self) -> Result<Vec<Suite>>;

    /// Detail and run history of one suite
    async fn suite_detail(&self, id: SuiteId) -> Result<SuiteBundle>;

    /// Create a suite, returning its id
    async fn create_suite(&self, suite: &NewSuite) -> Result<SuiteId>;

    /// Replace the membership of a suite with exactly `module_ids`
    async fn replace_modules(&self, id: SuiteId, module_ids: &[ModuleId]) -> Result<()>;

    /// Record a simulation run for a suite
    async fn simulate(&self, id: SuiteId) -> Result<()>;
}
