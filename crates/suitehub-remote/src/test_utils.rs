//! In-memory Suite Hub API for tests
//!
//! [`FakeRemote`] mirrors the observable behavior of the real service: owner
//! fallback, replace-all membership, aggregate metrics, overview counts and a
//! newest-first run history capped at eight entries. Failures can be injected
//! per operation and every call is recorded.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};

use suitehub_core::prelude::*;
use suitehub_core::{
    Catalog, LastRun, Module, ModuleId, NewSuite, Overview, Run, RunId, RunStatus, RunSummary,
    Suite, SuiteBundle, SuiteDetail, SuiteId, SuiteInfo, SuiteMetrics,
};

use crate::api::RemoteApi;

/// Owner label the fake server assigns when the request leaves it blank
pub const SERVER_DEFAULT_OWNER: &str = "DAM2 Team";

/// Maximum runs returned with a suite detail
pub const RUN_HISTORY_LIMIT: usize = 8;

/// Identifies one remote operation for failure injection and call logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Overview,
    Catalog,
    Suites,
    SuiteDetail,
    CreateSuite,
    ReplaceModules,
    Simulate,
}

/// One recorded call
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub operation: Operation,
    pub suite: Option<SuiteId>,
}

#[derive(Debug, Clone)]
struct StoredSuite {
    info: SuiteInfo,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    members: BTreeSet<ModuleId>,
}

#[derive(Debug, Clone)]
struct StoredRun {
    suite: SuiteId,
    run: Run,
}

#[derive(Debug, Default)]
struct FakeState {
    modules: Vec<Module>,
    suites: Vec<StoredSuite>,
    runs: Vec<StoredRun>,
    next_suite_id: i64,
    next_run_id: i64,
    clock: i64,
    failures: HashMap<Operation, Option<String>>,
    detail_delays: HashMap<SuiteId, Duration>,
    calls: Vec<RecordedCall>,
}

impl FakeState {
    fn tick(&mut self) -> DateTime<Utc> {
        self.clock += 1;
        Utc.timestamp_opt(1_714_556_400 + self.clock * 60, 0)
            .single()
            .unwrap_or_default()
    }

    fn record(&mut self, operation: Operation, suite: Option<SuiteId>) -> Result<()> {
        self.calls.push(RecordedCall { operation, suite });
        match self.failures.remove(&operation) {
            Some(message) => Err(Error::remote(message)),
            None => Ok(()),
        }
    }

    fn find_suite(&self, id: SuiteId) -> Result<&StoredSuite> {
        self.suites
            .iter()
            .find(|s| s.info.id == id)
            .ok_or_else(|| Error::remote(Some("Suite not found")))
    }

    fn members_of(&self, suite: &StoredSuite) -> Vec<Module> {
        let mut members: Vec<Module> = self
            .modules
            .iter()
            .filter(|m| suite.members.contains(&m.id))
            .cloned()
            .map(|mut m| {
                m.role = Some("core".to_string());
                m
            })
            .collect();
        members.sort_by(|a, b| (&a.family, &a.name).cmp(&(&b.family, &b.name)));
        members
    }

    fn metrics_of(members: &[Module]) -> SuiteMetrics {
        let total_cost = members.iter().map(|m| m.monthly_cost).sum::<f64>();
        let total_value = members.iter().map(|m| m.value_score).sum();
        let avg_complexity = if members.is_empty() {
            0.0
        } else {
            members.iter().map(|m| m.complexity_score).sum::<i64>() as f64 / members.len() as f64
        };
        SuiteMetrics {
            module_count: members.len() as u32,
            total_cost: round2(total_cost),
            total_value,
            avg_complexity: round2(avg_complexity),
        }
    }

    fn detail_of(&self, id: SuiteId) -> Result<SuiteDetail> {
        let suite = self.find_suite(id)?;
        let modules = self.members_of(suite);
        Ok(SuiteDetail {
            suite: suite.info.clone(),
            metrics: Self::metrics_of(&modules),
            modules,
        })
    }

    fn simulate(&mut self, id: SuiteId) -> Result<RunSummary> {
        let detail = self.detail_of(id)?;
        let families: BTreeSet<String> =
            detail.modules.iter().map(|m| m.family.clone()).collect();
        let count = detail.modules.len() as f64;
        let metrics = &detail.metrics;

        let synergy = ((families.len() as f64 - 1.0) * 8.0).max(0.0);
        let effort = round2(metrics.avg_complexity * count - synergy);
        let annual_cost = round2(metrics.total_cost * 12.0);
        let annual_value = round2(metrics.total_value as f64 * 120.0);
        let roi = round2(annual_value - annual_cost - effort * 15.0);
        let status = if roi >= 0.0 {
            RunStatus::Ok
        } else {
            RunStatus::Other("warning".to_string())
        };
        let recommendation = if status.is_ok() {
            "Positive return; the suite can scale in phases."
        } else {
            "Simplify the suite or cut cost before rolling it out."
        };

        let summary = RunSummary {
            estimated_roi: roi,
            integration_effort: effort,
            recommendation: recommendation.to_string(),
            annual_cost: Some(annual_cost),
            annual_estimated_value: Some(annual_value),
            families: families.into_iter().collect(),
            module_count: Some(detail.modules.len() as u32),
        };

        self.next_run_id += 1;
        let created_at = self.tick();
        self.runs.push(StoredRun {
            suite: id,
            run: Run {
                id: RunId(self.next_run_id),
                status,
                created_at,
                summary: summary.clone(),
            },
        });
        Ok(summary)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// In-memory implementation of [`RemoteApi`]
#[derive(Debug, Default)]
pub struct FakeRemote {
    state: Mutex<FakeState>,
}

impl FakeRemote {
    /// Empty server: no modules, no suites
    pub fn new() -> Self {
        Self::default()
    }

    /// Server seeded with a small catalog across three families
    pub fn seeded() -> Self {
        Self::with_modules(sample_catalog())
    }

    pub fn with_modules(modules: Vec<Module>) -> Self {
        let fake = Self::new();
        fake.lock().modules = modules;
        fake
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace the whole catalog (simulates server-side catalog edits)
    pub fn set_modules(&self, modules: Vec<Module>) {
        self.lock().modules = modules;
    }

    /// Insert a suite directly, bypassing the create call log
    pub fn insert_suite(&self, name: &str, owner: &str, mission: &str, members: &[i64]) -> SuiteId {
        let mut state = self.lock();
        state.next_suite_id += 1;
        let id = SuiteId(state.next_suite_id);
        let now = state.tick();
        state.suites.push(StoredSuite {
            info: SuiteInfo {
                id,
                name: name.to_string(),
                owner: owner.to_string(),
                mission: mission.to_string(),
            },
            created_at: now,
            updated_at: now,
            members: members.iter().copied().map(ModuleId).collect(),
        });
        id
    }

    /// Delete a suite directly (simulates another client removing it)
    pub fn remove_suite(&self, id: SuiteId) {
        let mut state = self.lock();
        state.suites.retain(|s| s.info.id != id);
        state.runs.retain(|r| r.suite != id);
    }

    /// Make the next call of `operation` fail with `message`
    /// (`None` yields the generic remote error)
    pub fn fail_next(&self, operation: Operation, message: Option<&str>) {
        self.lock()
            .failures
            .insert(operation, message.map(str::to_string));
    }

    /// Delay every detail response for `id`
    pub fn delay_detail(&self, id: SuiteId, delay: Duration) {
        self.lock().detail_delays.insert(id, delay);
    }

    /// All calls so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    /// Number of calls of `operation` so far
    pub fn call_count(&self, operation: Operation) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|c| c.operation == operation)
            .count()
    }

    /// Current membership of a suite
    pub fn members(&self, id: SuiteId) -> Vec<ModuleId> {
        let state = self.lock();
        state
            .suites
            .iter()
            .find(|s| s.info.id == id)
            .map(|s| s.members.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Total runs recorded across all suites
    pub fn run_count(&self) -> usize {
        self.lock().runs.len()
    }

    fn detail_delay(&self, id: SuiteId) -> Option<Duration> {
        self.lock().detail_delays.get(&id).copied()
    }
}

impl RemoteApi for FakeRemote {
    async fn overview(&self) -> Result<Overview> {
        let mut state = self.lock();
        state.record(Operation::Overview, None)?;
        let last_run = state.runs.last().map(|r| LastRun {
            created_at: r.run.created_at,
            summary: r.run.summary.clone(),
        });
        Ok(Overview {
            modules: state.modules.len() as u32,
            suites: state.suites.len() as u32,
            runs: state.runs.len() as u32,
            last_run,
        })
    }

    async fn catalog(&self) -> Result<Catalog> {
        let mut state = self.lock();
        state.record(Operation::Catalog, None)?;
        let mut modules = state.modules.clone();
        modules.sort_by(|a, b| (&a.family, &a.name).cmp(&(&b.family, &b.name)));
        let families: BTreeSet<String> = modules.iter().map(|m| m.family.clone()).collect();
        Ok(Catalog {
            modules,
            families: families.into_iter().collect(),
        })
    }

    async fn suites(&self) -> Result<Vec<Suite>> {
        let mut state = self.lock();
        state.record(Operation::Suites, None)?;
        let mut items: Vec<Suite> = state
            .suites
            .iter()
            .map(|s| {
                let members = state.members_of(s);
                Suite {
                    id: s.info.id,
                    name: s.info.name.clone(),
                    owner: s.info.owner.clone(),
                    mission: s.info.mission.clone(),
                    created_at: Some(s.created_at),
                    updated_at: Some(s.updated_at),
                    metrics: FakeState::metrics_of(&members),
                }
            })
            .collect();
        items.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(items)
    }

    async fn suite_detail(&self, id: SuiteId) -> Result<SuiteBundle> {
        if let Some(delay) = self.detail_delay(id) {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.lock();
        state.record(Operation::SuiteDetail, Some(id))?;
        let detail = state.detail_of(id)?;
        let runs = state
            .runs
            .iter()
            .rev()
            .filter(|r| r.suite == id)
            .take(RUN_HISTORY_LIMIT)
            .map(|r| r.run.clone())
            .collect();
        Ok(SuiteBundle { detail, runs })
    }

    async fn create_suite(&self, suite: &NewSuite) -> Result<SuiteId> {
        let mut state = self.lock();
        state.record(Operation::CreateSuite, None)?;

        let name = suite.name.trim();
        let mission = suite.mission.trim();
        if name.is_empty() || mission.is_empty() {
            return Err(Error::remote(Some("Name and mission are required")));
        }
        let owner = match suite.owner.trim() {
            "" => SERVER_DEFAULT_OWNER,
            owner => owner,
        };

        state.next_suite_id += 1;
        let id = SuiteId(state.next_suite_id);
        let now = state.tick();
        state.suites.push(StoredSuite {
            info: SuiteInfo {
                id,
                name: name.to_string(),
                owner: owner.to_string(),
                mission: mission.to_string(),
            },
            created_at: now,
            updated_at: now,
            members: BTreeSet::new(),
        });
        Ok(id)
    }

    async fn replace_modules(&self, id: SuiteId, module_ids: &[ModuleId]) -> Result<()> {
        let mut state = self.lock();
        state.record(Operation::ReplaceModules, Some(id))?;
        state.find_suite(id)?;

        let known: BTreeSet<ModuleId> = state.modules.iter().map(|m| m.id).collect();
        let members: BTreeSet<ModuleId> = module_ids
            .iter()
            .copied()
            .filter(|m| known.contains(m))
            .collect();
        let now = state.tick();
        if let Some(suite) = state.suites.iter_mut().find(|s| s.info.id == id) {
            suite.members = members;
            suite.updated_at = now;
        }
        Ok(())
    }

    async fn simulate(&self, id: SuiteId) -> Result<()> {
        let mut state = self.lock();
        state.record(Operation::Simulate, Some(id))?;
        state.simulate(id).map(|_| ())
    }
}

// ─────────────────────────────────────────────────────────
// Builders
// ─────────────────────────────────────────────────────────

/// Creates a catalog module with plausible defaults
pub fn test_module(id: i64, name: &str, family: &str) -> Module {
    test_module_full(id, name, family, 100.0, 50, 40)
}

/// Creates a catalog module with explicit cost/value/complexity
pub fn test_module_full(
    id: i64,
    name: &str,
    family: &str,
    monthly_cost: f64,
    value_score: i64,
    complexity_score: i64,
) -> Module {
    Module {
        id: ModuleId(id),
        name: name.to_string(),
        family: family.to_string(),
        business_area: format!("Nous | {family}"),
        color_code: "steelblue".to_string(),
        description: format!("{name} module"),
        monthly_cost,
        value_score,
        complexity_score,
        maturity: "stable".to_string(),
        role: None,
    }
}

/// Six modules across the `marketing`, `management` and `intelligence` families
pub fn sample_catalog() -> Vec<Module> {
    vec![
        test_module_full(1, "SEO Advanced", "marketing", 149.0, 82, 44),
        test_module_full(2, "Web Analytics", "marketing", 119.0, 78, 37),
        test_module_full(3, "ERP Core", "management", 320.0, 91, 67),
        test_module_full(4, "Invoicing", "management", 89.0, 64, 28),
        test_module_full(5, "BI Dashboards", "intelligence", 210.0, 88, 58),
        test_module_full(6, "Forecasting", "intelligence", 175.0, 73, 61),
    ]
}

/// Creates a run with the given status and ROI
pub fn test_run(id: i64, status: &str, roi: f64) -> Run {
    Run {
        id: RunId(id),
        status: RunStatus::from(status.to_string()),
        created_at: Utc
            .timestamp_opt(1_714_556_400 + id * 60, 0)
            .single()
            .unwrap_or_default(),
        summary: RunSummary {
            estimated_roi: roi,
            integration_effort: 42.5,
            recommendation: "Scale in phases.".to_string(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_suite_applies_owner_fallback() {
        let fake = FakeRemote::seeded();
        let id = fake
            .create_suite(&NewSuite {
                name: " Growth ".into(),
                owner: "  ".into(),
                mission: "Expand".into(),
            })
            .await
            .unwrap();

        let bundle = fake.suite_detail(id).await.unwrap();
        assert_eq!(bundle.detail.suite.name, "Growth");
        assert_eq!(bundle.detail.suite.owner, SERVER_DEFAULT_OWNER);
        assert_eq!(bundle.detail.metrics.module_count, 0);
        assert!(bundle.runs.is_empty());
    }

    #[tokio::test]
    async fn test_replace_modules_is_replace_all() {
        let fake = FakeRemote::seeded();
        let id = fake.insert_suite("Suite", "Ops", "Mission", &[2, 4]);

        fake.replace_modules(id, &[ModuleId(1), ModuleId(3), ModuleId(3)])
            .await
            .unwrap();

        assert_eq!(fake.members(id), vec![ModuleId(1), ModuleId(3)]);
        let detail = fake.suite_detail(id).await.unwrap().detail;
        assert_eq!(detail.metrics.module_count, 2);
        assert_eq!(detail.metrics.total_cost, 469.0);
    }

    #[tokio::test]
    async fn test_suites_are_newest_first() {
        let fake = FakeRemote::seeded();
        let first = fake.insert_suite("A", "Ops", "M", &[]);
        let second = fake.insert_suite("B", "Ops", "M", &[1]);

        let items = fake.suites().await.unwrap();
        assert_eq!(items[0].id, second);
        assert_eq!(items[1].id, first);
        assert_eq!(items[0].metrics.module_count, 1);
    }

    #[tokio::test]
    async fn test_simulate_records_run_even_for_empty_suite() {
        let fake = FakeRemote::seeded();
        let id = fake.insert_suite("Empty", "Ops", "M", &[]);

        fake.simulate(id).await.unwrap();

        assert_eq!(fake.overview().await.unwrap().runs, 1);
        assert_eq!(fake.suite_detail(id).await.unwrap().runs.len(), 1);
    }

    #[tokio::test]
    async fn test_run_history_newest_first_and_capped() {
        let fake = FakeRemote::seeded();
        let id = fake.insert_suite("Suite", "Ops", "M", &[1, 3]);
        for _ in 0..10 {
            fake.simulate(id).await.unwrap();
        }

        let runs = fake.suite_detail(id).await.unwrap().runs;
        assert_eq!(runs.len(), RUN_HISTORY_LIMIT);
        assert_eq!(runs[0].id, RunId(10));
        assert!(runs[0].created_at > runs[1].created_at);
    }

    #[tokio::test]
    async fn test_fail_next_only_fails_once() {
        let fake = FakeRemote::seeded();
        fake.fail_next(Operation::Catalog, Some("catalog offline"));

        let err = fake.catalog().await.unwrap_err();
        assert_eq!(err.to_string(), "catalog offline");
        assert!(fake.catalog().await.is_ok());
        assert_eq!(fake.call_count(Operation::Catalog), 2);
    }

    #[tokio::test]
    async fn test_unknown_suite_is_remote_error() {
        let fake = FakeRemote::seeded();
        let err = fake.suite_detail(SuiteId(99)).await.unwrap_err();
        assert_eq!(err.to_string(), "Suite not found");
    }

    #[tokio::test]
    async fn test_catalog_lists_distinct_families() {
        let fake = FakeRemote::seeded();
        let catalog = fake.catalog().await.unwrap();
        assert_eq!(catalog.modules.len(), 6);
        assert_eq!(
            catalog.families,
            vec!["intelligence", "management", "marketing"]
        );
    }
}
