//! Domain types exchanged with the Suite Hub API
//!
//! Field names follow the API's JSON: snake_case for stored columns,
//! camelCase for computed aggregates.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

id_type!(
    /// Stable identifier of a catalog module
    ModuleId
);
id_type!(
    /// Identifier of a suite
    SuiteId
);
id_type!(
    /// Identifier of a simulation run
    RunId
);

// ─────────────────────────────────────────────────────────────────
// Catalog
// ─────────────────────────────────────────────────────────────────

/// A reusable capability in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    pub name: String,
    /// Category label used by the family filter
    pub family: String,
    pub business_area: String,
    #[serde(default)]
    pub color_code: String,
    pub description: String,
    /// Monthly cost in euros, never negative
    pub monthly_cost: f64,
    pub value_score: i64,
    pub complexity_score: i64,
    #[serde(default)]
    pub maturity: String,
    /// Role inside a suite; only present in suite detail payloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Full catalog payload: modules plus the distinct family labels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub modules: Vec<Module>,
    #[serde(default)]
    pub families: Vec<String>,
}

// ─────────────────────────────────────────────────────────────────
// Suites
// ─────────────────────────────────────────────────────────────────

/// Aggregate metrics of a suite
///
/// The list endpoint always carries `moduleCount` and `totalCost`; value and
/// complexity are optional there and always present in detail payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteMetrics {
    pub module_count: u32,
    pub total_cost: f64,
    #[serde(default)]
    pub total_value: i64,
    #[serde(default)]
    pub avg_complexity: f64,
}

/// Suite summary as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suite {
    pub id: SuiteId,
    pub name: String,
    pub owner: String,
    pub mission: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub metrics: SuiteMetrics,
}

/// Identity block of a suite detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteInfo {
    pub id: SuiteId,
    pub name: String,
    pub owner: String,
    pub mission: String,
}

/// Authoritative detail of one suite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteDetail {
    pub suite: SuiteInfo,
    pub metrics: SuiteMetrics,
    /// Membership as known by the server at fetch time
    pub modules: Vec<Module>,
}

impl SuiteDetail {
    /// Whether `id` is a member of this suite
    pub fn contains_module(&self, id: ModuleId) -> bool {
        self.modules.iter().any(|m| m.id == id)
    }

    /// Member ids in server order
    pub fn module_ids(&self) -> impl Iterator<Item = ModuleId> + '_ {
        self.modules.iter().map(|m| m.id)
    }
}

/// Payload of the suite detail endpoint: detail plus its run history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteBundle {
    pub detail: SuiteDetail,
    #[serde(default)]
    pub runs: Vec<Run>,
}

/// Input of the create-suite call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSuite {
    pub name: String,
    pub owner: String,
    pub mission: String,
}

// ─────────────────────────────────────────────────────────────────
// Runs
// ─────────────────────────────────────────────────────────────────

/// Outcome classification of a run
///
/// The API uses `"ok"` for a positive outcome; any other label is kept
/// verbatim and shown as a warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RunStatus {
    Ok,
    Other(String),
}

impl RunStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, RunStatus::Ok)
    }

    pub fn as_str(&self) -> &str {
        match self {
            RunStatus::Ok => "ok",
            RunStatus::Other(label) => label,
        }
    }
}

impl From<String> for RunStatus {
    fn from(value: String) -> Self {
        if value == "ok" {
            RunStatus::Ok
        } else {
            RunStatus::Other(value)
        }
    }
}

impl From<RunStatus> for String {
    fn from(value: RunStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Simulation summary stored with each run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    #[serde(rename = "estimatedROI")]
    pub estimated_roi: f64,
    pub integration_effort: f64,
    pub recommendation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_estimated_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub families: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_count: Option<u32>,
}

/// A recorded simulation for a suite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub id: RunId,
    pub status: RunStatus,
    pub created_at: DateTime<Utc>,
    pub summary: RunSummary,
}

// ─────────────────────────────────────────────────────────────────
// Overview
// ─────────────────────────────────────────────────────────────────

/// Most recent run across all suites
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastRun {
    pub created_at: DateTime<Utc>,
    pub summary: RunSummary,
}

/// Aggregate counts across the whole catalog/suite/run space
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub modules: u32,
    pub suites: u32,
    pub runs: u32,
    #[serde(default)]
    pub last_run: Option<LastRun>,
}
