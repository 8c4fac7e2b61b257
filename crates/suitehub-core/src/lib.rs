//! # suitehub-core - Core Domain Types
//!
//! Foundation crate for Suite Hub. Provides the domain types exchanged with the
//! Suite Hub API, error handling, logging setup and display formatting.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Module`] - A catalog entry with cost/value/complexity attributes
//! - [`Suite`] - Summary projection of a suite as returned by the list endpoint
//! - [`SuiteDetail`] - Authoritative detail of one suite, including membership
//! - [`Run`] - A recorded simulation outcome
//! - [`Overview`] - Aggregate counts across the catalog/suite/run space
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum for remote, validation, config and terminal failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Formatting (`format`)
//! - [`format::money()`], [`format::euros()`], [`format::timestamp()`]
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use suitehub_core::prelude::*;
//! ```

pub mod error;
pub mod format;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Suite Hub crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use types::{
    Catalog, LastRun, Module, ModuleId, NewSuite, Overview, Run, RunId, RunStatus, RunSummary,
    Suite, SuiteBundle, SuiteDetail, SuiteId, SuiteInfo, SuiteMetrics,
};
