//! Suite Hub API envelope handling
//!
//! Every response body is a JSON object carrying an `ok` flag. Failures add an
//! `error` string which is surfaced verbatim.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use suitehub_core::prelude::*;
use suitehub_core::{Catalog, Overview, Run, Suite, SuiteDetail, SuiteId};

/// HTTP method of an API call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────
// Routes
// ─────────────────────────────────────────────────────────

pub mod routes {
    use suitehub_core::SuiteId;

    pub const OVERVIEW: &str = "/api/overview";
    pub const CATALOG: &str = "/api/catalog";
    pub const SUITES: &str = "/api/suites";

    pub fn suite(id: SuiteId) -> String {
        format!("/api/suites/{id}")
    }

    pub fn suite_modules(id: SuiteId) -> String {
        format!("/api/suites/{id}/modules")
    }

    pub fn suite_simulate(id: SuiteId) -> String {
        format!("/api/suites/{id}/simulate")
    }
}

// ─────────────────────────────────────────────────────────
// Envelope decoding
// ─────────────────────────────────────────────────────────

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a raw response into its payload object.
///
/// Succeeds only when the status is 2xx and the body says `ok: true`.
/// Otherwise the server's `error` text becomes [`Error::Remote`], falling back
/// to the generic message when none was supplied.
pub fn decode_envelope(status: u16, body: &str) -> Result<Value> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !is_success(status) => {
            return Err(Error::remote(None::<String>));
        }
        Err(e) => {
            return Err(Error::protocol(format!(
                "body is not JSON (HTTP {status}): {e}"
            )));
        }
    };

    let Some(object) = value.as_object() else {
        return Err(Error::protocol(format!(
            "expected a JSON object (HTTP {status})"
        )));
    };

    let ok = object.get("ok").and_then(Value::as_bool);
    let message = object
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string);

    match ok {
        Some(true) if is_success(status) => Ok(value),
        None if is_success(status) => Err(Error::protocol("missing `ok` flag")),
        _ => Err(Error::remote(message)),
    }
}

/// Deserialize a decoded payload into one of the typed payload shapes
pub fn decode_payload<T: DeserializeOwned>(payload: Value, what: &str) -> Result<T> {
    serde_json::from_value(payload).map_err(|e| Error::protocol(format!("{what}: {e}")))
}

// ─────────────────────────────────────────────────────────
// Typed payloads
// ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct OverviewPayload {
    pub overview: Overview,
}

pub(crate) type CatalogPayload = Catalog;

#[derive(Debug, Deserialize)]
pub(crate) struct SuiteListPayload {
    pub items: Vec<Suite>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SuiteDetailPayload {
    pub detail: SuiteDetail,
    #[serde(default)]
    pub runs: Vec<Run>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatedSuitePayload {
    pub suite_id: SuiteId,
}
