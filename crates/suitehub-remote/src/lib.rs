//! # suitehub-remote - Suite Hub API Client
//!
//! Wraps every outbound request to the Suite Hub API and normalizes the
//! response envelope into a single result/error contract.
//!
//! Depends on [`suitehub_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! - [`RemoteApi`] - The operations the dashboard consumes (`Send` futures)
//! - [`HttpRemote`] - `reqwest` implementation talking JSON over HTTP
//! - [`decode_envelope()`] - Turn a status + body into a payload or an error
//! - `test_utils::FakeRemote` - In-memory server (feature `test-helpers`)

pub mod api;
pub mod http;
pub mod protocol;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use api::{LocalRemoteApi, RemoteApi};
pub use http::{parse_base_url, HttpRemote, RemoteSettings};
pub use protocol::{decode_envelope, Method};
