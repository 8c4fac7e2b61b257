//! HTTP implementation of [`RemoteApi`](crate::RemoteApi)

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::{json, Value};
use url::Url;

use suitehub_core::prelude::*;
use suitehub_core::{Catalog, ModuleId, NewSuite, Overview, Suite, SuiteBundle, SuiteId};

use crate::api::RemoteApi;
use crate::protocol::{
    decode_envelope, decode_payload, routes, CatalogPayload, CreatedSuitePayload, Method,
    OverviewPayload, SuiteDetailPayload, SuiteListPayload,
};

/// Connection parameters of the HTTP client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSettings {
    /// Base URL of the API service, e.g. `http://127.0.0.1:5113`
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5113".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Parse and normalize a base URL so that relative joins keep its path
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| Error::config(format!("invalid server URL '{raw}': {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::config(format!(
            "server URL must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Suite Hub API client over HTTP
#[derive(Debug, Clone)]
pub struct HttpRemote {
    http: Client,
    base: Url,
}

impl HttpRemote {
    pub fn new(settings: &RemoteSettings) -> Result<Self> {
        let base = parse_base_url(&settings.base_url)?;
        let http = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| Error::config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::protocol(format!("invalid path {path}: {e}")))
    }

    /// Send one JSON request and decode the response envelope
    pub async fn call(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        let url = self.endpoint(path)?;
        debug!("{} {}", method, path);

        let request = match method {
            Method::Get => self.http.get(url),
            Method::Post => self.http.post(url),
        }
        .header(CONTENT_TYPE, "application/json");

        let request = match body {
            Some(body) => request.json(body),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            warn!("{} {} failed to send: {}", method, path, e);
            if e.is_timeout() {
                Error::transport("request timed out")
            } else {
                Error::transport(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| Error::transport(format!("failed to read response: {e}")))?;

        decode_envelope(status, &text).inspect_err(|e| {
            warn!("{} {} -> HTTP {}: {}", method, path, status, e);
        })
    }
}

impl RemoteApi for HttpRemote {
    async fn overview(&self) -> Result<Overview> {
        let payload = self.call(Method::Get, routes::OVERVIEW, None).await?;
        let payload: OverviewPayload = decode_payload(payload, "overview")?;
        Ok(payload.overview)
    }

    async fn catalog(&self) -> Result<Catalog> {
        let payload = self.call(Method::Get, routes::CATALOG, None).await?;
        decode_payload::<CatalogPayload>(payload, "catalog")
    }

    async fn suites(&self) -> Result<Vec<Suite>> {
        let payload = self.call(Method::Get, routes::SUITES, None).await?;
        let payload: SuiteListPayload = decode_payload(payload, "suite list")?;
        Ok(payload.items)
    }

    async fn suite_detail(&self, id: SuiteId) -> Result<SuiteBundle> {
        let payload = self.call(Method::Get, &routes::suite(id), None).await?;
        let payload: SuiteDetailPayload = decode_payload(payload, "suite detail")?;
        Ok(SuiteBundle {
            detail: payload.detail,
            runs: payload.runs,
        })
    }

    async fn create_suite(&self, suite: &NewSuite) -> Result<SuiteId> {
        let body = serde_json::to_value(suite)
            .map_err(|e| Error::protocol(format!("encoding suite: {e}")))?;
        let payload = self.call(Method::Post, routes::SUITES, Some(&body)).await?;
        let payload: CreatedSuitePayload = decode_payload(payload, "create suite")?;
        Ok(payload.suite_id)
    }

    async fn replace_modules(&self, id: SuiteId, module_ids: &[ModuleId]) -> Result<()> {
        let body = json!({ "moduleIds": module_ids });
        self.call(Method::Post, &routes::suite_modules(id), Some(&body))
            .await?;
        Ok(())
    }

    async fn simulate(&self, id: SuiteId) -> Result<()> {
        // The run summary in the response is not used; callers reload the detail
        self.call(Method::Post, &routes::suite_simulate(id), Some(&json!({})))
            .await?;
        Ok(())
    }
}
