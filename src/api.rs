// API client module: a small blocking HTTP client that executes
// request descriptors against the target REST API. It is intentionally
// synchronous; the CLI performs one request per run and blocks on the
// answer anyway.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;

use crate::request::{Method, RequestDescriptor};

/// What came back from the API: the HTTP status code and the response
/// body parsed as JSON. The status is what the DELETE flow branches
/// on; everything else only looks at the body.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

/// Simple API client holding a reqwest blocking client and the base
/// URL of the target API.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against an explicit base URL. A trailing slash
    /// is stripped so descriptor paths join cleanly.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client configured from the environment variable
    /// `API_URL`, or fall back to `http://127.0.0.1:3000`.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("API_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".into());
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue the HTTP call for a descriptor and return the status plus
    /// the body as JSON. Only transport-level failures are errors
    /// here; non-2xx statuses come back in `ApiResponse` so the caller
    /// can apply its own policy (the DELETE flow maps them to
    /// messages, everything else goes through `execute`).
    pub fn dispatch(&self, request: &RequestDescriptor) -> Result<ApiResponse> {
        let url = request.url(&self.base_url);
        debug!(method = request.method.as_str(), %url, "dispatching request");

        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self.client.request(method, &url);
        if let Some(payload) = &request.payload {
            builder = builder.json(payload);
        }

        let res = builder.send().context("API request failed")?;
        let status = res.status().as_u16();
        debug!(status, "received response");

        // An empty body (204, typically) becomes JSON null; a non-JSON
        // body is carried through as a plain string.
        let text = res.text().unwrap_or_else(|_| "".into());
        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };
        Ok(ApiResponse { status, body })
    }

    /// Dispatch and fail on any non-2xx status, wrapping the remote
    /// error payload into the error message. This is the policy for
    /// GET, POST and PATCH.
    pub fn execute(&self, request: &RequestDescriptor) -> Result<Value> {
        let res = self.dispatch(request)?;
        if !(200..300).contains(&res.status) {
            anyhow::bail!("API request failed: {} - {}", res.status, res.body);
        }
        Ok(res.body)
    }
}
