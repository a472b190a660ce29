use std::time::Duration;

use crate::error::Result;

/// Every request is bounded by this client-level timeout; no per-call
/// deadline is exposed.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Status code and raw body handed back by a [`Transport`], before any
/// decoding happens.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Minimal "perform a GET" abstraction so tests can substitute a canned
/// double for the real HTTP stack.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<RawResponse>;
}

/// Production transport over a pooled `reqwest` blocking client, built once
/// and reused across calls.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<RawResponse> {
        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();

        Ok(RawResponse { status, body })
    }
}
