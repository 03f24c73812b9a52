mod http;

pub use http::HttpCloudClient;

use gatecheck_core::config::EnvMap;
use gatecheck_core::errors::ClientError;

const DEFAULT_ENDPOINT: &str = "https://control.internal";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Connection settings for the control-plane client. These are deployment
/// plumbing, not gate inputs, so they stay out of the report's `inputs`
/// mapping.
#[derive(Clone, Debug)]
pub struct ClientSettings {
    pub endpoint: String,
    pub token: Option<String>,
    pub timeout_ms: u64,
}

impl ClientSettings {
    pub fn from_env(env: &EnvMap) -> Self {
        let endpoint = env
            .get("GATE_ENDPOINT")
            .filter(|v| !v.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let token = env
            .get("GATE_API_TOKEN")
            .filter(|v| !v.trim().is_empty())
            .cloned();

        let timeout_ms = match env.get("GATE_TIMEOUT_MS") {
            Some(raw) => match raw.trim().parse() {
                Ok(ms) => ms,
                Err(_) => {
                    tracing::warn!(value = %raw, "unparsable GATE_TIMEOUT_MS, using default");
                    DEFAULT_TIMEOUT_MS
                }
            },
            None => DEFAULT_TIMEOUT_MS,
        };

        Self { endpoint, token, timeout_ms }
    }

    pub fn connect(&self) -> Result<HttpCloudClient, ClientError> {
        HttpCloudClient::new(self.endpoint.clone(), self.token.clone(), self.timeout_ms)
    }
}
