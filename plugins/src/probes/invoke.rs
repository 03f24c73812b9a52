//! The one live functional probe: exercise the deployed API over HTTP and
//! require a 200 with the success marker in the body. Everything else in the
//! gate is read-only against the control plane; this probe proves the wiring
//! actually answers.

use async_trait::async_trait;
use gatecheck_core::client::CloudClient;
use gatecheck_core::outcome::{Outcome, ProbeOutcome};
use gatecheck_core::probe::Probe;

use super::scalar_str;

const BODY_SNIPPET_CHARS: usize = 120;

pub struct LiveInvokeProbe {
    api_id: String,
    route_path: String,
    method: String,
    marker: String,
}

impl LiveInvokeProbe {
    pub fn boxed(api_id: &str, route_path: &str, method: &str, marker: &str) -> Box<dyn Probe> {
        Box::new(Self {
            api_id: api_id.to_string(),
            route_path: route_path.to_string(),
            method: method.to_string(),
            marker: marker.to_string(),
        })
    }
}

fn snippet(body: &str) -> String {
    if body.len() <= BODY_SNIPPET_CHARS {
        return body.to_string();
    }
    let mut end = BODY_SNIPPET_CHARS;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[async_trait]
impl Probe for LiveInvokeProbe {
    fn name(&self) -> &str {
        "api.invoke"
    }

    async fn run(&self, client: &dyn CloudClient) -> ProbeOutcome {
        let call = format!("live invocation {} {}", self.method, self.route_path);

        // The invoke URL comes from the API's own endpoint, not from input,
        // so the probe exercises what is actually deployed.
        let endpoint = match client.get_resource(&format!("apis/{}", self.api_id)).await {
            Ok(Some(api)) => api.get("api_endpoint").and_then(scalar_str),
            Ok(None) => {
                return Outcome::fail(format!("{call}: api {} not found", self.api_id)).into()
            }
            Err(e) => return Outcome::fail(format!("{call}: {e}")).into(),
        };
        let Some(endpoint) = endpoint else {
            return Outcome::fail(format!(
                "{call}: api {} exposes no endpoint",
                self.api_id
            ))
            .into();
        };

        let url = format!("{}{}", endpoint.trim_end_matches('/'), self.route_path);
        let exchange = match client.invoke_http(&url, &self.method).await {
            Ok(exchange) => exchange,
            Err(e) => return Outcome::fail(format!("{call} failed: {e}")).into(),
        };

        let outcome = if exchange.status != 200 {
            Outcome::fail(format!(
                "{call} did not return 200 (http_code={})",
                exchange.status
            ))
        } else if !exchange.body.contains(&self.marker) {
            Outcome::fail(format!(
                "{call} returned 200 but body is missing success marker \"{}\" (body: {})",
                self.marker,
                snippet(&exchange.body)
            ))
        } else {
            Outcome::pass(format!("{call} returned 200 with success marker"))
        };

        ProbeOutcome::new(outcome)
            .observe("invoke_url", url)
            .observe("invoke_status", exchange.status.to_string())
    }
}
