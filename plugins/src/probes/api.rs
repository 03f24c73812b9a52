//! Probes for the HTTP API resource: existence, stage wiring, routes and the
//! integration target.

use async_trait::async_trait;
use gatecheck_core::check::Expectation;
use gatecheck_core::client::CloudClient;
use gatecheck_core::outcome::{Outcome, ProbeOutcome};
use gatecheck_core::probe::Probe;

use super::scalar_str;

pub struct ApiExistsProbe {
    api_id: String,
}

impl ApiExistsProbe {
    pub fn boxed(api_id: &str) -> Box<dyn Probe> {
        Box::new(Self { api_id: api_id.to_string() })
    }
}

#[async_trait]
impl Probe for ApiExistsProbe {
    fn name(&self) -> &str {
        "api.exists"
    }

    async fn run(&self, client: &dyn CloudClient) -> ProbeOutcome {
        let subject = format!("api {}", self.api_id);
        let path = format!("apis/{}", self.api_id);
        match client.get_resource(&path).await {
            Ok(Some(api)) => {
                let mut out = ProbeOutcome::new(
                    Expectation::Exists.evaluate(&subject, Some(self.api_id.as_str())),
                );
                for (report_key, field) in
                    [("api_endpoint", "api_endpoint"), ("api_protocol", "protocol_type")]
                {
                    if let Some(value) = api.get(field).and_then(scalar_str) {
                        out = out.observe(report_key, value);
                    }
                }
                out
            }
            Ok(None) => Outcome::fail(format!("{subject} not found")).into(),
            Err(e) => Outcome::fail(format!("{subject}: {e}")).into(),
        }
    }
}

pub struct StageProbe {
    api_id: String,
    stage: String,
}

impl StageProbe {
    pub fn boxed(api_id: &str, stage: &str) -> Box<dyn Probe> {
        Box::new(Self { api_id: api_id.to_string(), stage: stage.to_string() })
    }
}

#[async_trait]
impl Probe for StageProbe {
    fn name(&self) -> &str {
        "api.stage"
    }

    async fn run(&self, client: &dyn CloudClient) -> ProbeOutcome {
        let subject = format!("stage {}", self.stage);
        let path = format!("apis/{}/stages/{}", self.api_id, self.stage);
        match client.get_resource(&path).await {
            Ok(Some(stage)) => {
                let mut out = ProbeOutcome::new(
                    Expectation::Exists.evaluate(&subject, Some(self.stage.as_str())),
                );
                if let Some(auto_deploy) = stage.get("auto_deploy").and_then(scalar_str) {
                    out = out.observe("stage_auto_deploy", auto_deploy);
                }
                out
            }
            Ok(None) => Outcome::fail(format!("{subject} not found")).into(),
            Err(e) => Outcome::fail(format!("{subject}: {e}")).into(),
        }
    }
}

/// Set-membership check: the expected route key must appear in the API's
/// route listing.
pub struct RouteProbe {
    api_id: String,
    route_key: String,
}

impl RouteProbe {
    pub fn boxed(api_id: &str, route_key: &str) -> Box<dyn Probe> {
        Box::new(Self { api_id: api_id.to_string(), route_key: route_key.to_string() })
    }
}

#[async_trait]
impl Probe for RouteProbe {
    fn name(&self) -> &str {
        "api.route"
    }

    async fn run(&self, client: &dyn CloudClient) -> ProbeOutcome {
        let path = format!("apis/{}/routes", self.api_id);
        let routes = match client.list_resources(&path).await {
            Ok(routes) => routes,
            Err(e) => return Outcome::fail(format!("route {}: {e}", self.route_key)).into(),
        };

        let keys: Vec<String> = routes
            .iter()
            .filter_map(|r| r.get("route_key").and_then(scalar_str))
            .collect();

        if keys.iter().any(|k| k == &self.route_key) {
            ProbeOutcome::new(Outcome::pass(format!("route \"{}\" configured", self.route_key)))
        } else {
            Outcome::fail(format!(
                "route \"{}\" not found (configured routes: {keys:?})",
                self.route_key
            ))
            .into()
        }
    }
}

/// Prefix check on the integration target: some integration of the API must
/// point at the expected function.
pub struct IntegrationProbe {
    api_id: String,
    target_prefix: String,
}

impl IntegrationProbe {
    pub fn boxed(api_id: &str, target_prefix: &str) -> Box<dyn Probe> {
        Box::new(Self {
            api_id: api_id.to_string(),
            target_prefix: target_prefix.to_string(),
        })
    }
}

#[async_trait]
impl Probe for IntegrationProbe {
    fn name(&self) -> &str {
        "api.integration"
    }

    async fn run(&self, client: &dyn CloudClient) -> ProbeOutcome {
        let path = format!("apis/{}/integrations", self.api_id);
        let integrations = match client.list_resources(&path).await {
            Ok(items) => items,
            Err(e) => return Outcome::fail(format!("api integration: {e}")).into(),
        };

        let uris: Vec<String> = integrations
            .iter()
            .filter_map(|i| i.get("integration_uri").and_then(scalar_str))
            .collect();

        match uris.iter().find(|uri| uri.starts_with(&self.target_prefix)) {
            Some(uri) => ProbeOutcome::new(Outcome::pass(format!(
                "api integration targets \"{uri}\""
            )))
            .observe("integration_uri", uri.clone()),
            None => Outcome::fail(format!(
                "api integration mismatch: expected prefix \"{}\", got {uris:?}",
                self.target_prefix
            ))
            .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probes::testutil::StubClient;
    use gatecheck_core::outcome::OutcomeKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn existing_api_passes_and_observes_endpoint() {
        let client = StubClient::default().with_resource(
            "apis/demo1",
            json!({
                "api_id": "demo1",
                "protocol_type": "HTTP",
                "api_endpoint": "https://demo1.example.com"
            }),
        );

        let out = ApiExistsProbe::boxed("demo1").run(&client).await;
        assert_eq!(out.outcome.kind, OutcomeKind::Pass);
        assert!(out
            .observed
            .iter()
            .any(|(k, v)| k == "api_endpoint" && v == "https://demo1.example.com"));
    }

    #[tokio::test]
    async fn missing_api_fails() {
        let client = StubClient::default();
        let out = ApiExistsProbe::boxed("ghost").run(&client).await;
        assert_eq!(out.outcome.kind, OutcomeKind::Fail);
        assert_eq!(out.outcome.message, "api ghost not found");
    }

    #[tokio::test]
    async fn route_membership() {
        let client = StubClient::default().with_listing(
            "apis/demo1/routes",
            vec![
                json!({ "route_key": "GET /health" }),
                json!({ "route_key": "POST /orders" }),
            ],
        );

        let hit = RouteProbe::boxed("demo1", "GET /health").run(&client).await;
        assert_eq!(hit.outcome.kind, OutcomeKind::Pass);

        let miss = RouteProbe::boxed("demo1", "DELETE /orders").run(&client).await;
        assert_eq!(miss.outcome.kind, OutcomeKind::Fail);
        assert!(miss.outcome.message.contains("GET /health"));
    }

    #[tokio::test]
    async fn integration_prefix_match() {
        let client = StubClient::default().with_listing(
            "apis/demo1/integrations",
            vec![json!({ "integration_uri": "functions/checkout-handler/invocations" })],
        );

        let hit = IntegrationProbe::boxed("demo1", "functions/checkout-handler")
            .run(&client)
            .await;
        assert_eq!(hit.outcome.kind, OutcomeKind::Pass);

        let miss = IntegrationProbe::boxed("demo1", "functions/billing-handler")
            .run(&client)
            .await;
        assert_eq!(miss.outcome.kind, OutcomeKind::Fail);
        assert!(miss.outcome.message.contains("functions/billing-handler"));
        assert!(miss.outcome.message.contains("functions/checkout-handler/invocations"));
    }

    #[tokio::test]
    async fn stage_observes_auto_deploy() {
        let client = StubClient::default().with_resource(
            "apis/demo1/stages/prod",
            json!({ "stage_name": "prod", "auto_deploy": false }),
        );

        let out = StageProbe::boxed("demo1", "prod").run(&client).await;
        assert_eq!(out.outcome.kind, OutcomeKind::Pass);
        assert!(out.observed.iter().any(|(k, v)| k == "stage_auto_deploy" && v == "false"));
    }
}
