use async_trait::async_trait;
use gatecheck_core::check::Expectation;
use gatecheck_core::client::CloudClient;
use gatecheck_core::outcome::{Outcome, ProbeOutcome};
use gatecheck_core::probe::Probe;

pub struct SecretExistsProbe {
    secret_ref: String,
}

impl SecretExistsProbe {
    pub fn boxed(secret_ref: &str) -> Box<dyn Probe> {
        Box::new(Self { secret_ref: secret_ref.to_string() })
    }
}

#[async_trait]
impl Probe for SecretExistsProbe {
    fn name(&self) -> &str {
        "secret.exists"
    }

    async fn run(&self, client: &dyn CloudClient) -> ProbeOutcome {
        let subject = format!("secret {}", self.secret_ref);
        let path = format!("secrets/{}", self.secret_ref);
        match client.get_resource(&path).await {
            // Existence is the whole check; the secret value itself never
            // enters the report.
            Ok(Some(_)) => Expectation::Exists.evaluate(&subject, Some(self.secret_ref.as_str())).into(),
            Ok(None) => Outcome::fail(format!("{subject} not found")).into(),
            Err(e) => Outcome::fail(format!("{subject}: {e}")).into(),
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
    async fn present_secret_passes() {
        let client = StubClient::default()
            .with_resource("secrets/db-creds", json!({ "name": "db-creds" }));
        let out = SecretExistsProbe::boxed("db-creds").run(&client).await;
        assert_eq!(out.outcome.kind, OutcomeKind::Pass);
    }

    #[tokio::test]
    async fn absent_secret_fails() {
        let client = StubClient::default();
        let out = SecretExistsProbe::boxed("db-creds").run(&client).await;
        assert_eq!(out.outcome.kind, OutcomeKind::Fail);
        assert_eq!(out.outcome.message, "secret db-creds not found");
    }
}
