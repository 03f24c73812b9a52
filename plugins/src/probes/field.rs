//! Generic single-field probe.
//!
//! Fetches one resource, extracts one value by JSON pointer and classifies
//! it under a comparison policy. Most configuration checks are instances of
//! this shape; only probes that need listings or live traffic get their own
//! struct.

use async_trait::async_trait;
use gatecheck_core::check::Expectation;
use gatecheck_core::client::CloudClient;
use gatecheck_core::outcome::{Outcome, ProbeOutcome};
use gatecheck_core::probe::Probe;

use super::scalar_str;

pub struct FieldProbe {
    name: String,
    path: String,
    pointer: String,
    subject: String,
    expectation: Expectation,
}

impl FieldProbe {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        pointer: impl Into<String>,
        subject: impl Into<String>,
        expectation: Expectation,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            pointer: pointer.into(),
            subject: subject.into(),
            expectation,
        }
    }

    pub fn boxed(
        name: impl Into<String>,
        path: impl Into<String>,
        pointer: impl Into<String>,
        subject: impl Into<String>,
        expectation: Expectation,
    ) -> Box<dyn Probe> {
        Box::new(Self::new(name, path, pointer, subject, expectation))
    }
}

#[async_trait]
impl Probe for FieldProbe {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, client: &dyn CloudClient) -> ProbeOutcome {
        let resource = match client.get_resource(&self.path).await {
            Ok(resource) => resource,
            Err(e) => return Outcome::fail(format!("{}: {e}", self.subject)).into(),
        };

        let observed = resource
            .as_ref()
            .and_then(|r| r.pointer(&self.pointer))
            .and_then(scalar_str);
        self.expectation.evaluate(&self.subject, observed.as_deref()).into()
    }
}
