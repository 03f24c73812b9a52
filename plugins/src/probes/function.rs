//! Function resource probes. Configuration fields (state, runtime, handler,
//! environment) are checked by [`FieldProbe`](super::FieldProbe) instances
//! assembled in the factory; only the existence probe needs its own struct
//! because it contributes the observed snapshot.

use async_trait::async_trait;
use gatecheck_core::check::Expectation;
use gatecheck_core::client::CloudClient;
use gatecheck_core::outcome::{Outcome, ProbeOutcome};
use gatecheck_core::probe::Probe;

use super::scalar_str;

pub struct FunctionExistsProbe {
    function: String,
}

impl FunctionExistsProbe {
    pub fn boxed(function: &str) -> Box<dyn Probe> {
        Box::new(Self { function: function.to_string() })
    }
}

#[async_trait]
impl Probe for FunctionExistsProbe {
    fn name(&self) -> &str {
        "function.exists"
    }

    async fn run(&self, client: &dyn CloudClient) -> ProbeOutcome {
        let subject = format!("function {}", self.function);
        let path = format!("functions/{}", self.function);
        match client.get_resource(&path).await {
            Ok(Some(function)) => {
                let mut out = ProbeOutcome::new(
                    Expectation::Exists.evaluate(&subject, Some(self.function.as_str())),
                );
                for (report_key, field) in [
                    ("function_runtime", "runtime"),
                    ("function_state", "state"),
                    ("function_handler", "handler"),
                    ("function_role", "role"),
                ] {
                    if let Some(value) = function.get(field).and_then(scalar_str) {
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
