//! Gate orchestration: ordered probe execution over one collaborator.
//!
//! Probes run strictly in order on the current thread. A Fail outcome never
//! stops the run; the gate reports the full picture of what is wrong.

use std::collections::BTreeMap;

use crate::aggregate::Aggregator;
use crate::client::CloudClient;
use crate::probe::Probe;
use crate::report::GateReport;
use crate::status;
use crate::types::GateId;

pub struct GateRun {
    pub id: GateId,
    pub region: String,
    pub inputs: BTreeMap<String, String>,
    probes: Vec<Box<dyn Probe>>,
}

impl GateRun {
    pub fn new(
        id: GateId,
        region: String,
        inputs: BTreeMap<String, String>,
        probes: Vec<Box<dyn Probe>>,
    ) -> Self {
        Self { id, region, inputs, probes }
    }

    /// Execute every probe in order and assemble the canonical report.
    pub async fn run(self, client: &dyn CloudClient) -> GateReport {
        let mut agg = Aggregator::new();
        for probe in &self.probes {
            tracing::debug!(gate = %self.id, probe = probe.name(), "running probe");
            let probe_outcome = probe.run(client).await;
            if probe_outcome.outcome.is_fail() {
                tracing::warn!(
                    gate = %self.id,
                    probe = probe.name(),
                    message = %probe_outcome.outcome.message,
                    "probe failed"
                );
            }
            agg.absorb(probe_outcome);
        }

        let (gate_status, exit_code) = status::resolve(agg.failures());
        GateReport::assemble(&self.id, &self.region, self.inputs, agg, gate_status, exit_code)
    }
}
