//! Shared gate run sequence: resolve configuration, run the probes, write
//! the report, print the summary line. Configuration failure is the only
//! pre-probe abort; a report that cannot be written exits with its own code
//! so the evidence is never silently dropped.

pub mod function;
pub mod http_api;

use std::collections::BTreeMap;
use std::path::PathBuf;

use gatecheck_core::config::{self, EnvMap, InputSpec};
use gatecheck_core::exit;
use gatecheck_core::probe::Probe;
use gatecheck_core::report;
use gatecheck_core::types::GateId;
use gatecheck_core::GateRun;
use gatecheck_plugins::client::ClientSettings;

use crate::cli::GateArgs;

pub(crate) struct GatePlan {
    pub id: &'static str,
    pub inputs: &'static [InputSpec],
    pub probes: fn(&BTreeMap<String, String>) -> Vec<Box<dyn Probe>>,
}

pub(crate) async fn run_gate(plan: &GatePlan, args: &GateArgs, env: &EnvMap) -> i32 {
    let merged = match config::layered(env) {
        Ok(merged) => merged,
        Err(e) => return usage_exit(plan, &e),
    };
    let inputs = match config::resolve(plan.inputs, &merged) {
        Ok(inputs) => inputs,
        Err(e) => return usage_exit(plan, &e),
    };

    let settings = ClientSettings::from_env(&merged);
    let client = match settings.connect() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("gate {}: {e}", plan.id);
            return exit::USAGE;
        }
    };

    let region = inputs.get("region").cloned().unwrap_or_default();
    let out_path = args
        .out
        .clone()
        .or_else(|| inputs.get("out").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(format!("{}-gate-report.json", plan.id)));

    let probes = (plan.probes)(&inputs);
    let run = GateRun::new(GateId(plan.id.to_string()), region, inputs, probes);
    let gate_report = run.run(&client).await;

    if let Err(e) = report::write_report(&out_path, &gate_report) {
        eprintln!("gate {}: {e}", plan.id);
        return exit::REPORT_IO;
    }

    println!("gate {}: {}", plan.id, gate_report.status);
    gate_report.exit_code
}

fn usage_exit(plan: &GatePlan, err: &gatecheck_core::errors::ConfigError) -> i32 {
    eprintln!("gate {}: {err}", plan.id);
    eprintln!("{}", config::usage(plan.id, plan.inputs));
    exit::USAGE
}
