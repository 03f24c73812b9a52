use gatecheck_core::config::{EnvMap, InputSpec};
use gatecheck_plugins::factory;

use super::{run_gate, GatePlan};
use crate::cli::GateArgs;

pub const INPUTS: &[InputSpec] = &[
    InputSpec { name: "region", key: "GATE_REGION", default: Some("us-east-1") },
    InputSpec { name: "function", key: "GATE_FUNCTION", default: None },
    InputSpec { name: "runtime", key: "GATE_RUNTIME", default: None },
    InputSpec { name: "handler", key: "GATE_HANDLER", default: Some("index.handler") },
    InputSpec { name: "db_name", key: "GATE_DB_NAME", default: None },
    InputSpec { name: "secret", key: "GATE_SECRET", default: None },
    InputSpec { name: "out", key: "GATE_OUT", default: Some("function-gate-report.json") },
];

const PLAN: GatePlan = GatePlan {
    id: "function",
    inputs: INPUTS,
    probes: factory::function_probes,
};

pub async fn run(args: &GateArgs, env: &EnvMap) -> i32 {
    run_gate(&PLAN, args, env).await
}
