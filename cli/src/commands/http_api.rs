use gatecheck_core::config::{EnvMap, InputSpec};
use gatecheck_plugins::factory;

use super::{run_gate, GatePlan};
use crate::cli::GateArgs;

pub const INPUTS: &[InputSpec] = &[
    InputSpec { name: "region", key: "GATE_REGION", default: Some("us-east-1") },
    InputSpec { name: "api_id", key: "GATE_API_ID", default: None },
    InputSpec { name: "stage", key: "GATE_STAGE", default: Some("prod") },
    InputSpec { name: "route_path", key: "GATE_ROUTE_PATH", default: Some("/health") },
    InputSpec { name: "http_method", key: "GATE_HTTP_METHOD", default: Some("GET") },
    InputSpec { name: "success_marker", key: "GATE_SUCCESS_MARKER", default: Some("ok") },
    InputSpec { name: "function", key: "GATE_FUNCTION", default: None },
    InputSpec { name: "out", key: "GATE_OUT", default: Some("http-api-gate-report.json") },
];

const PLAN: GatePlan = GatePlan {
    id: "http-api",
    inputs: INPUTS,
    probes: factory::http_api_probes,
};

pub async fn run(args: &GateArgs, env: &EnvMap) -> i32 {
    run_gate(&PLAN, args, env).await
}
