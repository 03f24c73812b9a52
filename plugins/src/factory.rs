//! Per-gate probe assembly.
//!
//! Probe order here is the report's audit-trail order: cheap existence
//! checks first, configuration comparisons next, the live invocation last.

use std::collections::BTreeMap;

use gatecheck_core::check::Expectation;
use gatecheck_core::probe::Probe;

use crate::probes::{
    ApiExistsProbe, FieldProbe, FunctionExistsProbe, IntegrationProbe, LiveInvokeProbe,
    RouteProbe, SecretExistsProbe, StageProbe,
};

fn required(inputs: &BTreeMap<String, String>, name: &str) -> String {
    // Invariant: the command resolves the same input table it hands to the
    // factory, so every name is present by the time probes are assembled.
    inputs.get(name).cloned().expect("input resolved before probe assembly")
}

pub fn http_api_probes(inputs: &BTreeMap<String, String>) -> Vec<Box<dyn Probe>> {
    let api_id = required(inputs, "api_id");
    let stage = required(inputs, "stage");
    let route_path = required(inputs, "route_path");
    let method = required(inputs, "http_method");
    let marker = required(inputs, "success_marker");
    let function = required(inputs, "function");

    let route_key = format!("{method} {route_path}");
    vec![
        ApiExistsProbe::boxed(&api_id),
        FieldProbe::boxed(
            "api.protocol",
            format!("apis/{api_id}"),
            "/protocol_type",
            "api protocol",
            Expectation::Equals("HTTP".to_string()),
        ),
        StageProbe::boxed(&api_id, &stage),
        FieldProbe::boxed(
            "api.stage.auto_deploy",
            format!("apis/{api_id}/stages/{stage}"),
            "/auto_deploy",
            "stage auto_deploy",
            Expectation::Prefers("true".to_string()),
        ),
        RouteProbe::boxed(&api_id, &route_key),
        IntegrationProbe::boxed(&api_id, &format!("functions/{function}")),
        LiveInvokeProbe::boxed(&api_id, &route_path, &method, &marker),
    ]
}

pub fn function_probes(inputs: &BTreeMap<String, String>) -> Vec<Box<dyn Probe>> {
    let function = required(inputs, "function");
    let runtime = required(inputs, "runtime");
    let handler = required(inputs, "handler");
    let db_name = required(inputs, "db_name");
    let secret = required(inputs, "secret");

    let path = format!("functions/{function}");
    vec![
        FunctionExistsProbe::boxed(&function),
        FieldProbe::boxed(
            "function.state",
            path.clone(),
            "/state",
            "function state",
            Expectation::OneOf(vec!["Active".to_string()]),
        ),
        FieldProbe::boxed(
            "function.runtime",
            path.clone(),
            "/runtime",
            "function runtime",
            Expectation::Equals(runtime),
        ),
        FieldProbe::boxed(
            "function.handler",
            path.clone(),
            "/handler",
            "function handler",
            Expectation::Prefers(handler),
        ),
        FieldProbe::boxed(
            "function.env.db",
            path.clone(),
            "/environment/DB_NAME",
            "function env DB_NAME",
            Expectation::Equals(db_name),
        ),
        FieldProbe::boxed(
            "function.secret_ref",
            path,
            "/secret_ref",
            "function secret_ref",
            Expectation::Equals(secret.clone()),
        ),
        SecretExistsProbe::boxed(&secret),
    ]
}
