//! The canonical gate report.
//!
//! Field declaration order is the JSON key order; escaping is delegated to
//! `serde_json`. Empty lists serialize as `[]`, never as `null`, so the
//! report stays machine-consumable for every outcome mix.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::Serialize;

use crate::aggregate::Aggregator;
use crate::status::GateStatus;
use crate::types::GateId;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct GateReport {
    pub schema_version: u32,
    pub gate: String,
    pub timestamp_utc: String,
    pub region: String,
    pub inputs: BTreeMap<String, String>,
    pub observed: BTreeMap<String, String>,
    pub status: GateStatus,
    pub exit_code: i32,
    pub details: Vec<String>,
    pub warnings: Vec<String>,
    pub failures: Vec<String>,
}

/// UTC wall-clock in the fixed `YYYY-MM-DDTHH:MM:SSZ` report format.
pub fn utc_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

impl GateReport {
    pub fn assemble(
        id: &GateId,
        region: &str,
        inputs: BTreeMap<String, String>,
        aggregator: Aggregator,
        status: GateStatus,
        exit_code: i32,
    ) -> Self {
        let (details, warnings, failures, observed) = aggregator.into_parts();
        Self {
            schema_version: SCHEMA_VERSION,
            gate: id.as_str().to_string(),
            timestamp_utc: utc_timestamp(),
            region: region.to_string(),
            inputs,
            observed,
            status,
            exit_code,
            details,
            warnings,
            failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Outcome;
    use pretty_assertions::assert_eq;

    fn sample_report(agg: Aggregator) -> GateReport {
        let (status, exit_code) = crate::status::resolve(agg.failures());
        GateReport::assemble(
            &GateId("http-api".to_string()),
            "us-east-1",
            BTreeMap::new(),
            agg,
            status,
            exit_code,
        )
    }

    #[test]
    fn empty_lists_serialize_as_empty_arrays() {
        let report = sample_report(Aggregator::new());
        let body = serde_json::to_string(&report).unwrap();
        assert!(body.contains("\"details\":[]"));
        assert!(body.contains("\"warnings\":[]"));
        assert!(body.contains("\"failures\":[]"));
        assert!(!body.contains("null"));
    }

    #[test]
    fn key_order_is_fixed() {
        let report = sample_report(Aggregator::new());
        let body = serde_json::to_string(&report).unwrap();
        let keys = [
            "\"schema_version\"",
            "\"gate\"",
            "\"timestamp_utc\"",
            "\"region\"",
            "\"inputs\"",
            "\"observed\"",
            "\"status\"",
            "\"exit_code\"",
            "\"details\"",
            "\"warnings\"",
            "\"failures\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| body.find(k).unwrap()).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn messages_round_trip_through_a_json_parser() {
        let mut agg = Aggregator::new();
        let tricky = "path \"C:\\temp\"\nsecond line";
        agg.record(Outcome::fail(tricky));
        let report = sample_report(agg);

        let body = serde_json::to_string(&report).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["failures"][0].as_str().unwrap(), tricky);
        assert_eq!(parsed["status"].as_str().unwrap(), "FAIL");
        assert_eq!(parsed["exit_code"].as_i64().unwrap(), 2);
    }

    #[test]
    fn timestamp_matches_fixed_format() {
        let ts = utc_timestamp();
        // YYYY-MM-DDTHH:MM:SSZ
        assert_eq!(ts.len(), 20);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], "T");
        assert!(ts.ends_with('Z'));
        chrono::NaiveDateTime::parse_from_str(&ts, "%Y-%m-%dT%H:%M:%SZ").unwrap();
    }

    #[test]
    fn status_serializes_uppercase() {
        let report = sample_report(Aggregator::new());
        let parsed: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();
        assert_eq!(parsed["status"].as_str().unwrap(), "PASS");
        assert_eq!(parsed["exit_code"].as_i64().unwrap(), 0);
    }
}
