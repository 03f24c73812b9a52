//! Overall status derivation.
//!
//! Pure function of the failures list. Warnings never influence the status
//! or the exit code.

use std::fmt;

use serde::Serialize;

use crate::exit;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GateStatus {
    Pass,
    Fail,
}

impl fmt::Display for GateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateStatus::Pass => f.write_str("PASS"),
            GateStatus::Fail => f.write_str("FAIL"),
        }
    }
}

pub fn resolve(failures: &[String]) -> (GateStatus, i32) {
    if failures.is_empty() {
        (GateStatus::Pass, exit::PASS)
    } else {
        (GateStatus::Fail, exit::GATE_FAIL)
    }
}
