//! Process exit codes for a gate run.
//!
//! `PASS`/`GATE_FAIL` come from the status resolver; `USAGE` is reserved for
//! configuration failures raised before any probe runs, `REPORT_IO` for a
//! report that could not be written.

pub const PASS: i32 = 0;
pub const USAGE: i32 = 1;
pub const GATE_FAIL: i32 = 2;
pub const REPORT_IO: i32 = 3;
