mod model;
mod write;

pub use model::{utc_timestamp, GateReport, SCHEMA_VERSION};
pub use write::write_report;
