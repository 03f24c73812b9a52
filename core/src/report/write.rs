use std::fs;
use std::path::Path;

use crate::errors::ReportError;
use crate::report::GateReport;

/// Serialize the report once and write it to `path`. A failure here must
/// surface to the caller so the process can exit with the report-write code
/// instead of silently dropping the evidence.
pub fn write_report(path: &Path, report: &GateReport) -> Result<(), ReportError> {
    let mut body = serde_json::to_string_pretty(report)?;
    body.push('\n');
    fs::write(path, body).map_err(|source| ReportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), "report written");
    Ok(())
}
