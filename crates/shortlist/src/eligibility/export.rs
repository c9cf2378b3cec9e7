use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use super::batch::{BatchReport, Decision};

#[derive(Debug, Serialize)]
struct DecisionRow<'a> {
    job_id: &'a str,
    student_id: &'a str,
    eligible: bool,
    reasons: String,
    nice_hits: usize,
    evaluated_at: String,
}

/// Write one CSV row per decision. `reasons` is a JSON array so it survives spreadsheet tools.
pub fn write_csv<W: Write>(decisions: &[Decision], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for decision in decisions {
        csv_writer.serialize(DecisionRow {
            job_id: &decision.job_id.0,
            student_id: &decision.student_id.0,
            eligible: decision.eligible(),
            reasons: serde_json::to_string(&decision.reason_summaries())?,
            nice_hits: decision.nice_hits,
            evaluated_at: decision.evaluated_at.to_rfc3339(),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(report: &BatchReport, writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, &report.view(true))?;
    Ok(())
}

pub fn export_csv<P: AsRef<Path>>(report: &BatchReport, path: P) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(&report.decisions, BufWriter::new(file))?;
    info!(job_id = %report.job_id, path = %path.display(), "wrote shortlist CSV");
    Ok(())
}

pub fn export_json<P: AsRef<Path>>(report: &BatchReport, path: P) -> Result<(), ExportError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_json(report, &mut writer)?;
    writer.flush()?;
    info!(job_id = %report.job_id, path = %path.display(), "wrote shortlist JSON");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write shortlist: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode shortlist CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to encode shortlist JSON: {0}")]
    Json(#[from] serde_json::Error),
}
