use super::super::batch::{BatchSummary, Decision};
use super::super::evaluation::RuleKind;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Export-facing decision with reasons rendered to text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionView {
    pub job_id: String,
    pub student_id: String,
    pub eligible: bool,
    pub reasons: Vec<String>,
    pub nice_hits: usize,
    pub evaluated_at: DateTime<Utc>,
}

impl From<&Decision> for DecisionView {
    fn from(decision: &Decision) -> Self {
        Self {
            job_id: decision.job_id.0.clone(),
            student_id: decision.student_id.0.clone(),
            eligible: decision.eligible(),
            reasons: decision.reason_summaries(),
            nice_hits: decision.nice_hits,
            evaluated_at: decision.evaluated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleBreakdownEntry {
    pub rule: RuleKind,
    pub rule_label: &'static str,
    pub rejected: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShortlistReportView {
    pub job_id: String,
    pub summary: BatchSummary,
    pub rule_breakdown: Vec<RuleBreakdownEntry>,
    pub decisions: Vec<DecisionView>,
}
