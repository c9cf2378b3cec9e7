//! Student eligibility evaluation for placement shortlists.
//!
//! [`evaluation`] holds the pure decision function; [`batch`] applies one frozen rule snapshot to
//! a collection of students. Loading, export and report views sit around them and never feed
//! back into a decision.

pub mod batch;
pub mod domain;
pub mod evaluation;
pub mod export;
pub mod loader;
pub mod report;

#[cfg(test)]
mod tests;

pub use batch::{BatchReport, BatchRunner, BatchSummary, Decision};
pub use domain::{parse_skills, JobId, StudentId, StudentRecord};
pub use evaluation::{
    evaluate, EligibilityEngine, EligibilityRules, EligibilityVerdict, RejectionReason,
    RuleConfigError, RuleKind, RuleSet,
};
pub use export::{export_csv, export_json, write_csv, write_json, ExportError};
pub use loader::{ensure_unique_ids, StudentImportError, StudentLoader};
pub use report::views::{DecisionView, RuleBreakdownEntry, ShortlistReportView};
