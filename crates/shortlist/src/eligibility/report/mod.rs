pub mod views;

use super::batch::BatchReport;
use super::evaluation::RuleKind;
use views::{DecisionView, RuleBreakdownEntry, ShortlistReportView};

impl BatchReport {
    /// Number of students failing each check, in evaluation order. Checks nobody failed are
    /// omitted.
    pub fn rule_breakdown(&self) -> Vec<RuleBreakdownEntry> {
        RuleKind::ordered()
            .into_iter()
            .filter_map(|rule| {
                let rejected = self
                    .decisions
                    .iter()
                    .filter(|decision| decision.reasons.iter().any(|reason| reason.kind() == rule))
                    .count();
                (rejected > 0).then(|| RuleBreakdownEntry {
                    rule,
                    rule_label: rule.label(),
                    rejected,
                })
            })
            .collect()
    }

    pub fn view(&self, include_eligible: bool) -> ShortlistReportView {
        let decisions = self
            .decisions
            .iter()
            .filter(|decision| include_eligible || !decision.eligible())
            .map(DecisionView::from)
            .collect();

        ShortlistReportView {
            job_id: self.job_id.0.clone(),
            summary: self.summary,
            rule_breakdown: self.rule_breakdown(),
            decisions,
        }
    }
}
