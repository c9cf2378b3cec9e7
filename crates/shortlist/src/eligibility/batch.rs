use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::domain::{JobId, StudentId, StudentRecord};
use super::evaluation::{
    EligibilityEngine, EligibilityRules, RejectionReason, RuleConfigError, RuleSet,
};

/// Per-student outcome of a batch, stamped for export.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub job_id: JobId,
    pub student_id: StudentId,
    pub reasons: Vec<RejectionReason>,
    pub nice_hits: usize,
    pub evaluated_at: DateTime<Utc>,
}

impl Decision {
    pub fn eligible(&self) -> bool {
        self.reasons.is_empty()
    }

    pub fn reason_summaries(&self) -> Vec<String> {
        self.reasons.iter().map(RejectionReason::summary).collect()
    }
}

/// Aggregate counts reported once a batch completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub eligible: usize,
    pub rejected: usize,
}

impl BatchSummary {
    pub fn from_decisions(decisions: &[Decision]) -> Self {
        let total = decisions.len();
        let eligible = decisions.iter().filter(|decision| decision.eligible()).count();
        Self {
            total,
            eligible,
            rejected: total - eligible,
        }
    }
}

/// Decisions of one batch in input order, with their summary.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub job_id: JobId,
    pub summary: BatchSummary,
    pub decisions: Vec<Decision>,
}

impl BatchReport {
    pub fn eligible(&self) -> impl Iterator<Item = &Decision> {
        self.decisions.iter().filter(|decision| decision.eligible())
    }

    pub fn rejected(&self) -> impl Iterator<Item = &Decision> {
        self.decisions.iter().filter(|decision| !decision.eligible())
    }

    pub fn decision_for(&self, student_id: &StudentId) -> Option<&Decision> {
        self.decisions
            .iter()
            .find(|decision| &decision.student_id == student_id)
    }
}

/// Applies one rule snapshot to a collection of students.
#[derive(Debug, Clone)]
pub struct BatchRunner {
    engine: EligibilityEngine,
    parallel: bool,
}

impl BatchRunner {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            engine: EligibilityEngine::new(rules),
            parallel: false,
        }
    }

    pub fn from_rules(rules: &EligibilityRules) -> Result<Self, RuleConfigError> {
        Ok(Self::new(rules.compile()?))
    }

    /// Evaluate with rayon when the `parallel` feature is compiled in.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn rules(&self) -> &RuleSet {
        self.engine.rules()
    }

    /// Run the batch, stamping each decision with the wall-clock time of its evaluation.
    pub fn run(&self, students: &[StudentRecord], job_id: &JobId) -> BatchReport {
        self.run_with_clock(students, job_id, Utc::now)
    }

    /// Run the batch with a fixed evaluation timestamp.
    pub fn run_at(
        &self,
        students: &[StudentRecord],
        job_id: &JobId,
        evaluated_at: DateTime<Utc>,
    ) -> BatchReport {
        self.run_with_clock(students, job_id, move || evaluated_at)
    }

    fn run_with_clock<C>(&self, students: &[StudentRecord], job_id: &JobId, clock: C) -> BatchReport
    where
        C: Fn() -> DateTime<Utc> + Send + Sync,
    {
        debug!(%job_id, students = students.len(), parallel = self.parallel, "starting shortlist batch");

        let decisions = map_students(students, self.parallel, |student| {
            let verdict = self.engine.evaluate(student);
            Decision {
                job_id: job_id.clone(),
                student_id: student.student_id.clone(),
                reasons: verdict.reasons,
                nice_hits: verdict.nice_hits,
                evaluated_at: clock(),
            }
        });

        let summary = BatchSummary::from_decisions(&decisions);
        info!(
            %job_id,
            total = summary.total,
            eligible = summary.eligible,
            rejected = summary.rejected,
            "shortlist batch complete"
        );

        BatchReport {
            job_id: job_id.clone(),
            summary,
            decisions,
        }
    }
}

#[cfg(feature = "parallel")]
fn map_students<T, F>(students: &[StudentRecord], parallel: bool, decide: F) -> Vec<T>
where
    T: Send,
    F: Fn(&StudentRecord) -> T + Send + Sync,
{
    use rayon::prelude::*;

    if parallel {
        students.par_iter().map(decide).collect()
    } else {
        students.iter().map(decide).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn map_students<T, F>(students: &[StudentRecord], parallel: bool, decide: F) -> Vec<T>
where
    F: Fn(&StudentRecord) -> T,
{
    if parallel {
        debug!("built without the `parallel` feature, evaluating sequentially");
    }
    students.iter().map(decide).collect()
}
