mod config;
mod reasons;
mod rules;

pub use config::{required_skill_threshold, EligibilityRules, RuleConfigError, RuleSet};
pub use reasons::{RejectionReason, RuleKind};

use super::domain::StudentRecord;
use serde::{Deserialize, Serialize};

/// Stateless evaluator bound to one frozen rule snapshot.
#[derive(Debug, Clone)]
pub struct EligibilityEngine {
    rules: RuleSet,
}

impl EligibilityEngine {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn from_rules(rules: &EligibilityRules) -> Result<Self, RuleConfigError> {
        Ok(Self::new(rules.compile()?))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn evaluate(&self, student: &StudentRecord) -> EligibilityVerdict {
        evaluate(student, &self.rules)
    }
}

/// Decide eligibility of one student against one rule set.
///
/// Pure: identical inputs always yield identical verdicts.
pub fn evaluate(student: &StudentRecord, rules: &RuleSet) -> EligibilityVerdict {
    let (reasons, signals) = rules::check_student(student, rules);

    EligibilityVerdict {
        reasons,
        nice_hits: signals.nice_hits,
        required_skill_hits: signals.required_hits,
    }
}

/// Evaluation output: the ordered failed checks plus skill overlap counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    pub reasons: Vec<RejectionReason>,
    pub nice_hits: usize,
    pub required_skill_hits: usize,
}

impl EligibilityVerdict {
    pub fn is_eligible(&self) -> bool {
        self.reasons.is_empty()
    }

    pub fn reason_summaries(&self) -> Vec<String> {
        self.reasons.iter().map(RejectionReason::summary).collect()
    }
}
