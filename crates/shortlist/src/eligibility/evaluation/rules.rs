use std::collections::BTreeSet;

use super::super::domain::StudentRecord;
use super::config::RuleSet;
use super::reasons::RejectionReason;

pub(crate) struct SkillSignals {
    pub required_hits: usize,
    pub nice_hits: usize,
}

/// Apply every check in order. No check short-circuits another.
pub(crate) fn check_student(
    student: &StudentRecord,
    rules: &RuleSet,
) -> (Vec<RejectionReason>, SkillSignals) {
    let mut reasons = Vec::new();

    if !rules.branches().is_empty() && !rules.branches().contains(&student.branch) {
        reasons.push(RejectionReason::BranchNotAllowed {
            branch: student.branch.clone(),
        });
    }

    if student.cgpa < rules.min_cgpa() {
        reasons.push(RejectionReason::CgpaBelowMinimum {
            actual: student.cgpa,
            required: rules.min_cgpa(),
        });
    }

    if !rules.allow_backlogs() && student.backlogs > 0 {
        reasons.push(RejectionReason::BacklogsNotAllowed {
            backlogs: student.backlogs,
        });
    }

    if !rules.passout_years().is_empty() && !rules.passout_years().contains(&student.passout_year)
    {
        reasons.push(RejectionReason::PassoutYearNotAllowed {
            passout_year: student.passout_year,
        });
    }

    let required_hits = overlap(rules.req_skills(), &student.skills);
    if !rules.req_skills().is_empty() && required_hits < rules.required_skill_threshold() {
        reasons.push(RejectionReason::InsufficientRequiredSkills {
            hits: required_hits,
            threshold: rules.required_skill_threshold(),
            required: rules.req_skills().len(),
        });
    }

    if let Some(required) = rules.projects_min() {
        if i64::from(student.projects) < required {
            reasons.push(RejectionReason::InsufficientProjects {
                actual: student.projects,
                required,
            });
        }
    }

    let signals = SkillSignals {
        required_hits,
        nice_hits: overlap(rules.nice_skills(), &student.skills),
    };

    (reasons, signals)
}

fn overlap(wanted: &BTreeSet<String>, held: &BTreeSet<String>) -> usize {
    wanted.intersection(held).count()
}
