use chrono::{DateTime, TimeZone, Utc};

use crate::eligibility::domain::{JobId, StudentId, StudentRecord};
use crate::eligibility::evaluation::{EligibilityRules, RuleSet};

pub(super) fn skills(names: &[&str]) -> std::collections::BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

pub(super) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Campus drive rules: CSE only, 7.5 floor, no backlogs, three core skills, two projects.
pub(super) fn drive_rules() -> EligibilityRules {
    EligibilityRules {
        branches: Some(strings(&["CSE"])),
        min_cgpa: Some(7.5),
        allow_backlogs: Some(false),
        req_skills: Some(strings(&["Python", "SQL", "ML"])),
        nice_skills: None,
        passout_years: None,
        projects_min: Some(2),
    }
}

pub(super) fn full_rules() -> EligibilityRules {
    EligibilityRules {
        branches: Some(strings(&["CSE", "IT", "ECE"])),
        passout_years: Some(vec![2025]),
        nice_skills: Some(strings(&["AI", "Cloud", "Git"])),
        ..drive_rules()
    }
}

pub(super) fn compiled(rules: &EligibilityRules) -> RuleSet {
    rules.compile().expect("rules compile")
}

/// Student who clears every check of [`drive_rules`].
pub(super) fn strong_student(id: &str) -> StudentRecord {
    StudentRecord {
        student_id: StudentId(id.to_string()),
        branch: "CSE".to_string(),
        cgpa: 8.0,
        backlogs: 0,
        passout_year: 2025,
        skills: skills(&["Python", "SQL"]),
        projects: 3,
    }
}

/// Student who fails every check of [`full_rules`].
pub(super) fn weak_student(id: &str) -> StudentRecord {
    StudentRecord {
        student_id: StudentId(id.to_string()),
        branch: "MECH".to_string(),
        cgpa: 6.2,
        backlogs: 3,
        passout_year: 2023,
        skills: skills(&["AutoCAD"]),
        projects: 0,
    }
}

pub(super) fn job_id() -> JobId {
    JobId("upskalor-tech".to_string())
}

pub(super) fn evaluated_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, 15, 10, 0, 0)
        .single()
        .expect("valid timestamp")
}
