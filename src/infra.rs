use metrics_exporter_prometheus::PrometheusHandle;
use shortlist::config::ShortlistConfig;
use shortlist::eligibility::EligibilityRules;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub(crate) const SAMPLE_JOB_ID: &str = "upskalor-tech";

/// Bundled spreadsheet export evaluated by `demo`.
pub(crate) const SAMPLE_STUDENTS_CSV: &str = include_str!("../data/students.csv");

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) shortlist: ShortlistConfig,
}

/// Rules of the reference campus drive, mirrored in `data/rules.json`.
pub(crate) fn sample_rules() -> EligibilityRules {
    EligibilityRules {
        branches: Some(vec!["CSE".to_string(), "IT".to_string(), "ECE".to_string()]),
        min_cgpa: Some(7.5),
        allow_backlogs: Some(false),
        req_skills: Some(vec![
            "Python".to_string(),
            "SQL".to_string(),
            "ML".to_string(),
        ]),
        nice_skills: Some(vec![
            "AI".to_string(),
            "Cloud".to_string(),
            "Git".to_string(),
        ]),
        passout_years: Some(vec![2025]),
        projects_min: Some(2),
    }
}
