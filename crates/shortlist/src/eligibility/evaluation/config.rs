use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Job eligibility rules as supplied by the placement cell.
///
/// Every field is optional; absent or `null` values resolve to the documented default when the
/// rules are compiled into a [`RuleSet`]. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EligibilityRules {
    /// Allowed branches. Empty or absent means any branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<String>>,
    /// Inclusive CGPA floor, `0.0` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_cgpa: Option<f64>,
    /// Whether students with active backlogs may apply, `true` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_backlogs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub req_skills: Option<Vec<String>>,
    /// Preferred skills, counted for reporting only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nice_skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passout_years: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects_min: Option<i64>,
}

impl EligibilityRules {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RuleConfigError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RuleConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Resolve defaults and freeze the rules into the snapshot shared by a batch.
    pub fn compile(&self) -> Result<RuleSet, RuleConfigError> {
        let min_cgpa = self.min_cgpa.unwrap_or(0.0);
        if !min_cgpa.is_finite() {
            return Err(RuleConfigError::NonFiniteMinCgpa(min_cgpa));
        }

        let req_skills: BTreeSet<String> = collect_set(self.req_skills.as_deref());
        let required_skill_threshold = required_skill_threshold(req_skills.len());

        Ok(RuleSet {
            branches: collect_set(self.branches.as_deref()),
            min_cgpa,
            allow_backlogs: self.allow_backlogs.unwrap_or(true),
            req_skills,
            required_skill_threshold,
            nice_skills: collect_set(self.nice_skills.as_deref()),
            passout_years: self
                .passout_years
                .as_deref()
                .unwrap_or_default()
                .iter()
                .copied()
                .collect(),
            projects_min: self.projects_min,
        })
    }
}

fn collect_set(values: Option<&[String]>) -> BTreeSet<String> {
    values.unwrap_or_default().iter().cloned().collect()
}

/// Minimum required-skill hits: 60% of the required set rounded up, never below one.
///
/// Computed as `ceil(3n / 5)` in integers so that exact multiples do not drift upward.
pub fn required_skill_threshold(required: usize) -> usize {
    if required == 0 {
        return 0;
    }
    ((3 * required).div_ceil(5)).max(1)
}

/// Immutable, fully-defaulted rule snapshot evaluated against every student of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    branches: BTreeSet<String>,
    min_cgpa: f64,
    allow_backlogs: bool,
    req_skills: BTreeSet<String>,
    required_skill_threshold: usize,
    nice_skills: BTreeSet<String>,
    passout_years: BTreeSet<i32>,
    projects_min: Option<i64>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            branches: BTreeSet::new(),
            min_cgpa: 0.0,
            allow_backlogs: true,
            req_skills: BTreeSet::new(),
            required_skill_threshold: 0,
            nice_skills: BTreeSet::new(),
            passout_years: BTreeSet::new(),
            projects_min: None,
        }
    }
}

impl RuleSet {
    pub fn branches(&self) -> &BTreeSet<String> {
        &self.branches
    }

    pub fn min_cgpa(&self) -> f64 {
        self.min_cgpa
    }

    pub fn allow_backlogs(&self) -> bool {
        self.allow_backlogs
    }

    pub fn req_skills(&self) -> &BTreeSet<String> {
        &self.req_skills
    }

    /// Zero when no required skills are configured.
    pub fn required_skill_threshold(&self) -> usize {
        self.required_skill_threshold
    }

    pub fn nice_skills(&self) -> &BTreeSet<String> {
        &self.nice_skills
    }

    pub fn passout_years(&self) -> &BTreeSet<i32> {
        &self.passout_years
    }

    pub fn projects_min(&self) -> Option<i64> {
        self.projects_min
    }
}

/// Failure to load or compile an eligibility rule configuration.
#[derive(Debug, thiserror::Error)]
pub enum RuleConfigError {
    #[error("failed to read rule configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid rule configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("min_cgpa must be a finite number, got {0}")]
    NonFiniteMinCgpa(f64),
}
