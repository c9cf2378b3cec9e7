use serde::{Deserialize, Serialize};

/// Structured record of one failed eligibility check.
///
/// Variants are declared in evaluation order. Text is produced only through [`summary`],
/// so callers can assert on the parameters rather than on wording.
///
/// [`summary`]: RejectionReason::summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RejectionReason {
    BranchNotAllowed {
        branch: String,
    },
    CgpaBelowMinimum {
        actual: f64,
        required: f64,
    },
    BacklogsNotAllowed {
        backlogs: u32,
    },
    PassoutYearNotAllowed {
        passout_year: i32,
    },
    InsufficientRequiredSkills {
        hits: usize,
        threshold: usize,
        required: usize,
    },
    InsufficientProjects {
        actual: u32,
        required: i64,
    },
}

impl RejectionReason {
    pub const fn kind(&self) -> RuleKind {
        match self {
            RejectionReason::BranchNotAllowed { .. } => RuleKind::Branch,
            RejectionReason::CgpaBelowMinimum { .. } => RuleKind::MinimumCgpa,
            RejectionReason::BacklogsNotAllowed { .. } => RuleKind::Backlogs,
            RejectionReason::PassoutYearNotAllowed { .. } => RuleKind::PassoutYear,
            RejectionReason::InsufficientRequiredSkills { .. } => RuleKind::RequiredSkills,
            RejectionReason::InsufficientProjects { .. } => RuleKind::MinimumProjects,
        }
    }

    pub fn summary(&self) -> String {
        match self {
            RejectionReason::BranchNotAllowed { branch } => {
                format!("Branch '{branch}' not in allowed list.")
            }
            RejectionReason::CgpaBelowMinimum { actual, required } => {
                format!("CGPA {actual} is below minimum required ({required}).")
            }
            RejectionReason::BacklogsNotAllowed { .. } => "Backlogs not allowed.".to_string(),
            RejectionReason::PassoutYearNotAllowed { passout_year } => {
                format!("Passout year {passout_year} not allowed.")
            }
            RejectionReason::InsufficientRequiredSkills {
                hits, threshold, ..
            } => format!("Required skill hits ({hits}) below threshold ({threshold})."),
            RejectionReason::InsufficientProjects { actual, required } => {
                format!("Project count ({actual}) below minimum required ({required}).")
            }
        }
    }
}

/// The six independent eligibility checks, in the order they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Branch,
    MinimumCgpa,
    Backlogs,
    PassoutYear,
    RequiredSkills,
    MinimumProjects,
}

impl RuleKind {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Branch,
            Self::MinimumCgpa,
            Self::Backlogs,
            Self::PassoutYear,
            Self::RequiredSkills,
            Self::MinimumProjects,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Branch => "Branch",
            Self::MinimumCgpa => "Minimum CGPA",
            Self::Backlogs => "Backlogs",
            Self::PassoutYear => "Passout Year",
            Self::RequiredSkills => "Required Skills",
            Self::MinimumProjects => "Minimum Projects",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summaries_render_reporting_text() {
        let skills = RejectionReason::InsufficientRequiredSkills {
            hits: 1,
            threshold: 2,
            required: 3,
        };
        assert_eq!(
            skills.summary(),
            "Required skill hits (1) below threshold (2)."
        );
        assert_eq!(
            RejectionReason::BacklogsNotAllowed { backlogs: 2 }.summary(),
            "Backlogs not allowed."
        );
        assert_eq!(
            RejectionReason::CgpaBelowMinimum {
                actual: 7.2,
                required: 7.5
            }
            .summary(),
            "CGPA 7.2 is below minimum required (7.5)."
        );
        assert_eq!(
            RejectionReason::BranchNotAllowed {
                branch: "MECH".to_string()
            }
            .summary(),
            "Branch 'MECH' not in allowed list."
        );
    }

    #[test]
    fn cgpa_summary_keeps_unrounded_values() {
        let summary = RejectionReason::CgpaBelowMinimum {
            actual: 7.499,
            required: 7.5,
        }
        .summary();
        assert_eq!(summary, "CGPA 7.499 is below minimum required (7.5).");
    }

    #[test]
    fn serializes_with_rule_tag() {
        let reason = RejectionReason::InsufficientProjects {
            actual: 1,
            required: 2,
        };
        let value = serde_json::to_value(&reason).expect("reason serializes");
        assert_eq!(value["rule"], "insufficient_projects");
        assert_eq!(value["required"], 2);
        assert_eq!(reason.kind(), RuleKind::MinimumProjects);
    }
}
