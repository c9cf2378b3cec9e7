use crate::infra::{sample_rules, SAMPLE_JOB_ID, SAMPLE_STUDENTS_CSV};
use clap::Args;
use shortlist::config::ShortlistConfig;
use shortlist::eligibility::{
    export_csv, export_json, BatchReport, BatchRunner, EligibilityRules, JobId, StudentLoader,
};
use shortlist::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ShortlistArgs {
    /// Student CSV (student_id, branch, cgpa, backlogs, passout_year, skills, projects)
    #[arg(long)]
    pub(crate) students: PathBuf,
    /// JSON rule file. Defaults to the sample campus drive rules.
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
    /// Job identifier stamped on every decision
    #[arg(long)]
    pub(crate) job_id: Option<String>,
    /// Write decisions to this CSV file
    #[arg(long)]
    pub(crate) out_csv: Option<PathBuf>,
    /// Write the summary and decisions to this JSON file
    #[arg(long)]
    pub(crate) out_json: Option<PathBuf>,
    /// Evaluate students in parallel
    #[arg(long)]
    pub(crate) parallel: bool,
    /// Rows shown per console table
    #[arg(long)]
    pub(crate) preview: Option<usize>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Rows shown per console table
    #[arg(long)]
    pub(crate) preview: Option<usize>,
    /// Evaluate students in parallel
    #[arg(long)]
    pub(crate) parallel: bool,
}

pub(crate) fn run_shortlist(args: ShortlistArgs, config: &ShortlistConfig) -> Result<(), AppError> {
    let ShortlistArgs {
        students,
        rules,
        job_id,
        out_csv,
        out_json,
        parallel,
        preview,
    } = args;

    let rules = match rules {
        Some(path) => EligibilityRules::from_path(path)?,
        None => sample_rules(),
    };
    let students = StudentLoader::from_path(&students)?;
    let job_id = JobId(job_id.unwrap_or_else(|| SAMPLE_JOB_ID.to_string()));

    let runner = BatchRunner::from_rules(&rules)?.with_parallel(parallel || config.parallel);
    let report = runner.run(&students, &job_id);
    render_shortlist(&report, preview.unwrap_or(config.preview_rows));

    if let Some(path) = out_csv {
        export_csv(&report, &path)?;
        println!("\nDecisions written to {}", path.display());
    }
    if let Some(path) = out_json {
        export_json(&report, &path)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs, config: &ShortlistConfig) -> Result<(), AppError> {
    let students = StudentLoader::from_reader(SAMPLE_STUDENTS_CSV.as_bytes())?;
    let runner =
        BatchRunner::from_rules(&sample_rules())?.with_parallel(args.parallel || config.parallel);

    println!("Placement shortlist demo ({} sample students)", students.len());
    let report = runner.run(&students, &JobId(SAMPLE_JOB_ID.to_string()));
    render_shortlist(&report, args.preview.unwrap_or(config.preview_rows));
    Ok(())
}

fn render_shortlist(report: &BatchReport, preview_rows: usize) {
    for line in shortlist_lines(report, preview_rows) {
        println!("{line}");
    }
}

fn shortlist_lines(report: &BatchReport, preview_rows: usize) -> Vec<String> {
    let summary = report.summary;
    let mut lines = vec![
        format!("\nShortlist results for {}", report.job_id),
        format!("Total students processed: {}", summary.total),
        format!("Eligible: {}", summary.eligible),
        format!("Rejected: {}", summary.rejected),
    ];

    if summary.total == 0 {
        lines.push("No student records were provided.".to_string());
        return lines;
    }

    lines.push(format!(
        "\nEligible students (first {})",
        preview_rows.min(summary.eligible)
    ));
    if summary.eligible == 0 {
        lines.push("- none".to_string());
    }
    for decision in report.eligible().take(preview_rows) {
        lines.push(format!(
            "- {} | eligible | nice-to-have hits {}",
            decision.student_id, decision.nice_hits
        ));
    }

    if summary.rejected == 0 {
        lines.push("\nNo students were rejected in this sample.".to_string());
        return lines;
    }

    lines.push(format!(
        "\nRejected students (first {})",
        preview_rows.min(summary.rejected)
    ));
    for decision in report.rejected().take(preview_rows) {
        lines.push(format!(
            "- {}: {}",
            decision.student_id,
            decision.reason_summaries().join(" ")
        ));
    }

    lines.push("\nRejections by rule".to_string());
    for entry in report.rule_breakdown() {
        lines.push(format!("- {}: {}", entry.rule_label, entry.rejected));
    }

    lines
}
