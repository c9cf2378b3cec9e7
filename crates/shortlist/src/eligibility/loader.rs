use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::info;

use super::domain::{parse_skills, StudentId, StudentRecord};

/// Reads student records from a CSV export of the placement spreadsheet.
///
/// Expected headers: `student_id, branch, cgpa, backlogs, passout_year, skills, projects`.
/// Extra columns are ignored and every field is trimmed.
pub struct StudentLoader;

impl StudentLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<StudentRecord>, StudentImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let students = Self::from_reader(file)?;
        info!(count = students.len(), path = %path.display(), "loaded student records");
        Ok(students)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<StudentRecord>, StudentImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut students = Vec::new();

        for row in csv_reader.deserialize::<StudentRow>() {
            students.push(row?.into_record()?);
        }

        ensure_unique_ids(&students)?;
        Ok(students)
    }
}

/// Reject collections in which a student id repeats.
pub fn ensure_unique_ids(students: &[StudentRecord]) -> Result<(), StudentImportError> {
    let mut seen = HashSet::new();
    for student in students {
        if !seen.insert(&student.student_id) {
            return Err(StudentImportError::DuplicateStudent(
                student.student_id.clone(),
            ));
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct StudentRow {
    student_id: String,
    branch: String,
    cgpa: f64,
    backlogs: u32,
    passout_year: i32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    skills: Option<String>,
    projects: u32,
}

impl StudentRow {
    fn into_record(self) -> Result<StudentRecord, StudentImportError> {
        let student_id = StudentId(self.student_id);
        if !self.cgpa.is_finite() {
            return Err(StudentImportError::InvalidCgpa {
                student_id,
                value: self.cgpa,
            });
        }

        Ok(StudentRecord {
            student_id,
            branch: self.branch,
            cgpa: self.cgpa,
            backlogs: self.backlogs,
            passout_year: self.passout_year,
            skills: parse_skills(self.skills.as_deref()),
            projects: self.projects,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Data-quality failures raised before any record reaches the evaluator.
#[derive(Debug, thiserror::Error)]
pub enum StudentImportError {
    #[error("failed to read student data: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid student CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("student {student_id} has a non-finite cgpa ({value})")]
    InvalidCgpa { student_id: StudentId, value: f64 },
    #[error("student {0} appears more than once")]
    DuplicateStudent(StudentId),
}
