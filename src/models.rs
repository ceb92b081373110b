use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    F,
}

impl Letter {
    pub fn as_str(self) -> &'static str {
        match self {
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
            Letter::F => "F",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentGrade {
    /// 1-based position of the student in the batch.
    pub student: usize,
    pub score: u8,
    pub grade: Letter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport {
    pub students: Vec<StudentGrade>,
    pub best_score: u8,
    /// Unrounded class average; `average_grade` is derived from this value.
    pub average: f64,
    pub average_display: String,
    pub average_grade: Letter,
}

impl GradeReport {
    /// Tabular form of the report, one row per student plus the average row.
    pub fn export_rows(&self) -> Vec<ExportRow> {
        let mut rows: Vec<ExportRow> = self
            .students
            .iter()
            .map(|student| ExportRow {
                label: format!("Student {}", student.student),
                score: student.score.to_string(),
                grade: student.grade,
            })
            .collect();

        rows.push(ExportRow {
            label: "Average".to_string(),
            score: self.average_display.clone(),
            grade: self.average_grade,
        });
        rows
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "Student")]
    pub label: String,
    #[serde(rename = "Score")]
    pub score: String,
    #[serde(rename = "Grade")]
    pub grade: Letter,
}
