use std::fmt::Write;

use crate::models::GradeReport;

/// Renders the on-screen summary, one line per student followed by the
/// average line. No trailing newline.
pub fn build_summary(report: &GradeReport) -> String {
    let mut output = String::new();

    for student in report.students.iter() {
        let _ = writeln!(
            output,
            "Student {} score is {} and grade is {}",
            student.student, student.score, student.grade
        );
    }

    let _ = write!(
        output,
        "The average score is {}, a grade of {}",
        report.average_display, report.average_grade
    );

    output
}

pub fn build_json(report: &GradeReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
