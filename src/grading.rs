use tracing::debug;

use crate::error::InputError;
use crate::models::{GradeReport, Letter, StudentGrade};
use crate::validate;

/// Grades `score` on a curve relative to the best score of the batch.
///
/// | Distance below best | Grade |
/// |---------------------|-------|
/// | <= 10               | A     |
/// | <= 20               | B     |
/// | <= 30               | C     |
/// | <= 40               | D     |
/// | > 40                | F     |
pub fn grade(score: f64, best_score: f64) -> Letter {
    match score {
        s if s >= best_score - 10.0 => Letter::A,
        s if s >= best_score - 20.0 => Letter::B,
        s if s >= best_score - 30.0 => Letter::C,
        s if s >= best_score - 40.0 => Letter::D,
        _ => Letter::F,
    }
}

pub fn average(scores: &[u8]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let total: u32 = scores.iter().map(|&score| u32::from(score)).sum();
    Some(f64::from(total) / scores.len() as f64)
}

/// Builds the report for an already validated batch. Returns `None` for an
/// empty batch.
pub fn build_report(scores: &[u8]) -> Option<GradeReport> {
    let best_score = scores.iter().copied().max()?;
    let best = f64::from(best_score);

    let students = scores
        .iter()
        .enumerate()
        .map(|(index, &score)| StudentGrade {
            student: index + 1,
            score,
            grade: grade(f64::from(score), best),
        })
        .collect();

    let average = average(scores)?;

    Some(GradeReport {
        students,
        best_score,
        average,
        average_display: format!("{average:.2}"),
        average_grade: grade(average, best),
    })
}

/// Validates the raw inputs and grades the batch.
pub fn calculate<S: AsRef<str>>(
    count_text: &str,
    score_texts: &[S],
) -> Result<GradeReport, InputError> {
    let scores = validate::validate_inputs(count_text, score_texts)?;
    // Validation guarantees at least one score.
    let report = build_report(&scores).ok_or(InputError::InvalidCount)?;

    debug!(
        students = report.students.len(),
        best_score = report.best_score,
        average = report.average,
        average_grade = %report.average_grade,
        "Batch graded"
    );

    Ok(report)
}
