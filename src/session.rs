//! Line-oriented presenter: prompts for the student count and each visible
//! slot, grades the batch, shows the summary and exports it.

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::error::InputError;
use crate::export;
use crate::grading;
use crate::models::GradeReport;
use crate::report;
use crate::slots::SlotBoard;

#[derive(Debug)]
pub enum BatchOutcome {
    Graded { report: GradeReport, exported: bool },
    Rejected(InputError),
}

/// Prints the summary to `output`, then exports. An export failure goes to
/// `errors` and never hides the summary.
pub fn present_report<W: Write, E: Write>(
    output: &mut W,
    errors: &mut E,
    report: &GradeReport,
    export_path: &Path,
) -> io::Result<bool> {
    writeln!(output, "{}", report::build_summary(report))?;
    output.flush()?;

    match export::write_report(export_path, report) {
        Ok(_) => Ok(true),
        Err(err) => {
            warn!(error = %err, "Grade export failed");
            writeln!(errors, "Export failed: {err}")?;
            Ok(false)
        }
    }
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;

    // Undecodable bytes become U+FFFD and then fail validation like any other bad text.
    let mut raw = Vec::new();
    if input.read_until(b'\n', &mut raw)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&raw);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Runs one batch. Prompts and the summary go to `output`, rejections and
/// export failures to `errors`. Returns `None` when input ends before the
/// batch is complete.
pub fn run_batch<R: BufRead, W: Write, E: Write>(
    input: &mut R,
    output: &mut W,
    errors: &mut E,
    export_path: &Path,
) -> io::Result<Option<BatchOutcome>> {
    let Some(count_text) = prompt(input, output, "Number of students: ")? else {
        return Ok(None);
    };

    let mut board = SlotBoard::new();
    let visible: Vec<(usize, String)> = board
        .visible_slots(&count_text)
        .map(|(index, slot)| (index, slot.label.clone()))
        .collect();

    for (index, label) in visible {
        let Some(text) = prompt(input, output, &format!("{label} score: "))? else {
            return Ok(None);
        };
        board.set_text(index, text);
    }

    match grading::calculate(&count_text, &board.texts()) {
        Ok(report) => {
            let exported = present_report(output, errors, &report, export_path)?;
            Ok(Some(BatchOutcome::Graded { report, exported }))
        }
        Err(err) => {
            writeln!(errors, "Input Error: {err}")?;
            Ok(Some(BatchOutcome::Rejected(err)))
        }
    }
}

/// Repeats batches until input is exhausted. Returns how many were graded.
pub fn run_session<R: BufRead, W: Write, E: Write>(
    input: &mut R,
    output: &mut W,
    errors: &mut E,
    export_path: &Path,
) -> io::Result<usize> {
    let mut graded = 0usize;

    while let Some(outcome) = run_batch(input, output, errors, export_path)? {
        match outcome {
            BatchOutcome::Graded { .. } => graded += 1,
            BatchOutcome::Rejected(err) => info!(kind = err.kind(), "Batch rejected"),
        }
        writeln!(output)?;
    }

    Ok(graded)
}
