use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use class_grade_calculator::export::{self, DEFAULT_OUTPUT};
use class_grade_calculator::slots::{self, SlotBoard};
use class_grade_calculator::validate::MAX_STUDENTS;
use class_grade_calculator::{grading, report, session};

#[derive(Parser)]
#[command(name = "grade-calc")]
#[command(about = "Curve-graded class score calculator with CSV export", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade one batch of scores and export it
    Calculate {
        /// Number of students, as typed
        #[arg(long, allow_hyphen_values = true)]
        students: String,
        /// Score for the next student slot; repeat once per student
        #[arg(long = "score", allow_hyphen_values = true, num_args = 1)]
        scores: Vec<String>,
        #[arg(long, env = "GRADES_OUTPUT", default_value = DEFAULT_OUTPUT)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Show which score slots are active for a student count
    Slots {
        #[arg(long, allow_hyphen_values = true)]
        students: String,
    },
    /// Prompt for the count and scores on stdin, one batch after another
    Session {
        #[arg(long, env = "GRADES_OUTPUT", default_value = DEFAULT_OUTPUT)]
        out: PathBuf,
    },
    /// Print a previously exported grade file
    Show {
        #[arg(long, env = "GRADES_OUTPUT", default_value = DEFAULT_OUTPUT)]
        csv: PathBuf,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Calculate {
            students,
            scores,
            out,
            format,
        } => {
            if scores.len() > MAX_STUDENTS {
                warn!(
                    given = scores.len(),
                    max = MAX_STUDENTS,
                    "Extra scores beyond the slot capacity are ignored"
                );
            }
            let slot_texts: Vec<&str> = scores.iter().take(MAX_STUDENTS).map(String::as_str).collect();

            let graded = match grading::calculate(&students, &slot_texts) {
                Ok(graded) => graded,
                Err(err) => {
                    info!(kind = err.kind(), "Batch rejected");
                    eprintln!("Input Error: {err}");
                    return Ok(ExitCode::FAILURE);
                }
            };

            match format {
                Format::Text => {
                    let mut stdout = std::io::stdout().lock();
                    let mut stderr = std::io::stderr().lock();
                    session::present_report(&mut stdout, &mut stderr, &graded, &out)
                        .context("failed to write summary")?;
                }
                Format::Json => {
                    let json = report::build_json(&graded).context("failed to encode report")?;
                    println!("{json}");
                    if let Err(err) = export::write_report(&out, &graded) {
                        warn!(error = %err, "Grade export failed");
                        eprintln!("Export failed: {err}");
                    }
                }
            }
        }
        Commands::Slots { students } => {
            let board = SlotBoard::default();
            let active = slots::active_slot_count(&students);
            if active == 0 {
                println!("No score slots active.");
            } else {
                println!("Score slots:");
                for index in 0..board.capacity() {
                    if let Some(slot) = board.slot(index) {
                        let state = if slots::is_slot_active(index, &students) {
                            "shown"
                        } else {
                            "hidden"
                        };
                        println!("- {} ({state})", slot.label);
                    }
                }
                if active > board.capacity() {
                    println!(
                        "{} students requested; only {} slots exist.",
                        active,
                        board.capacity()
                    );
                }
            }
        }
        Commands::Session { out } => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut stdout = std::io::stdout().lock();
            let mut stderr = std::io::stderr().lock();
            let graded = session::run_session(&mut input, &mut stdout, &mut stderr, &out)
                .context("session input/output failed")?;
            info!(graded, "Session finished");
        }
        Commands::Show { csv } => {
            let rows = export::read_report(&csv)
                .with_context(|| format!("failed to read {}", csv.display()))?;
            for row in rows.iter() {
                println!("{}: {} ({})", row.label, row.score, row.grade);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
