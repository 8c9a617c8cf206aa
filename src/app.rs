//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the assessment pipeline
//! - prints summaries/comparison bars
//! - writes optional report and session exports
//! - launches the TUI

use chrono::Local;
use clap::Parser;

use crate::cli::{AssessArgs, CohortArgs, Command, ReportArgs};
use crate::data::cohort::CohortConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `cardio` binary.
pub fn run() -> Result<(), AppError> {
    // We want a bare `cardio` to behave like `cardio tui`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Assess(args) => handle_assess(args),
        Command::Report(args) => handle_report(args),
        Command::Cohort(args) => handle_cohort(args),
        Command::Tui => crate::tui::run(),
    }
}

fn handle_assess(args: AssessArgs) -> Result<(), AppError> {
    let input = args.to_input();
    let run = pipeline::run_assessment(&input)?;

    println!("{}", crate::report::format_summary(&run.input, &run.assessment));

    if !args.no_chart {
        println!(
            "{}",
            crate::plot::render_comparison_bars(&run.metrics, args.width)
        );
    }

    // Optional exports.
    let now = Local::now();
    if let Some(path) = &args.export {
        let report = crate::report::format_report(&run.input, &run.assessment, now);
        crate::io::export::write_report_txt(path, &report)?;
        println!("Wrote report: {}", path.display());
    }
    if let Some(path) = &args.export_session {
        crate::io::session::write_session_json(path, &run.input, &run.assessment, now)?;
        println!("Wrote session: {}", path.display());
    }

    Ok(())
}

fn handle_report(args: ReportArgs) -> Result<(), AppError> {
    let session = crate::io::session::read_session_json(&args.session)?;

    // Re-derive the assessment from the stored input; the stored percentage
    // is only used as a consistency check against schema drift.
    let run = pipeline::run_assessment(&session.input)?;
    if run.assessment.percentage != session.percentage {
        return Err(AppError::new(
            2,
            format!(
                "Session score mismatch: file says {}%, recomputed {}%. \
                 The file may come from an incompatible version.",
                session.percentage, run.assessment.percentage
            ),
        ));
    }

    let report = crate::report::format_report(&run.input, &run.assessment, Local::now());
    match &args.out {
        Some(path) => {
            crate::io::export::write_report_txt(path, &report)?;
            println!("Wrote report: {}", path.display());
        }
        None => println!("{report}"),
    }

    Ok(())
}

fn handle_cohort(args: CohortArgs) -> Result<(), AppError> {
    let config = CohortConfig {
        count: args.count,
        seed: args.seed,
        age_min: args.age_min,
        age_max: args.age_max,
    };

    let cohort = crate::data::cohort::generate_cohort(&config)?;
    let summary = crate::data::cohort::summarize(&cohort);
    println!("{}", crate::report::format_cohort_summary(&summary));

    Ok(())
}

/// Rewrite argv so `cardio` defaults to `cardio tui`.
///
/// Rules:
/// - `cardio`                     -> `cardio tui`
/// - `cardio --help/--version/-h` -> unchanged (show top-level help/version)
/// - `cardio <subcommand> ...`    -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    // Otherwise, leave as-is and let clap report unknown subcommands.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_rewrites_to_tui() {
        assert_eq!(rewrite_args(argv(&["cardio"])), argv(&["cardio", "tui"]));
    }

    #[test]
    fn help_version_and_subcommands_pass_through() {
        assert_eq!(rewrite_args(argv(&["cardio", "--help"])), argv(&["cardio", "--help"]));
        assert_eq!(rewrite_args(argv(&["cardio", "-V"])), argv(&["cardio", "-V"]));
        assert_eq!(
            rewrite_args(argv(&["cardio", "cohort", "--seed", "7"])),
            argv(&["cardio", "cohort", "--seed", "7"])
        );
    }
}
