//! Command-line interface module for dirgenie.
//!
//! This module handles all CLI-related functionality including:
//! - Argument definition
//! - Target directory resolution
//! - Orchestration of planning and organization

use crate::config::OrganizeOptions;
use crate::error::OrganizeResult;
use crate::file_organizer::{FileOrganizer, MovePolicy};
use crate::output::OutputFormatter;
use crate::planner;
use crate::report::RunReport;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "dirgenie")]
#[command(about = "Organize the files of a directory into folders by file type")]
#[command(version)]
#[command(after_help = "Examples:
  dirgenie /path/to/directory
  dirgenie ~/Downloads --extensions
  dirgenie ./messy_folder --dry-run")]
pub struct Cli {
    /// Directory to organize
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub directory: PathBuf,

    /// Group by exact file extension instead of category
    #[arg(short, long)]
    pub extensions: bool,

    /// Show what would be done without moving any files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the run report as JSON instead of progress lines
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Runs one reorganization as described by `options`.
///
/// Prints the banner, plans the groups and hands them to the organizer.
/// Returns an error only when the target cannot be used at all; per-file
/// and per-folder failures are counted in the returned report.
///
/// # Examples
///
/// ```no_run
/// use dirgenie::cli::run_cli;
/// use dirgenie::config::OrganizeOptions;
/// use dirgenie::output::OutputFormatter;
///
/// let options = OrganizeOptions::new("/path/to/directory").with_dry_run(true);
/// match run_cli(&options, &mut OutputFormatter::new()) {
///     Ok(report) => println!("{}", report.summary_line()),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run_cli(
    options: &OrganizeOptions,
    output: &mut OutputFormatter,
) -> OrganizeResult<RunReport> {
    let directory = options.resolved_directory()?;
    output.banner(&directory, options.mode, options.dry_run);

    let groups = planner::plan(&directory, options.mode)?;

    if groups.is_empty() {
        output.plain(&format!("No files found in '{}'.", directory.display()));
        return Ok(RunReport::new(&directory, options.mode, options.dry_run));
    }

    output.group_counts(&groups);

    let policy = MovePolicy::from_dry_run(options.dry_run);
    let report = FileOrganizer::new(&directory, policy).organize(&groups, options.mode, output);
    tracing::info!(
        moved = report.moved,
        errors = report.errors,
        groups = report.groups,
        dry_run = report.dry_run,
        "run finished"
    );

    output.summary(&report);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrganizeError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_requires_directory() {
        assert!(Cli::try_parse_from(["dirgenie"]).is_err());
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::try_parse_from(["dirgenie", ".", "-e", "-n", "-v"]).expect("Parse failed");
        assert!(cli.extensions);
        assert!(cli.dry_run);
        assert!(cli.verbose);
    }

    #[test]
    fn test_run_cli_missing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let options = OrganizeOptions::new(temp_dir.path().join("nope"));

        let result = run_cli(&options, &mut OutputFormatter::quiet());
        assert!(matches!(result, Err(OrganizeError::PathNotFound { .. })));
    }

    #[test]
    fn test_run_cli_empty_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let options = OrganizeOptions::new(temp_dir.path());

        let report = run_cli(&options, &mut OutputFormatter::quiet()).expect("Run failed");
        assert_eq!(report.files, 0);
        assert!(report.actions.is_empty());
        assert_eq!(fs::read_dir(temp_dir.path()).expect("Read failed").count(), 0);
    }
}
