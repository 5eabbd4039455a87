//! Output formatting and styling module.
//!
//! All console output of a run goes through [`OutputFormatter`]: the banner,
//! the per-group counts, per-action lines, errors, the progress bar and the
//! final summary. A quiet formatter keeps stdout clean and prints only
//! errors to stderr, which is what `--json` and the tests use.

use crate::file_category::GroupingMode;
use crate::planner::FileGroups;
use crate::report::RunReport;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Manages all CLI output with consistent styling and formatting.
///
/// Lines are printed through the active progress bar (if any) so the bar is
/// redrawn below them instead of being torn.
#[derive(Default)]
pub struct OutputFormatter {
    quiet: bool,
    progress: Option<ProgressBar>,
}

impl OutputFormatter {
    /// Creates a formatter that prints to the terminal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a formatter that prints errors only.
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            progress: None,
        }
    }

    // Errors always reach stderr; quiet only silences stdout.
    fn emits(&self, stream: Stream) -> bool {
        match stream {
            Stream::Stdout => !self.quiet,
            Stream::Stderr => true,
        }
    }

    fn emit(&self, line: String) {
        if !self.emits(Stream::Stdout) {
            return;
        }
        match &self.progress {
            Some(pb) => pb.suspend(|| println!("{}", line)),
            None => println!("{}", line),
        }
    }

    fn emit_err(&self, line: String) {
        if !self.emits(Stream::Stderr) {
            return;
        }
        match &self.progress {
            Some(pb) => pb.suspend(|| eprintln!("{}", line)),
            None => eprintln!("{}", line),
        }
    }

    /// Prints a success message in green with a checkmark.
    pub fn success(&self, message: &str) {
        self.emit(format!("{} {}", "✓".green(), message));
    }

    /// Prints an error message in red with an X mark, on stderr.
    pub fn error(&self, message: &str) {
        self.emit_err(format!("{} {}", "✗".red(), message));
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(&self, message: &str) {
        self.emit(format!("{} {}", "⚠".yellow(), message));
    }

    /// Prints an info message in cyan.
    pub fn info(&self, message: &str) {
        self.emit(format!("{}", message.cyan()));
    }

    /// Prints a regular message without styling.
    pub fn plain(&self, message: &str) {
        self.emit(message.to_string());
    }

    /// Prints a dry-run notice message.
    pub fn dry_run_notice(&self, message: &str) {
        self.emit(format!("{}", format!("[DRY RUN] {}", message).yellow()));
    }

    /// Prints the pre-run banner: target, grouping mode and execution mode.
    pub fn banner(&self, directory: &Path, mode: GroupingMode, dry_run: bool) {
        self.info(&format!("Organizing directory: {}", directory.display()));
        self.plain(&format!("Grouping by: {}", mode.label()));
        self.plain(&format!(
            "Mode: {}",
            if dry_run { "Dry run" } else { "Execute" }
        ));
        self.plain(&"-".repeat(50));
    }

    /// Prints the number of files per group before anything is moved.
    pub fn group_counts(&self, groups: &FileGroups) {
        self.plain(&format!(
            "Found {} {} in {} different {}:",
            groups.file_count(),
            if groups.file_count() == 1 { "file" } else { "files" },
            groups.group_count(),
            if groups.group_count() == 1 {
                "type/category"
            } else {
                "types/categories"
            }
        ));

        let width = groups
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);

        for (name, files) in groups.iter() {
            let file_word = if files.len() == 1 { "file" } else { "files" };
            self.plain(&format!(
                "  {:<width$} : {} {}",
                name,
                files.len().to_string().green(),
                file_word,
                width = width
            ));
        }
    }

    /// Starts a progress bar for `total` file moves.
    pub fn start_progress(&mut self, total: u64) {
        if self.quiet {
            return;
        }
        self.progress = Some(Self::create_progress_bar(total));
    }

    /// Advances the progress bar by one file.
    pub fn advance(&self) {
        if let Some(pb) = &self.progress {
            pb.inc(1);
        }
    }

    /// Clears the progress bar.
    pub fn finish_progress(&mut self) {
        if let Some(pb) = self.progress.take() {
            pb.finish_and_clear();
        }
    }

    /// Creates and returns a progress bar for file operations.
    fn create_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░");
        pb.set_style(style);
        pb
    }

    /// Prints the final summary line of a run.
    pub fn summary(&self, report: &RunReport) {
        let line = report.summary_line();
        self.emit(String::new());
        if report.dry_run {
            self.dry_run_notice(&format!("Dry run complete! {}", line));
        } else if report.has_errors() {
            self.warning(&format!("Organization finished with errors. {}", line));
        } else {
            self.success(&format!("Organization complete! {}", line));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_formatter_has_no_progress() {
        let mut output = OutputFormatter::quiet();
        output.start_progress(10);
        output.advance();
        assert!(output.progress.is_none());
        output.finish_progress();
    }

    #[test]
    fn test_quiet_formatter_still_prints_errors() {
        let quiet = OutputFormatter::quiet();
        assert!(!quiet.emits(Stream::Stdout));
        assert!(quiet.emits(Stream::Stderr));

        let normal = OutputFormatter::new();
        assert!(normal.emits(Stream::Stdout));
        assert!(normal.emits(Stream::Stderr));
    }

    #[test]
    fn test_progress_lifecycle() {
        let mut output = OutputFormatter::new();
        output.start_progress(2);
        output.advance();
        assert!(output.progress.is_some());
        output.finish_progress();
        assert!(output.progress.is_none());
    }
}
