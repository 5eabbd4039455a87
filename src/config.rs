//! Run options.
//!
//! dirgenie keeps no configuration file; everything a run needs comes from
//! the command line and is collected in [`OrganizeOptions`].

use crate::cli::Cli;
use crate::error::OrganizeResult;
use crate::file_category::GroupingMode;
use std::path::{Path, PathBuf};

/// Options for a single reorganization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizeOptions {
    /// Target directory as given by the user (may be relative).
    pub directory: PathBuf,
    pub mode: GroupingMode,
    /// Preview only; never touch the filesystem.
    pub dry_run: bool,
    /// Print the run report as JSON instead of human-readable lines.
    pub json: bool,
    pub verbose: bool,
    pub color: bool,
}

impl OrganizeOptions {
    /// Options for organizing `directory` by category, for real.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            mode: GroupingMode::Categories,
            dry_run: false,
            json: false,
            verbose: false,
            color: true,
        }
    }

    pub fn with_mode(mut self, mode: GroupingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the target directory as an absolute path.
    ///
    /// The path is made absolute against the current directory without
    /// resolving symlinks; it does not have to exist.
    pub fn resolved_directory(&self) -> OrganizeResult<PathBuf> {
        resolve_directory(&self.directory)
    }
}

impl From<Cli> for OrganizeOptions {
    fn from(cli: Cli) -> Self {
        Self {
            directory: cli.directory,
            mode: if cli.extensions {
                GroupingMode::Extensions
            } else {
                GroupingMode::Categories
            },
            dry_run: cli.dry_run,
            json: cli.json,
            verbose: cli.verbose,
            color: !cli.no_color,
        }
    }
}

/// Makes `path` absolute relative to the current working directory.
pub fn resolve_directory(path: &Path) -> OrganizeResult<PathBuf> {
    Ok(std::path::absolute(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_options_from_cli_defaults() {
        let cli = Cli::parse_from(["dirgenie", "downloads"]);
        let options = OrganizeOptions::from(cli);
        assert_eq!(options, OrganizeOptions::new("downloads"));
    }

    #[test]
    fn test_options_from_cli_flags() {
        let cli = Cli::parse_from([
            "dirgenie",
            "downloads",
            "--extensions",
            "--dry-run",
            "--json",
            "--no-color",
        ]);
        let options = OrganizeOptions::from(cli);
        assert_eq!(options.mode, GroupingMode::Extensions);
        assert!(options.dry_run);
        assert!(options.json);
        assert!(!options.color);
    }

    #[test]
    fn test_resolved_directory_is_absolute() {
        let options = OrganizeOptions::new("some/relative/dir");
        let resolved = options.resolved_directory().expect("Resolve failed");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("some/relative/dir"));
    }
}
