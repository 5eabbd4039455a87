//! File organization: moving planned groups into their folders.
//!
//! This module consumes the [`FileGroups`] produced by the planner. For every
//! group, in sorted order, it prepares the destination folder and moves each
//! file into it under a name that does not collide with anything already
//! there. The same code path serves dry runs; only the two places that touch
//! the filesystem look at the [`MovePolicy`].

use crate::error::OrganizeError;
use crate::file_category::GroupingMode;
use crate::output::OutputFormatter;
use crate::planner::{FileEntry, FileGroups};
use crate::report::{ActionStatus, RunReport};
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Whether the organizer may touch the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovePolicy {
    /// Report what would happen without creating or moving anything.
    DryRun,
    /// Create folders and move files.
    Execute,
}

impl MovePolicy {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run {
            MovePolicy::DryRun
        } else {
            MovePolicy::Execute
        }
    }

    pub fn is_dry_run(&self) -> bool {
        *self == MovePolicy::DryRun
    }
}

/// Destination names taken so far in this run.
///
/// A path is taken when something exists there on disk or when an earlier
/// move of this run (real or simulated) already claimed it. Dry runs
/// therefore pick the same names a real run would.
#[derive(Debug, Default)]
pub struct DestinationState {
    claimed: HashSet<PathBuf>,
}

impl DestinationState {
    /// Returns true if `path` exists or was claimed earlier in this run.
    pub fn is_taken(&self, path: &Path) -> bool {
        self.claimed.contains(path) || fs::symlink_metadata(path).is_ok()
    }

    /// Marks `path` as used by this run.
    pub fn claim(&mut self, path: PathBuf) {
        self.claimed.insert(path);
    }

    /// Picks a free path for `file_name` inside `folder`.
    ///
    /// `report.pdf` stays as is when free, otherwise becomes `report_1.pdf`,
    /// `report_2.pdf` and so on. Names without an extension get the counter
    /// appended at the end.
    pub fn unique_path(&self, folder: &Path, file_name: &OsStr) -> PathBuf {
        let candidate = folder.join(file_name);
        if !self.is_taken(&candidate) {
            return candidate;
        }

        let mut counter = 1usize;
        loop {
            let candidate = folder.join(numbered_name(file_name, counter));
            if !self.is_taken(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }
}

/// Builds `stem_N.ext` (or `name_N` when there is no extension).
fn numbered_name(file_name: &OsStr, counter: usize) -> OsString {
    let path = Path::new(file_name);
    let mut name = OsString::new();
    match (path.file_stem(), path.extension()) {
        (Some(stem), Some(ext)) if !ext.is_empty() => {
            name.push(stem);
            name.push(format!("_{counter}."));
            name.push(ext);
        }
        _ => {
            name.push(file_name);
            name.push(format!("_{counter}"));
        }
    }
    name
}

/// Moves one file, leaving the source in place if the move fails.
///
/// A plain rename is tried first. When source and destination live on
/// different devices the file is copied and the source removed; a failed copy
/// or removal deletes the partial destination again.
pub fn move_file(source: &Path, destination: &Path) -> io::Result<()> {
    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            tracing::warn!(
                error = %e,
                src = %source.display(),
                dest = %destination.display(),
                "rename crossed devices, falling back to copy+remove"
            );
            if let Err(copy_err) = fs::copy(source, destination) {
                let _ = fs::remove_file(destination);
                return Err(copy_err);
            }
            if let Err(remove_err) = fs::remove_file(source) {
                let _ = fs::remove_file(destination);
                return Err(remove_err);
            }
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Organizes planned groups into subfolders of a base directory.
pub struct FileOrganizer {
    directory: PathBuf,
    policy: MovePolicy,
    destinations: DestinationState,
}

impl FileOrganizer {
    /// Creates an organizer for `directory`.
    pub fn new(directory: &Path, policy: MovePolicy) -> Self {
        Self {
            directory: directory.to_path_buf(),
            policy,
            destinations: DestinationState::default(),
        }
    }

    /// Processes every group in sorted order and returns the run report.
    ///
    /// Folder and file failures are recorded in the report and never stop
    /// the run.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dirgenie::file_category::GroupingMode;
    /// use dirgenie::file_organizer::{FileOrganizer, MovePolicy};
    /// use dirgenie::output::OutputFormatter;
    /// use dirgenie::planner;
    /// use std::path::Path;
    ///
    /// let dir = Path::new("/path/to/downloads");
    /// let groups = planner::plan(dir, GroupingMode::Categories).unwrap();
    /// let mut output = OutputFormatter::new();
    /// let report = FileOrganizer::new(dir, MovePolicy::DryRun)
    ///     .organize(&groups, GroupingMode::Categories, &mut output);
    /// println!("{}", report.summary_line());
    /// ```
    pub fn organize(
        &mut self,
        groups: &FileGroups,
        mode: GroupingMode,
        output: &mut OutputFormatter,
    ) -> RunReport {
        let mut report = RunReport::new(&self.directory, mode, self.policy.is_dry_run());
        report.files = groups.file_count();
        report.groups = groups.group_count();

        if self.policy.is_dry_run() {
            output.plain("");
            output.dry_run_notice("No files will be moved. Here's what would happen:");
        } else {
            output.start_progress(report.files as u64);
        }

        for (group, files) in groups.iter() {
            output.plain("");
            let Some(folder) = self.prepare_folder(group, &mut report, output) else {
                for _ in files {
                    output.advance();
                }
                continue;
            };

            for entry in files {
                self.move_entry(group, &folder, entry, &mut report, output);
            }
        }

        output.finish_progress();
        report
    }

    /// Makes sure the group's folder is usable and returns its path.
    ///
    /// Returns `None` when the folder could not be created; the failure is
    /// recorded as a single error for the whole group.
    fn prepare_folder(
        &self,
        group: &str,
        report: &mut RunReport,
        output: &OutputFormatter,
    ) -> Option<PathBuf> {
        let folder = self.directory.join(group);

        if self.policy.is_dry_run() {
            output.plain(&format!("Would create folder: {}", folder.display()));
            report.record_folder(group, &folder, ActionStatus::Planned);
            return Some(folder);
        }

        let status = match fs::metadata(&folder) {
            Ok(meta) if meta.is_dir() => Ok(ActionStatus::Existing),
            Ok(_) => Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "a file with this name is in the way",
            )),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                fs::create_dir_all(&folder).map(|()| ActionStatus::Created)
            }
            Err(e) => Err(e),
        };

        match status {
            Ok(status) => {
                if status == ActionStatus::Created {
                    output.plain(&format!("Created folder: {}", folder.display()));
                } else {
                    output.plain(&format!("Using existing folder: {}", folder.display()));
                }
                tracing::debug!(folder = %folder.display(), ?status, "folder ready");
                report.record_folder(group, &folder, status);
                Some(folder)
            }
            Err(source) => {
                let err = OrganizeError::FolderCreationFailed {
                    path: folder,
                    source,
                };
                output.error(&format!("{}; skipping group {}", err, group));
                tracing::debug!(error = %err, group, "skipping group");
                report.record_failure(group, &err);
                None
            }
        }
    }

    /// Moves (or pretends to move) one file into `folder`.
    fn move_entry(
        &mut self,
        group: &str,
        folder: &Path,
        entry: &FileEntry,
        report: &mut RunReport,
        output: &OutputFormatter,
    ) {
        let file_name = entry
            .path
            .file_name()
            .unwrap_or_else(|| OsStr::new(&entry.name));
        let destination = self.destinations.unique_path(folder, file_name);
        let shown = format!(
            "{} -> {}/{}",
            entry.name,
            group,
            destination
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default()
        );

        if self.policy.is_dry_run() {
            output.plain(&format!("  Would move: {}", shown));
            report.record_move(group, &entry.path, &destination, ActionStatus::Planned);
            self.destinations.claim(destination);
            return;
        }

        match move_file(&entry.path, &destination) {
            Ok(()) => {
                output.success(&format!("Moved: {}", shown));
                tracing::debug!(src = %entry.path.display(), dest = %destination.display(), "moved");
                report.record_move(group, &entry.path, &destination, ActionStatus::Moved);
                self.destinations.claim(destination);
            }
            Err(source) => {
                let err = OrganizeError::MoveFailed {
                    source_path: entry.path.clone(),
                    destination,
                    source,
                };
                output.error(&err.to_string());
                tracing::debug!(error = %err, "move failed");
                report.record_failure(group, &err);
            }
        }
        output.advance();
    }
}
