//! Run report: counters and per-action records for one reorganization.

use crate::error::OrganizeError;
use crate::file_category::GroupingMode;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What an action touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Folder,
    File,
}

/// Outcome of one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    /// Dry-run only: the action would have been performed.
    Planned,
    /// A destination folder was created.
    Created,
    /// The destination folder already existed.
    Existing,
    /// A file was moved.
    Moved,
    /// The action failed; see `error`.
    Failed,
}

/// A single folder or file action recorded during the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionRecord {
    pub kind: ActionKind,
    pub group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    pub destination: PathBuf,
    pub status: ActionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Everything that happened during one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub directory: PathBuf,
    pub mode: GroupingMode,
    pub dry_run: bool,
    /// Files found in the directory.
    pub files: usize,
    /// Distinct destination folders.
    pub groups: usize,
    /// Files actually moved (always 0 for a dry run).
    pub moved: usize,
    /// Folder and file failures.
    pub errors: usize,
    pub folders_created: usize,
    pub actions: Vec<ActionRecord>,
}

impl RunReport {
    pub fn new(directory: &Path, mode: GroupingMode, dry_run: bool) -> Self {
        Self {
            directory: directory.to_path_buf(),
            mode,
            dry_run,
            files: 0,
            groups: 0,
            moved: 0,
            errors: 0,
            folders_created: 0,
            actions: Vec::new(),
        }
    }

    /// Records a folder action.
    pub fn record_folder(&mut self, group: &str, folder: &Path, status: ActionStatus) {
        if status == ActionStatus::Created {
            self.folders_created += 1;
        }
        self.actions.push(ActionRecord {
            kind: ActionKind::Folder,
            group: group.to_string(),
            source: None,
            destination: folder.to_path_buf(),
            status,
            error: None,
        });
    }

    /// Records a planned or completed file move.
    pub fn record_move(
        &mut self,
        group: &str,
        source: &Path,
        destination: &Path,
        status: ActionStatus,
    ) {
        if status == ActionStatus::Moved {
            self.moved += 1;
        }
        self.actions.push(ActionRecord {
            kind: ActionKind::File,
            group: group.to_string(),
            source: Some(source.to_path_buf()),
            destination: destination.to_path_buf(),
            status,
            error: None,
        });
    }

    /// Records a failed folder creation or move and counts one error.
    pub fn record_failure(&mut self, group: &str, error: &OrganizeError) {
        let (kind, source, destination) = match error {
            OrganizeError::FolderCreationFailed { path, .. } => {
                (ActionKind::Folder, None, path.clone())
            }
            OrganizeError::MoveFailed {
                source_path,
                destination,
                ..
            } => (
                ActionKind::File,
                Some(source_path.clone()),
                destination.clone(),
            ),
            _ => (ActionKind::Folder, None, self.directory.clone()),
        };

        self.errors += 1;
        self.actions.push(ActionRecord {
            kind,
            group: group.to_string(),
            source,
            destination,
            status: ActionStatus::Failed,
            error: Some(error.to_string()),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// One-line summary, e.g. "Moved 4 files into 4 folders."
    pub fn summary_line(&self) -> String {
        if self.dry_run {
            format!(
                "Would move {} {} into {} {}.",
                self.files,
                plural(self.files, "file", "files"),
                self.groups,
                plural(self.groups, "folder", "folders")
            )
        } else {
            let mut line = format!(
                "Moved {} {} into {} {}.",
                self.moved,
                plural(self.moved, "file", "files"),
                self.groups,
                plural(self.groups, "folder", "folders")
            );
            if self.has_errors() {
                line.push_str(&format!(
                    " {} {}.",
                    self.errors,
                    plural(self.errors, "error", "errors")
                ));
            }
            line
        }
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
