//! Directory scanning and grouping.
//!
//! The planner validates the target directory, lists the regular files
//! directly inside it and buckets them by the folder name the classifier
//! assigns. Subdirectories are never entered, moved or counted.

use crate::error::{OrganizeError, OrganizeResult};
use crate::file_category::{GroupingMode, group_name};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A regular file discovered in the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path to the file.
    pub path: PathBuf,
    /// The file's base name.
    pub name: String,
    /// Extension with its leading dot, or empty.
    pub extension: String,
}

impl FileEntry {
    /// Builds an entry from a file path.
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy())
            .filter(|e| !e.is_empty())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();

        Self {
            path,
            name,
            extension,
        }
    }
}

/// Files bucketed by destination folder name.
///
/// Keys iterate in lexicographic order; each bucket keeps scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileGroups {
    groups: BTreeMap<String, Vec<FileEntry>>,
}

impl FileGroups {
    /// Appends a file to the named group.
    pub fn push(&mut self, group: String, entry: FileEntry) {
        self.groups.entry(group).or_default().push(entry);
    }

    /// Iterates over `(group name, files)` in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FileEntry])> {
        self.groups
            .iter()
            .map(|(name, files)| (name.as_str(), files.as_slice()))
    }

    /// Returns the files of one group.
    pub fn get(&self, group: &str) -> Option<&[FileEntry]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    /// Number of distinct groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of files across all groups.
    pub fn file_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Checks that `path` exists and is a directory.
pub fn validate_directory(path: &Path) -> OrganizeResult<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(OrganizeError::NotADirectory {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(OrganizeError::PathNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(OrganizeError::ScanFailed {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Lists the regular files directly inside `dir`, sorted by name.
///
/// Entries that cannot be inspected are skipped.
pub fn scan_directory(dir: &Path) -> OrganizeResult<Vec<FileEntry>> {
    let entries = fs::read_dir(dir).map_err(|e| OrganizeError::ScanFailed {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files: Vec<FileEntry> = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(error = %e, dir = %dir.display(), "skipping unreadable entry");
                continue;
            }
        };

        // Symlinks are followed so a link to a file is treated as a file.
        match fs::metadata(entry.path()) {
            Ok(meta) if meta.is_file() => files.push(FileEntry::from_path(entry.path())),
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(error = %e, path = %entry.path().display(), "skipping entry");
            }
        }
    }

    files.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(files)
}

/// Groups already-scanned files by their destination folder name.
pub fn group_files(files: Vec<FileEntry>, mode: GroupingMode) -> FileGroups {
    let mut groups = FileGroups::default();
    for file in files {
        let group = group_name(&file.extension, mode);
        tracing::debug!(file = %file.name, group = %group, "classified");
        groups.push(group, file);
    }
    groups
}

/// Validates `dir`, scans it and groups its files.
pub fn plan(dir: &Path, mode: GroupingMode) -> OrganizeResult<FileGroups> {
    validate_directory(dir)?;
    let files = scan_directory(dir)?;
    let groups = group_files(files, mode);
    tracing::debug!(
        files = groups.file_count(),
        groups = groups.group_count(),
        "planned"
    );
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_entry_extension() {
        let entry = FileEntry::from_path(PathBuf::from("/tmp/photo.JPG"));
        assert_eq!(entry.name, "photo.JPG");
        assert_eq!(entry.extension, ".JPG");

        let entry = FileEntry::from_path(PathBuf::from("/tmp/archive"));
        assert_eq!(entry.extension, "");

        let entry = FileEntry::from_path(PathBuf::from("/tmp/.bashrc"));
        assert_eq!(entry.extension, "");

        let entry = FileEntry::from_path(PathBuf::from("/tmp/backup.tar.gz"));
        assert_eq!(entry.extension, ".gz");
    }

    #[test]
    fn test_validate_missing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let missing = temp_dir.path().join("missing");

        let result = validate_directory(&missing);
        assert!(matches!(result, Err(OrganizeError::PathNotFound { .. })));
    }

    #[test]
    fn test_validate_file_is_not_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = temp_dir.path().join("file.txt");
        fs::write(&file, "x").expect("Failed to write file");

        let result = validate_directory(&file);
        assert!(matches!(result, Err(OrganizeError::NotADirectory { .. })));
    }

    #[test]
    fn test_scan_skips_subdirectories() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("b.txt"), "b").expect("Failed to write file");
        fs::write(temp_dir.path().join("a.png"), "a").expect("Failed to write file");
        fs::create_dir(temp_dir.path().join("nested.dir")).expect("Failed to create dir");

        let files = scan_directory(temp_dir.path()).expect("Scan failed");
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "b.txt"]);
    }

    #[test]
    fn test_group_files_sorted_keys() {
        let files = vec![
            FileEntry::from_path(PathBuf::from("/d/song.mp3")),
            FileEntry::from_path(PathBuf::from("/d/a.png")),
            FileEntry::from_path(PathBuf::from("/d/b.jpg")),
            FileEntry::from_path(PathBuf::from("/d/README")),
        ];

        let groups = group_files(files, GroupingMode::Categories);
        let keys: Vec<_> = groups.iter().map(|(name, _)| name).collect();
        assert_eq!(keys, vec!["Audio", "Images", "No_Extension"]);
        assert_eq!(groups.file_count(), 4);
        assert_eq!(groups.group_count(), 3);

        let images: Vec<_> = groups
            .get("Images")
            .expect("Images group")
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(images, vec!["a.png", "b.jpg"]);
    }

    #[test]
    fn test_plan_is_repeatable() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        for name in ["x.csv", "y.txt", "z", "w.jpg"] {
            fs::write(temp_dir.path().join(name), name).expect("Failed to write file");
        }

        let first = plan(temp_dir.path(), GroupingMode::Categories).expect("Plan failed");
        let second = plan(temp_dir.path(), GroupingMode::Categories).expect("Plan failed");
        assert_eq!(first, second);
    }

    #[test]
    fn test_plan_empty_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let groups = plan(temp_dir.path(), GroupingMode::Extensions).expect("Plan failed");
        assert!(groups.is_empty());
        assert_eq!(groups.file_count(), 0);
    }
}
