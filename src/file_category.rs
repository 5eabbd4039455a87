//! File classification for grouping files into destination folders.
//!
//! This module maps a file extension to the name of the folder the file
//! belongs in. In category mode the extension is looked up in a fixed table of
//! broad categories (e.g. "Images", "Documents"); in extensions mode the
//! folder is named after the extension itself.
//!
//! # Examples
//!
//! ```
//! use dirgenie::file_category::{GroupingMode, group_name};
//!
//! assert_eq!(group_name(".png", GroupingMode::Categories), "Images");
//! assert_eq!(group_name(".PDF", GroupingMode::Categories), "Documents");
//! assert_eq!(group_name(".png", GroupingMode::Extensions), "PNG_Files");
//! assert_eq!(group_name("", GroupingMode::Categories), "No_Extension");
//! ```

use serde::Serialize;

/// Folder name used for files without an extension.
pub const NO_EXTENSION: &str = "No_Extension";

/// Suffix appended to an upper-cased extension to build a folder name.
pub const EXTENSION_GROUP_SUFFIX: &str = "_Files";

/// Category names and their extensions, in lookup order.
///
/// Extensions are lowercase and carry their leading dot. When an extension is
/// listed under more than one category the first category wins.
pub const CATEGORY_TABLE: &[(&str, &[&str])] = &[
    (
        "Images",
        &[
            ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".svg", ".webp", ".ico", ".raw",
        ],
    ),
    (
        "Documents",
        &[".pdf", ".doc", ".docx", ".txt", ".rtf", ".odt", ".pages", ".tex"],
    ),
    ("Spreadsheets", &[".xls", ".xlsx", ".csv", ".ods", ".numbers"]),
    ("Presentations", &[".ppt", ".pptx", ".odp", ".key"]),
    (
        "Videos",
        &[
            ".mp4", ".avi", ".mkv", ".mov", ".wmv", ".flv", ".webm", ".m4v", ".3gp",
        ],
    ),
    (
        "Audio",
        &[".mp3", ".wav", ".flac", ".aac", ".ogg", ".wma", ".m4a", ".opus"],
    ),
    (
        "Archives",
        &[".zip", ".rar", ".7z", ".tar", ".gz", ".bz2", ".xz", ".dmg", ".iso"],
    ),
    (
        "Code",
        &[
            ".py", ".js", ".html", ".css", ".java", ".cpp", ".c", ".h", ".php", ".rb", ".go",
            ".rs", ".swift",
        ],
    ),
    (
        "Executables",
        &[".exe", ".msi", ".deb", ".rpm", ".dmg", ".pkg", ".app"],
    ),
    (
        "Data",
        &[".json", ".xml", ".yaml", ".yml", ".sql", ".db", ".sqlite"],
    ),
];

/// How files are grouped into folders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingMode {
    /// Group by broad category, falling back to the extension name.
    #[default]
    Categories,
    /// Group by exact extension, ignoring the category table.
    Extensions,
}

impl GroupingMode {
    /// Returns a human-readable label for banners and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            GroupingMode::Categories => "Categories",
            GroupingMode::Extensions => "Extensions",
        }
    }
}

/// Returns the category table in lookup order.
pub fn categories() -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
    CATEGORY_TABLE.iter().copied()
}

/// Looks up the category for an extension.
///
/// The lookup is case-insensitive and expects the leading dot.
///
/// # Examples
///
/// ```
/// use dirgenie::file_category::category_for_extension;
///
/// assert_eq!(category_for_extension(".JPG"), Some("Images"));
/// assert_eq!(category_for_extension(".dmg"), Some("Archives"));
/// assert_eq!(category_for_extension(".xyz"), None);
/// ```
pub fn category_for_extension(extension: &str) -> Option<&'static str> {
    let lowered = extension.to_lowercase();
    categories()
        .find(|(_, extensions)| extensions.contains(&lowered.as_str()))
        .map(|(name, _)| name)
}

/// Builds a folder name directly from an extension.
///
/// `.tar` becomes `TAR_Files`; an empty extension becomes `No_Extension`.
pub fn extension_group_name(extension: &str) -> String {
    let bare = extension.strip_prefix('.').unwrap_or(extension);
    if bare.is_empty() {
        NO_EXTENSION.to_string()
    } else {
        format!("{}{}", bare.to_uppercase(), EXTENSION_GROUP_SUFFIX)
    }
}

/// Returns the folder name a file with this extension belongs in.
///
/// Never fails: unknown extensions get an extension-derived name and files
/// without an extension go to `No_Extension`.
pub fn group_name(extension: &str, mode: GroupingMode) -> String {
    if mode == GroupingMode::Categories
        && let Some(category) = category_for_extension(extension)
    {
        return category.to_string();
    }

    extension_group_name(extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_extensions_map_to_images() {
        for ext in [".jpg", ".jpeg", ".png", ".gif", ".webp"] {
            assert_eq!(group_name(ext, GroupingMode::Categories), "Images");
        }
    }

    #[test]
    fn test_category_lookup_case_insensitive() {
        assert_eq!(group_name(".JPG", GroupingMode::Categories), "Images");
        assert_eq!(group_name(".Mp3", GroupingMode::Categories), "Audio");
        assert_eq!(group_name(".CSV", GroupingMode::Categories), "Spreadsheets");
    }

    #[test]
    fn test_every_table_entry_resolves_to_a_category() {
        for (_, extensions) in categories() {
            for ext in extensions {
                assert!(category_for_extension(ext).is_some(), "{ext} should resolve");
            }
        }
    }

    #[test]
    fn test_first_category_wins_for_duplicates() {
        assert_eq!(category_for_extension(".dmg"), Some("Archives"));
    }

    #[test]
    fn test_unknown_extension_uses_extension_name() {
        assert_eq!(group_name(".xyz", GroupingMode::Categories), "XYZ_Files");
        assert_eq!(group_name(".Log", GroupingMode::Categories), "LOG_Files");
    }

    #[test]
    fn test_empty_extension() {
        assert_eq!(group_name("", GroupingMode::Categories), NO_EXTENSION);
        assert_eq!(group_name("", GroupingMode::Extensions), NO_EXTENSION);
        assert_eq!(group_name(".", GroupingMode::Extensions), NO_EXTENSION);
    }

    #[test]
    fn test_extensions_mode_ignores_table() {
        assert_eq!(group_name(".jpg", GroupingMode::Extensions), "JPG_Files");
        assert_eq!(group_name(".txt", GroupingMode::Extensions), "TXT_Files");
        assert_eq!(group_name(".tar", GroupingMode::Extensions), "TAR_Files");
    }

    #[test]
    fn test_extension_without_dot() {
        assert_eq!(extension_group_name("gz"), "GZ_Files");
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(GroupingMode::default(), GroupingMode::Categories);
        assert_eq!(GroupingMode::Categories.label(), "Categories");
        assert_eq!(GroupingMode::Extensions.label(), "Extensions");
    }
}
