//! dirgenie - sort the files of a directory into folders by type
//!
//! This library classifies files by extension, groups the files of a single
//! directory, and moves each group into its own subfolder with collision-safe
//! names. Every run can be previewed as a dry run first.

pub mod cli;
pub mod config;
pub mod error;
pub mod file_category;
pub mod file_organizer;
pub mod logging;
pub mod output;
pub mod planner;
pub mod report;

pub use config::OrganizeOptions;
pub use error::{OrganizeError, OrganizeResult};
pub use file_category::{GroupingMode, group_name};
pub use file_organizer::{FileOrganizer, MovePolicy};
pub use planner::{FileEntry, FileGroups};
pub use report::RunReport;

pub use cli::{Cli, run_cli};
