//! JSON import/export of the whole collection.

mod fs_utils;
mod import;
mod json;

pub use fs_utils::ensure_writable;
pub use import::{ImportBatch, parse_import};
pub use json::{export_json, write_export};

use crate::ui::messages::success;
use std::path::Path;

/// File name offered for exports when the user does not pick one.
pub const EXPORT_FILE_NAME: &str = "jobtracker-data.json";

/// Media type of the export artifact.
pub const EXPORT_MIME: &str = "application/json";

/// What happened to an import payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Not JSON, or not a top-level array. Nothing changed.
    Rejected,
    /// The collection was replaced by `imported` records; `dropped`
    /// elements were filtered out for missing required fields.
    Applied { imported: usize, dropped: usize },
}

/// Success line shared by every export path.
pub(crate) fn notify_export_success(count: usize, path: &Path) {
    success(format!(
        "Exported {count} application(s) to {} ({EXPORT_MIME})",
        path.display()
    ));
}
