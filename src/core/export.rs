use crate::core::open_store;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::transfer::{EXPORT_FILE_NAME, ensure_writable, notify_export_success, write_export};
use crate::ui::messages::warning;
use crate::utils::path::resolve_output;
use std::path::PathBuf;

/// High-level logic for `export`.
pub struct ExportLogic;

impl ExportLogic {
    /// Write every application to `file` (or `./jobtracker-data.json`).
    ///
    /// Returns the path written.
    pub fn export(pool: &DbPool, file: Option<&str>, force: bool) -> AppResult<PathBuf> {
        let path = resolve_output(file, EXPORT_FILE_NAME);
        ensure_writable(&path, force)?;

        let store = open_store(pool);
        if store.is_empty() {
            warning("No applications stored: exporting an empty list.");
        }

        write_export(&path, store.applications())?;
        notify_export_success(store.len(), &path);

        Ok(path)
    }
}
