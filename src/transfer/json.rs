use crate::errors::AppResult;
use crate::models::JobApplication;
use std::path::Path;

/// Pretty-printed JSON array of all records.
pub fn export_json(applications: &[JobApplication]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(applications)?)
}

/// Write the export artifact to `path`.
pub fn write_export(path: &Path, applications: &[JobApplication]) -> AppResult<()> {
    let json = export_json(applications)?;
    std::fs::write(path, json)?;
    Ok(())
}
