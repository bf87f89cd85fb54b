use crate::core::form::{parse_date_input, parse_status, required, resolve_id};
use crate::core::open_store;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::ApplicationPatch;
use crate::ui::messages::{success, warning};

pub struct EditLogic;

/// Raw `edit` flags as typed by the user.
#[derive(Debug, Default)]
pub struct EditFields<'a> {
    pub company: Option<&'a str>,
    pub title: Option<&'a str>,
    pub status: Option<&'a str>,
    pub date: Option<&'a str>,
    pub notes: Option<&'a str>,
}

impl EditFields<'_> {
    /// Validated patch; only supplied fields are checked.
    pub fn to_patch(&self) -> AppResult<ApplicationPatch> {
        Ok(ApplicationPatch {
            company: self.company.map(|c| required("Company", c)).transpose()?,
            title: self.title.map(|t| required("Job title", t)).transpose()?,
            status: self.status.map(parse_status).transpose()?,
            date: self.date.map(parse_date_input).transpose()?,
            notes: self.notes.map(str::to_string),
        })
    }
}

impl EditLogic {
    /// Returns `false` when nothing was changed (unknown id or empty patch).
    pub fn apply(pool: &DbPool, id: &str, fields: &EditFields<'_>) -> AppResult<bool> {
        let patch = fields.to_patch()?;

        if patch.is_empty() {
            warning("Nothing to update: pass at least one of --company, --title, --status, --date, --notes.");
            return Ok(false);
        }

        let mut store = open_store(pool);

        let Some(full_id) = resolve_id(&store, id) else {
            warning(format!("Application '{id}' not found."));
            return Ok(false);
        };

        let updated = store.update(&full_id, patch);
        if updated {
            ttlog_quiet(&pool.conn, "edit", &full_id, "Updated application");
            success(format!("Application {full_id} updated."));
        }

        Ok(updated)
    }
}
