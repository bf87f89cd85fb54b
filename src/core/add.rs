use crate::config::Config;
use crate::core::form::{parse_date_input, parse_status, required};
use crate::core::open_store;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::ApplicationDraft;
use crate::ui::messages::success;
use crate::utils::date;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate the form fields, store the application and return its id.
    pub fn apply(
        pool: &DbPool,
        cfg: &Config,
        company: &str,
        title: &str,
        status: Option<&str>,
        date: Option<&str>,
        notes: Option<&str>,
    ) -> AppResult<String> {
        let draft = ApplicationDraft {
            company: required("Company", company)?,
            title: required("Job title", title)?,
            status: match status {
                Some(s) => parse_status(s)?,
                None => cfg.default_status,
            },
            date: match date {
                Some(d) => parse_date_input(d)?,
                None => date::today_str(),
            },
            notes: notes.unwrap_or_default().to_string(),
        };

        let label = format!("{} — {}", draft.company, draft.title);

        let mut store = open_store(pool);
        let id = store.add(draft);

        ttlog_quiet(&pool.conn, "add", &id, &format!("Added application {label}"));
        success(format!("Added {label} ({id})"));

        Ok(id)
    }
}
