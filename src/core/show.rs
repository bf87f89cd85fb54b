use crate::core::form::resolve_id;
use crate::core::open_store;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{field, header, warning};
use crate::utils::colors::{colorize_optional, colorize_status};

/// Width used to wrap long notes.
const NOTES_WIDTH: usize = 72;

pub struct ShowLogic;

impl ShowLogic {
    /// Print one application. Returns `false` when the id is unknown.
    pub fn print(pool: &DbPool, id: &str) -> AppResult<bool> {
        let store = open_store(pool);

        let Some(app) = resolve_id(&store, id).and_then(|full| store.get(&full)) else {
            warning("Application not found.");
            return Ok(false);
        };

        header(format!("{} — {}", app.company, app.title));
        field("ID", &app.id);
        field("Company", &app.company);
        field("Title", &app.title);
        field("Status", colorize_status(app.status, app.status.as_str()));
        field("Date", &app.date);

        if app.notes.trim().is_empty() {
            field("Notes", colorize_optional(""));
        } else {
            field("Notes", "");
            for line in textwrap::wrap(&app.notes, NOTES_WIDTH) {
                println!("          {line}");
            }
        }

        Ok(true)
    }
}
