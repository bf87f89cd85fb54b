use crate::core::form::resolve_id;
use crate::core::open_store;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the application; returns `false` if the id is unknown.
    pub fn apply(pool: &DbPool, id: &str) -> AppResult<bool> {
        let mut store = open_store(pool);

        let Some(full_id) = resolve_id(&store, id) else {
            warning(format!("Application '{id}' not found."));
            return Ok(false);
        };

        let label = store
            .get(&full_id)
            .map(|a| format!("{} — {}", a.company, a.title))
            .unwrap_or_default();

        let removed = store.remove(&full_id);
        if removed {
            ttlog_quiet(&pool.conn, "del", &full_id, &format!("Deleted application {label}"));
            info(format!("Deleted {label} ({full_id})"));
        }

        Ok(removed)
    }
}
