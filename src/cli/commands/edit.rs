use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditFields, EditLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        company,
        title,
        status,
        date,
        notes,
    } = cmd
    {
        let fields = EditFields {
            company: company.as_deref(),
            title: title.as_deref(),
            status: status.as_deref(),
            date: date.as_deref(),
            notes: notes.as_deref(),
        };

        let pool = DbPool::new(&cfg.database)?;
        EditLogic::apply(&pool, id, &fields)?;
    }

    Ok(())
}
