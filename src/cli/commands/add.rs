use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Record a new application.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        company,
        title,
        status,
        date,
        notes,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        AddLogic::apply(
            &pool,
            cfg,
            company,
            title,
            status.as_deref(),
            date.as_deref(),
            notes.as_deref(),
        )?;
    }

    Ok(())
}
