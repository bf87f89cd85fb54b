use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::query::{StatusFilter, ViewQuery};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        search,
        status,
        sort,
    } = cmd
    {
        let status = match status {
            Some(s) => s.parse::<StatusFilter>()?,
            None => StatusFilter::All,
        };

        let query = ViewQuery::new(
            search.clone().unwrap_or_default(),
            status,
            sort.unwrap_or(cfg.default_sort),
        );

        let pool = DbPool::new(&cfg.database)?;
        ListLogic::print(&pool, cfg, &query)?;
    }

    Ok(())
}
