use crate::config::Config;
use crate::core::open_store;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::JobApplication;
use crate::query::ViewQuery;
use crate::ui::messages::info;
use crate::utils::colors::colorize_status;
use crate::utils::table::Table;

/// Characters of the id shown in listings; `edit`/`show`/`del` accept the prefix.
const SHORT_ID: usize = 8;

const STATUS_COL: usize = 3;

pub struct ListLogic;

impl ListLogic {
    /// Compute the derived view for `query`.
    pub fn view(pool: &DbPool, query: &ViewQuery) -> Vec<JobApplication> {
        query.apply(open_store(pool).applications())
    }

    pub fn print(pool: &DbPool, cfg: &Config, query: &ViewQuery) -> AppResult<()> {
        let items = Self::view(pool, query);

        let search = query.search.trim();
        println!(
            "📋 {} application(s) | status: {} | sort: {}{}",
            items.len(),
            query.status,
            query.sort,
            if search.is_empty() {
                String::new()
            } else {
                format!(" | search: \"{search}\"")
            }
        );
        println!();

        if items.is_empty() {
            info("No results");
            return Ok(());
        }

        print!("{}", render_table(&items, &cfg.separator_char));
        Ok(())
    }
}

fn render_table(items: &[JobApplication], separator: &str) -> String {
    let mut table = Table::new(["ID", "Company", "Title", "Status", "Date"]);
    for a in items {
        table.add_row(vec![
            a.id.chars().take(SHORT_ID).collect(),
            a.company.clone(),
            a.title.clone(),
            a.status.to_string(),
            a.date.clone(),
        ]);
    }

    table.render_with(separator, |row, col, cell| {
        if col == STATUS_COL {
            colorize_status(items[row].status, &cell)
        } else {
            cell
        }
    })
}
