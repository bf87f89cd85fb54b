//! Durable storage slot backed by the `storage` table.

use crate::errors::AppResult;
use crate::store::StorageSlot;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub struct SqliteSlot<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteSlot<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl StorageSlot for SqliteSlot<'_> {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM storage WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn write(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;
    use crate::models::{ApplicationDraft, Status};
    use crate::store::{STORAGE_KEY, Store};

    #[test]
    fn missing_key_reads_none() {
        let pool = DbPool::in_memory().unwrap();
        let slot = SqliteSlot::new(&pool.conn);
        assert_eq!(slot.read(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn write_overwrites_previous_value() {
        let pool = DbPool::in_memory().unwrap();
        let mut slot = SqliteSlot::new(&pool.conn);
        slot.write("k", "[1]").unwrap();
        slot.write("k", "[2]").unwrap();
        assert_eq!(slot.read("k").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn store_survives_reopen() {
        let pool = DbPool::in_memory().unwrap();

        let id = {
            let mut store = Store::open(SqliteSlot::new(&pool.conn));
            store.add(ApplicationDraft {
                company: "Acme".into(),
                title: "Eng".into(),
                status: Status::Interviewing,
                date: "2024-01-05".into(),
                notes: String::new(),
            })
        };

        let store = Store::open(SqliteSlot::new(&pool.conn));
        let app = store.get(&id).expect("persisted");
        assert_eq!(app.status, Status::Interviewing);
    }

    #[test]
    fn missing_table_degrades_to_empty_store() {
        let conn = Connection::open_in_memory().unwrap();
        let mut store = Store::open(SqliteSlot::new(&conn));
        assert!(store.is_empty());

        // writes fail without the table, memory state still moves on
        let id = store.add(ApplicationDraft {
            company: "Acme".into(),
            title: "Eng".into(),
            ..Default::default()
        });
        assert!(store.get(&id).is_some());
    }
}
