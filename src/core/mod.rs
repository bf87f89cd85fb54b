//! Command logic: validates user input and drives the store.

pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod form;
pub mod import;
pub mod list;
pub mod log;
pub mod show;

use crate::db::pool::DbPool;
use crate::db::slot::SqliteSlot;
use crate::store::Store;

/// Hydrate the store from the database's storage slot.
pub fn open_store(pool: &DbPool) -> Store<SqliteSlot<'_>> {
    Store::open(SqliteSlot::new(&pool.conn))
}
