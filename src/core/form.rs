//! Input validation shared by `add` and `edit`.
//!
//! The store trusts its callers, so everything a user types is checked and
//! normalized here first.

use crate::errors::{AppError, AppResult};
use crate::models::Status;
use crate::store::{StorageSlot, Store};
use crate::utils::date;

/// Trimmed, non-empty value of a required text field.
pub fn required(label: &'static str, value: &str) -> AppResult<String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::MissingField(label));
    }
    Ok(v.to_string())
}

pub fn parse_status(input: &str) -> AppResult<Status> {
    Status::from_input(input).ok_or_else(|| AppError::InvalidStatus(input.to_string()))
}

/// Normalized `YYYY-MM-DD` form of a user-supplied date.
pub fn parse_date_input(input: &str) -> AppResult<String> {
    date::parse_date(input)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .ok_or_else(|| AppError::InvalidDate(input.to_string()))
}

/// Resolve a full id or a unique id prefix to the stored id.
pub fn resolve_id<S: StorageSlot>(store: &Store<S>, input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Some(app) = store.get(input) {
        return Some(app.id.clone());
    }

    let mut matches = store
        .applications()
        .iter()
        .filter(|a| a.id.starts_with(input));

    match (matches.next(), matches.next()) {
        (Some(only), None) => Some(only.id.clone()),
        _ => None,
    }
}
