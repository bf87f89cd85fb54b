//! Durable key-value slot abstraction used by the store.

use crate::errors::AppResult;
use std::collections::HashMap;

/// A single-key durable storage location.
///
/// Implementations hold whole serialized values; the store never asks for
/// partial reads or writes.
pub trait StorageSlot {
    /// Read the value stored under `key`, `None` when nothing was ever written.
    fn read(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> AppResult<()>;
}

/// In-process slot, lost when dropped.
#[derive(Debug, Default, Clone)]
pub struct MemorySlot {
    entries: HashMap<String, String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-seeded with a raw value, handy to simulate existing data.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut slot = Self::new();
        slot.entries.insert(key.to_string(), value.to_string());
        slot
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
