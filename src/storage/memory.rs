//! In-memory medium
//!
//! Non-durable `KvMedium` for tests and throwaway sessions.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::Result;

use super::KvMedium;

/// HashMap-backed medium; contents vanish with the value
#[derive(Default)]
pub struct MemoryMedium {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KvMedium for MemoryMedium {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}
