//! Record Store
//!
//! Cached, mutex-guarded access to each persisted collection.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::error::{EmsError, Result};
use crate::model::{AttendanceRecord, Employee, LeaveRequest};
use crate::storage::KvMedium;

use super::{seed, Record};

/// Persistence for one collection
///
/// The cache mirrors the last value read from or written to the medium.
/// `None` means "not loaded yet"; the next access reads the medium.
pub struct CollectionStore<T: Record> {
    /// Shared medium (the same one backs every collection)
    medium: Arc<dyn KvMedium>,

    /// Written and returned when the medium has no value for the key
    bootstrap: Vec<T>,

    /// Snapshot of the persisted collection, guarded for read-modify-write
    cache: Mutex<Option<Vec<T>>>,
}

impl<T: Record> CollectionStore<T> {
    pub fn new(medium: Arc<dyn KvMedium>, bootstrap: Vec<T>) -> Self {
        Self {
            medium,
            bootstrap,
            cache: Mutex::new(None),
        }
    }

    /// Snapshot of the persisted collection
    ///
    /// Seeds and persists the bootstrap set if nothing is stored yet.
    /// Stored content that fails to decode or validate is a storage error;
    /// it is never replaced by the bootstrap set.
    pub fn load(&self) -> Result<Vec<T>> {
        let mut cache = self.cache.lock();
        Ok(self.load_locked(&mut cache)?.clone())
    }

    /// Overwrite the whole collection
    pub fn save(&self, items: Vec<T>) -> Result<()> {
        let mut cache = self.cache.lock();
        self.persist(&items)?;
        *cache = Some(items);
        Ok(())
    }

    /// Read-modify-write under the collection lock
    ///
    /// `f` works on a copy; the copy is persisted and becomes the cached
    /// value only if `f` succeeds and the result validates. On any error the
    /// stored collection is unchanged.
    pub fn update<R>(&self, f: impl FnOnce(&mut Vec<T>) -> Result<R>) -> Result<R> {
        let mut cache = self.cache.lock();
        let mut working = self.load_locked(&mut cache)?.clone();

        let out = f(&mut working)?;

        self.persist(&working)?;
        *cache = Some(working);
        Ok(out)
    }

    /// Drop the cached snapshot; the next access rereads the medium
    pub fn invalidate(&self) {
        *self.cache.lock() = None;
    }

    /// Remove the stored value so the next access seeds again
    pub fn reset(&self) -> Result<()> {
        let mut cache = self.cache.lock();
        self.medium.remove(T::COLLECTION.key())?;
        *cache = None;
        info!(collection = T::COLLECTION.name(), "collection reset");
        Ok(())
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Fill the cache from the medium (or the bootstrap set) if needed
    fn load_locked<'a>(&self, cache: &'a mut Option<Vec<T>>) -> Result<&'a mut Vec<T>> {
        if cache.is_none() {
            let key = T::COLLECTION.key();
            let items = match self.medium.get(key)? {
                Some(bytes) => {
                    let items = Self::decode(&bytes)?;
                    debug!(key, count = items.len(), "loaded collection");
                    items
                }
                None => {
                    let items = self.bootstrap.clone();
                    self.persist(&items)?;
                    info!(key, count = items.len(), "seeded collection");
                    items
                }
            };
            *cache = Some(items);
        }

        cache
            .as_mut()
            .ok_or_else(|| EmsError::Storage(format!("{} cache empty", T::COLLECTION.name())))
    }

    /// Decode stored JSON and validate it; any failure is corruption
    fn decode(bytes: &[u8]) -> Result<Vec<T>> {
        let key = T::COLLECTION.key();
        let items: Vec<T> = serde_json::from_slice(bytes).map_err(|e| {
            EmsError::StorageCorruption(format!("{}: malformed JSON: {}", key, e))
        })?;
        validate_collection(&items)
            .map_err(|e| EmsError::StorageCorruption(format!("{}: {}", key, e)))?;
        Ok(items)
    }

    fn persist(&self, items: &[T]) -> Result<()> {
        validate_collection(items)?;
        let key = T::COLLECTION.key();
        let bytes = serde_json::to_vec(items)?;
        self.medium.set(key, &bytes)?;
        debug!(key, count = items.len(), "saved collection");
        Ok(())
    }
}

/// Per-record constraints plus id uniqueness
fn validate_collection<T: Record>(items: &[T]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        item.validate()?;
        if !seen.insert(item.id()) {
            return Err(EmsError::Validation(format!(
                "duplicate id {:?} in {}",
                item.id(),
                T::COLLECTION.name()
            )));
        }
    }
    Ok(())
}

/// The three collections over one medium
pub struct RecordStore {
    employees: CollectionStore<Employee>,
    leaves: CollectionStore<LeaveRequest>,
    attendance: CollectionStore<AttendanceRecord>,
}

impl RecordStore {
    /// Create a store over `medium`
    ///
    /// With `seed_sample_data` off every collection bootstraps empty.
    pub fn new(medium: Arc<dyn KvMedium>, seed_sample_data: bool) -> Self {
        let (employees, leaves) = if seed_sample_data {
            (seed::employees(), seed::leaves())
        } else {
            (Vec::new(), Vec::new())
        };

        Self {
            employees: CollectionStore::new(Arc::clone(&medium), employees),
            leaves: CollectionStore::new(Arc::clone(&medium), leaves),
            attendance: CollectionStore::new(medium, Vec::new()),
        }
    }

    pub fn employees(&self) -> &CollectionStore<Employee> {
        &self.employees
    }

    pub fn leaves(&self) -> &CollectionStore<LeaveRequest> {
        &self.leaves
    }

    pub fn attendance(&self) -> &CollectionStore<AttendanceRecord> {
        &self.attendance
    }

    pub fn load_employees(&self) -> Result<Vec<Employee>> {
        self.employees.load()
    }

    pub fn save_employees(&self, items: Vec<Employee>) -> Result<()> {
        self.employees.save(items)
    }

    pub fn load_leaves(&self) -> Result<Vec<LeaveRequest>> {
        self.leaves.load()
    }

    pub fn save_leaves(&self, items: Vec<LeaveRequest>) -> Result<()> {
        self.leaves.save(items)
    }

    pub fn load_attendance(&self) -> Result<Vec<AttendanceRecord>> {
        self.attendance.load()
    }

    pub fn save_attendance(&self, items: Vec<AttendanceRecord>) -> Result<()> {
        self.attendance.save(items)
    }

    /// Drop every cached snapshot
    pub fn invalidate_all(&self) {
        self.employees.invalidate();
        self.leaves.invalidate();
        self.attendance.invalidate();
    }

    /// Remove every stored collection so each seeds again on next access
    pub fn reset_all(&self) -> Result<()> {
        self.employees.reset()?;
        self.leaves.reset()?;
        self.attendance.reset()
    }
}
