//! Shared, read-mostly calibration table.
//!
//! Readers take an `Arc` snapshot and compute without holding the lock.
//! A reload swaps in a whole new table; an existing snapshot keeps seeing
//! the table it was taken from.

use std::sync::Arc;

use parking_lot::RwLock;
use varga_base::CalibrationTable;

#[derive(Debug, Default)]
pub struct CalibrationStore {
    current: RwLock<Arc<CalibrationTable>>,
}

impl CalibrationStore {
    pub fn new(table: CalibrationTable) -> Self {
        Self {
            current: RwLock::new(Arc::new(table)),
        }
    }

    /// Current table. Cheap: clones the `Arc`.
    pub fn snapshot(&self) -> Arc<CalibrationTable> {
        self.current.read().clone()
    }

    /// Replace the whole table, returning the previous one.
    pub fn replace(&self, table: CalibrationTable) -> Arc<CalibrationTable> {
        let next = Arc::new(table);
        tracing::info!(version = next.version(), "calibration table replaced");
        std::mem::replace(&mut *self.current.write(), next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use varga_base::Division;

    #[test]
    fn default_is_empty() {
        let store = CalibrationStore::default();
        assert!(!store.snapshot().has_division(Division::D3));
    }

    #[test]
    fn snapshot_survives_replace() {
        let store = CalibrationStore::new(CalibrationTable::embedded().unwrap());
        let before = store.snapshot();
        let old = store.replace(CalibrationTable::default());
        assert!(before.has_division(Division::D3));
        assert!(Arc::ptr_eq(&before, &old));
        assert!(!store.snapshot().has_division(Division::D3));
    }
}
