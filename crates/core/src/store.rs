//! Identity-assigning in-memory store.
//!
//! Pure storage: no validation happens at this layer. Each store owns its
//! identity space (counter starting at 1) and its entry list; both are kept
//! behind one mutex so the counter increment and the insert-or-replace scan
//! form a single atomic unit per call.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Implemented by entities the [`MemoryStore`] can persist.
///
/// Entities arrive without an identity and receive one from the store on
/// first save; subsequent saves carry the identity and replace in place.
pub trait Persisted: Clone {
    type Id: Copy + Eq + From<u64> + core::fmt::Debug;

    fn id(&self) -> Option<Self::Id>;

    /// Return a copy of this entity carrying the given identity.
    fn with_id(self, id: Self::Id) -> Self;
}

#[derive(Debug)]
struct Inner<T> {
    entries: Vec<T>,
    next_id: u64,
}

/// In-memory, insertion-ordered store with upsert-by-identity semantics.
#[derive(Debug)]
pub struct MemoryStore<T: Persisted> {
    inner: Mutex<Inner<T>>,
}

impl<T: Persisted> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Save an entity.
    ///
    /// Without an identity: assign the next one and insert. With an identity:
    /// replace the entry sharing it, or append if none does. Returns the
    /// persisted value (identity set).
    pub fn save(&self, entity: T) -> T {
        let mut inner = self.lock();
        match entity.id() {
            None => {
                let id = T::Id::from(inner.next_id);
                inner.next_id += 1;
                let persisted = entity.with_id(id);
                inner.entries.push(persisted.clone());
                persisted
            }
            Some(id) => {
                if let Some(slot) = inner.entries.iter_mut().find(|e| e.id() == Some(id)) {
                    *slot = entity.clone();
                } else {
                    inner.entries.push(entity.clone());
                }
                entity
            }
        }
    }

    pub fn find_by_id(&self, id: T::Id) -> Option<T> {
        self.lock().entries.iter().find(|e| e.id() == Some(id)).cloned()
    }

    /// Owned snapshot of all entries, insertion order. No aliasing of
    /// internal state escapes the store.
    pub fn find_all(&self) -> Vec<T> {
        self.lock().entries.clone()
    }

    /// Remove the entry with the given identity; reports whether anything
    /// was removed. No reference checks (no cascade).
    pub fn delete(&self, id: T::Id) -> bool {
        let mut inner = self.lock();
        let before = inner.entries.len();
        inner.entries.retain(|e| e.id() != Some(id));
        inner.entries.len() < before
    }

    /// Clear all entries and reset the identity counter to 1.
    pub fn delete_all(&self) {
        let mut inner = self.lock();
        inner.entries.clear();
        inner.next_id = 1;
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        // A poisoned lock only means another caller panicked mid-mutation;
        // the data is still a consistent list, so keep serving it.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Persisted> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
