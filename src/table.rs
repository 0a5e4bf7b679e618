//! Lookup table
//!
//! The core name-to-record table.
//!
//! ## Concurrency Model: Single-Writer / Multiple-Reader (SWMR)
//!
//! - **Reads** (find/get): Any number of concurrent readers
//!   - Shared mode on the table's RwLock
//!   - Readers never block other readers
//!
//! - **Writes** (upsert): Serialized by the same RwLock
//!   - Exclusive mode: excludes all readers and all other writers
//!   - A reader observes either the prior record or the fully-written
//!     replacement, never an intermediate state
//!
//! The lock guards exactly the map operation. No I/O, no logging, and no
//! other unbounded work happens while it is held, so blocking time is
//! bounded by a single hash-map lookup or insert. `parking_lot`'s RwLock
//! uses a fair queuing policy, so a continuous stream of readers does not
//! starve a waiting writer.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::name::Name;
use crate::record::Record;

/// A thread-safe name-to-record lookup table.
///
/// The table owns its storage; records returned by [`find`](Self::find) and
/// [`get`](Self::get) are independent snapshots that stay valid across any
/// subsequent upsert. Share a table between threads by wrapping it in an
/// `Arc` (all methods take `&self`).
pub struct LookupTable {
    /// The guarded map. All reads take shared mode, all writes exclusive.
    entries: RwLock<HashMap<Name, Record>>,

    /// Entry-count bound, `None` = unbounded
    max_entries: Option<usize>,

    // -------------------------------------------------------------------------
    // Diagnostics (relaxed atomics, no synchronization role)
    // -------------------------------------------------------------------------
    hits: AtomicU64,
    misses: AtomicU64,
    insertions: AtomicU64,
    replacements: AtomicU64,
}

impl LookupTable {
    /// Create an empty table with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an empty table with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(config.initial_capacity)),
            max_entries: config.max_entries,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            insertions: AtomicU64::new(0),
            replacements: AtomicU64::new(0),
        }
    }

    /// Look up a record by name, signaling a miss by value.
    ///
    /// Returns a snapshot of the stored record, or the absent sentinel
    /// (`Record::default()`) if the name has never been upserted. A record
    /// stored with an empty payload is indistinguishable from a miss here;
    /// use [`get`](Self::get) to tell the two apart.
    pub fn find(&self, name: &Name) -> Record {
        self.get(name).unwrap_or_default()
    }

    /// Look up a record by name, signaling a miss explicitly.
    ///
    /// Returns `None` if and only if no record is stored under the name.
    pub fn get(&self, name: &Name) -> Option<Record> {
        let record = {
            let entries = self.entries.read();
            entries.get(name).cloned()
        };

        if record.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }

        record
    }

    /// Insert or replace the record stored under a name.
    ///
    /// Once this returns, every subsequently-started lookup observes the new
    /// record. Fails with [`CacheError::CapacityExhausted`] when a configured
    /// entry bound is reached and the name is not already present; the table
    /// is left unchanged in that case. Overwrites never fail.
    pub fn upsert(&self, name: Name, record: Record) -> Result<()> {
        tracing::trace!("upsert {}", name);

        let replaced = {
            let mut entries = self.entries.write();

            if let Some(limit) = self.max_entries {
                if entries.len() >= limit && !entries.contains_key(&name) {
                    drop(entries);
                    tracing::debug!("upsert of {} rejected: table at capacity ({})", name, limit);
                    return Err(CacheError::CapacityExhausted { limit });
                }
            }

            entries.insert(name, record).is_some()
        };

        if replaced {
            self.replacements.fetch_add(1, Ordering::Relaxed);
        } else {
            self.insertions.fetch_add(1, Ordering::Relaxed);
        }

        Ok(())
    }

    /// Whether a record is stored under the name
    pub fn contains(&self, name: &Name) -> bool {
        self.entries.read().contains_key(name)
    }

    /// Number of entries currently stored
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Snapshot of the table's counters
    pub fn stats(&self) -> TableStats {
        TableStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            insertions: self.insertions.load(Ordering::Relaxed),
            replacements: self.replacements.load(Ordering::Relaxed),
        }
    }
}

impl Default for LookupTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time view of a table's counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    /// Entries stored when the snapshot was taken
    pub entries: usize,

    /// Lookups that found a record
    pub hits: u64,

    /// Lookups that missed
    pub misses: u64,

    /// Upserts that created a new entry
    pub insertions: u64,

    /// Upserts that overwrote an existing entry
    pub replacements: u64,
}

impl TableStats {
    /// Fraction of lookups that hit, 0.0 when no lookups have happened
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// =============================================================================
// Lock Discipline Tests
// =============================================================================
//
// These tests reach into the table's RwLock directly to pin interleavings,
// which is why they live here instead of tests/.
