//! # namecache
//!
//! A thread-safe name-to-record lookup table with:
//! - Many concurrent readers, serialized writers (one RwLock co-located with the map)
//! - Miss signaled both by value (sentinel record) and explicitly (`Option`)
//! - Validated keys, so invalid input never reaches the lock
//! - Cheap record snapshots backed by `Bytes`
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────┐   ┌──────────┐   ┌──────────┐
//! │ Reader 1 │   │ Reader N │   │  Writer  │
//! └────┬─────┘   └────┬─────┘   └────┬─────┘
//!      │ find/get     │ find/get     │ upsert
//!      ▼ (shared)     ▼ (shared)     ▼ (exclusive)
//! ┌─────────────────────────────────────────────┐
//! │        RwLock<HashMap<Name, Record>>        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Readers hold the lock in shared mode and never block one another. A
//! writer holds it exclusively: while an upsert is in progress no lookup and
//! no other upsert proceeds, so no reader ever observes a partially-written
//! entry.
//!
//! ## Quick Start
//!
//! ```rust
//! use namecache::{LookupTable, Name, Record};
//!
//! let table = LookupTable::new();
//! let name = Name::new("example.com").unwrap();
//!
//! table.upsert(name.clone(), Record::new("93.184.216.34")).unwrap();
//! assert_eq!(table.find(&name), Record::new("93.184.216.34"));
//!
//! // A never-written name yields the absent sentinel by value...
//! let missing = Name::new("missing.org").unwrap();
//! assert!(table.find(&missing).is_absent());
//!
//! // ...or an explicit miss.
//! assert_eq!(table.get(&missing), None);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod name;
pub mod record;
pub mod table;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CacheError, Result};
pub use config::Config;
pub use name::Name;
pub use record::Record;
pub use table::{LookupTable, TableStats};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of namecache
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
