//! Configuration for namecache
//!
//! Centralized configuration with sensible defaults.

/// Main configuration for a lookup table instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Sizing Configuration
    // -------------------------------------------------------------------------
    /// Number of entries to pre-allocate space for at construction
    pub initial_capacity: usize,

    /// Upper bound on the number of entries the table will hold.
    /// `None` means unbounded. Upserts of new keys beyond this bound fail
    /// with `CacheError::CapacityExhausted`; overwrites of existing keys
    /// always succeed.
    pub max_entries: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            max_entries: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the number of entries to pre-allocate space for
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Set the maximum number of entries the table will hold
    pub fn max_entries(mut self, limit: usize) -> Self {
        self.config.max_entries = Some(limit);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
