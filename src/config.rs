//! Store configuration.
//!
//! ```
//! use u_timetable::config::{IdStrategy, StoreConfig};
//!
//! let json = r#"{"idStrategy": {"sequential": {"prefix": "tt"}}}"#;
//! let config = StoreConfig::from_json(json).unwrap();
//! assert!(config.seed_presets);
//! assert_eq!(config.id_strategy, IdStrategy::Sequential { prefix: "tt".into() });
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;

/// How the store mints ids for new entities.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IdStrategy {
    /// Random v4 UUIDs.
    #[default]
    Uuid,
    /// `"<prefix>-<n>"` from a counter scoped to the store.
    Sequential {
        /// Id prefix.
        prefix: String,
    },
}

/// Store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    /// Seed the School, College and Engineering presets.
    pub seed_presets: bool,
    /// Id minting strategy.
    pub id_strategy: IdStrategy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_presets: true,
            id_strategy: IdStrategy::Uuid,
        }
    }
}

impl StoreConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON configuration. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets whether presets are seeded.
    pub fn with_seed_presets(mut self, seed_presets: bool) -> Self {
        self.seed_presets = seed_presets;
        self
    }

    /// Sets the id strategy.
    pub fn with_id_strategy(mut self, id_strategy: IdStrategy) -> Self {
        self.id_strategy = id_strategy;
        self
    }

    /// Shorthand for sequential ids with the given prefix.
    pub fn with_sequential_ids(self, prefix: impl Into<String>) -> Self {
        self.with_id_strategy(IdStrategy::Sequential {
            prefix: prefix.into(),
        })
    }
}

/// Mints unique ids according to an [`IdStrategy`].
#[derive(Debug, Clone)]
pub(crate) struct IdGenerator {
    strategy: IdStrategy,
    next: u64,
}

impl IdGenerator {
    pub(crate) fn new(strategy: IdStrategy) -> Self {
        Self { strategy, next: 1 }
    }

    pub(crate) fn next_id(&mut self) -> String {
        match &self.strategy {
            IdStrategy::Uuid => Uuid::new_v4().to_string(),
            IdStrategy::Sequential { prefix } => {
                let id = format!("{prefix}-{}", self.next);
                self.next += 1;
                id
            }
        }
    }
}
