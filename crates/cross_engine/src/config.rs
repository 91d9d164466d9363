//! Engine configuration.

use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Knobs for the [`Engine`](super::Engine).
///
/// Defaults keep every cache on. Disabling caching recomputes each query from
/// scratch, which is only useful for checking that memoization is transparent.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct EngineConfig {
    /// Memoize line outcomes, legal moves, successors and scores.
    #[serde(default = "default_cache_enabled")]
    #[getter(copy)]
    cache_enabled: bool,
}

fn default_cache_enabled() -> bool {
    true
}

impl EngineConfig {
    /// Configuration with every cache disabled.
    pub fn uncached() -> Self {
        Self::default().with_cache_enabled(false)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_enabled: default_cache_enabled(),
        }
    }
}
