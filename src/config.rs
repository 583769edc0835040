//! Construction parameters for treaps.

use thiserror::Error;

/// The default resolution of the logarithmic frequency priority.
pub const DEFAULT_LOG_SCALE: i64 = 1_000_000;

// The packed log priority must fit in 32 bits for any 32-bit access count, so the largest
// usable scale is the one for which `log2(u32::MAX) * scale` stays below `i32::MAX`.
const MAX_LOG_SCALE: i64 = i32::MAX as i64 / 32;

/// An error produced when a `TreapConfig` cannot be used to build a treap.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("random priority seed must not be all zeros")]
    ZeroSeed,
    #[error("log scale {0} is out of range")]
    ScaleOutOfRange(i64),
}

/// Parameters used to build a treap.
///
/// `seed` seeds the per-tree generator of randomized treaps; when it is `None` the generator
/// starts from a fixed default state, so runs are reproducible either way. `log_scale` is the
/// number of priority units a key gains in a logarithmic frequency treap each time its access
/// count doubles.
///
/// # Examples
///
/// ```
/// use adaptive_search_trees::config::TreapConfig;
/// use adaptive_search_trees::treap::RandomTreap;
///
/// let config = TreapConfig {
///     seed: Some([1, 2, 3, 4]),
///     ..TreapConfig::default()
/// };
/// let treap: RandomTreap<u32> = RandomTreap::with_config(&config).unwrap();
/// assert!(treap.is_empty());
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct TreapConfig {
    pub seed: Option<[u32; 4]>,
    pub log_scale: i64,
}

impl TreapConfig {
    /// Checks that the configuration describes a usable treap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seed == Some([0; 4]) {
            return Err(ConfigError::ZeroSeed);
        }
        if self.log_scale <= 0 || self.log_scale > MAX_LOG_SCALE {
            return Err(ConfigError::ScaleOutOfRange(self.log_scale));
        }
        Ok(())
    }
}

impl Default for TreapConfig {
    fn default() -> Self {
        TreapConfig {
            seed: None,
            log_scale: DEFAULT_LOG_SCALE,
        }
    }
}
