use crate::config::{ConfigError, TreapConfig};
use rand::{Rng, SeedableRng, XorShiftRng};

/// A rule for assigning and updating the priorities of treap nodes.
///
/// The treap engine owns one strategy per tree and consults it whenever a node is created or a
/// key is hit by `search` or a duplicate `add`. The engine only ever compares stored priority
/// words, so a strategy that packs extra state into the word must keep the packing monotone in
/// its effective priority.
pub trait PriorityStrategy: Sized {
    /// Whether hits change priorities. When `false`, searches never restructure the treap.
    const ADJUSTS_ON_ACCESS: bool;

    /// Returns the stored priority of a node created by a structural insert.
    fn initial_priority(&mut self) -> i64;

    /// Returns the stored priority of a node after it was hit.
    fn accessed_priority(&self, stored: i64) -> i64 {
        stored
    }

    /// Decodes a stored priority word into the priority a reader should see.
    fn effective_priority(stored: i64) -> i64 {
        stored
    }

    /// Builds the strategy from a validated configuration.
    fn from_config(config: &TreapConfig) -> Result<Self, ConfigError>;
}

/// Independent, uniformly random 64-bit priorities drawn from a generator owned by the tree.
#[derive(Clone)]
pub struct RandomPriority {
    rng: XorShiftRng,
}

impl RandomPriority {
    /// Constructs a strategy whose generator starts from a fixed default state.
    pub fn new() -> Self {
        RandomPriority {
            rng: XorShiftRng::new_unseeded(),
        }
    }

    /// Constructs a strategy from an explicit seed. The seed must not be all zeros.
    pub fn with_seed(seed: [u32; 4]) -> Result<Self, ConfigError> {
        if seed == [0; 4] {
            return Err(ConfigError::ZeroSeed);
        }
        Ok(RandomPriority {
            rng: XorShiftRng::from_seed(seed),
        })
    }
}

impl Default for RandomPriority {
    fn default() -> Self {
        Self::new()
    }
}

impl PriorityStrategy for RandomPriority {
    const ADJUSTS_ON_ACCESS: bool = false;

    fn initial_priority(&mut self) -> i64 {
        self.rng.next_u64() as i64
    }

    fn from_config(config: &TreapConfig) -> Result<Self, ConfigError> {
        match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Ok(Self::new()),
        }
    }
}

/// Priority starts at 1 and grows by 1 on every hit.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearFrequency;

impl PriorityStrategy for LinearFrequency {
    const ADJUSTS_ON_ACCESS: bool = true;

    fn initial_priority(&mut self) -> i64 {
        1
    }

    fn accessed_priority(&self, stored: i64) -> i64 {
        stored.saturating_add(1)
    }

    fn from_config(_: &TreapConfig) -> Result<Self, ConfigError> {
        Ok(LinearFrequency)
    }
}

const ACCESS_COUNT_MASK: i64 = 0xFFFF_FFFF;

/// Priority is `floor(log2(access_count) * scale)`, so doubling a key's access count adds exactly
/// `scale` to its priority.
///
/// The access count lives in the low 32 bits of the stored word and the log priority in the high
/// bits. Comparing whole words therefore orders nodes by log priority first. The count saturates
/// at `u32::MAX`, after which the key's priority no longer grows.
#[derive(Clone, Copy, Debug)]
pub struct LogFrequency {
    scale: i64,
}

impl LogFrequency {
    /// Constructs a strategy with a custom scale.
    pub fn with_scale(scale: i64) -> Result<Self, ConfigError> {
        TreapConfig {
            log_scale: scale,
            ..TreapConfig::default()
        }
        .validate()?;
        Ok(LogFrequency { scale })
    }

    /// Returns the priority gained by each doubling of the access count.
    pub fn scale(&self) -> i64 {
        self.scale
    }

    /// Extracts the access count from a stored priority word.
    pub fn access_count(stored: i64) -> u32 {
        (stored & ACCESS_COUNT_MASK) as u32
    }

    fn encode(&self, access_count: u32) -> i64 {
        let log_priority = (f64::from(access_count).log2() * self.scale as f64).floor() as i64;
        (log_priority << 32) | i64::from(access_count)
    }
}

impl Default for LogFrequency {
    fn default() -> Self {
        LogFrequency {
            scale: crate::config::DEFAULT_LOG_SCALE,
        }
    }
}

impl PriorityStrategy for LogFrequency {
    const ADJUSTS_ON_ACCESS: bool = true;

    fn initial_priority(&mut self) -> i64 {
        self.encode(1)
    }

    fn accessed_priority(&self, stored: i64) -> i64 {
        self.encode(Self::access_count(stored).saturating_add(1))
    }

    fn effective_priority(stored: i64) -> i64 {
        stored >> 32
    }

    fn from_config(config: &TreapConfig) -> Result<Self, ConfigError> {
        Self::with_scale(config.log_scale)
    }
}

/// Priority is the value of a per-tree counter at the moment of insertion, so the newest key
/// always sits at the root. The counter advances only on structural inserts.
#[derive(Clone, Copy, Debug, Default)]
pub struct Recency {
    counter: i64,
}

impl Recency {
    /// Returns the priority the next inserted key will receive.
    pub fn insertion_counter(&self) -> i64 {
        self.counter
    }
}

impl PriorityStrategy for Recency {
    const ADJUSTS_ON_ACCESS: bool = false;

    fn initial_priority(&mut self) -> i64 {
        let priority = self.counter;
        self.counter += 1;
        priority
    }

    fn from_config(_: &TreapConfig) -> Result<Self, ConfigError> {
        Ok(Recency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{LinearFrequency, LogFrequency, PriorityStrategy, RandomPriority, Recency};
    use crate::config::{ConfigError, TreapConfig};

    #[test]
    fn test_random_seeded_is_reproducible() {
        let mut a = RandomPriority::with_seed([1, 2, 3, 4]).unwrap();
        let mut b = RandomPriority::with_seed([1, 2, 3, 4]).unwrap();
        for _ in 0..100 {
            assert_eq!(a.initial_priority(), b.initial_priority());
        }
    }

    #[test]
    fn test_random_zero_seed() {
        assert!(RandomPriority::with_seed([0; 4]).is_err());
        let config = TreapConfig {
            seed: Some([0; 4]),
            ..TreapConfig::default()
        };
        assert_eq!(RandomPriority::from_config(&config).err(), Some(ConfigError::ZeroSeed));
    }

    #[test]
    fn test_linear() {
        let mut strategy = LinearFrequency;
        let priority = strategy.initial_priority();
        assert_eq!(priority, 1);
        assert_eq!(strategy.accessed_priority(priority), 2);
        assert_eq!(strategy.accessed_priority(i64::max_value()), i64::max_value());
    }

    #[test]
    fn test_log_initial() {
        let mut strategy = LogFrequency::default();
        let stored = strategy.initial_priority();
        assert_eq!(LogFrequency::access_count(stored), 1);
        assert_eq!(LogFrequency::effective_priority(stored), 0);
    }

    #[test]
    fn test_log_doubling() {
        let mut strategy = LogFrequency::default();
        let mut stored = strategy.initial_priority();
        let mut previous = LogFrequency::effective_priority(stored);
        for count in 2..=1024u32 {
            stored = strategy.accessed_priority(stored);
            assert_eq!(LogFrequency::access_count(stored), count);
            if count.is_power_of_two() {
                let current = LogFrequency::effective_priority(stored);
                assert_eq!(current - previous, strategy.scale());
                previous = current;
            }
        }
    }

    #[test]
    fn test_log_packing_is_monotone() {
        let strategy = LogFrequency::default();
        let mut stored = strategy.encode(1);
        for _ in 0..10_000 {
            let next = strategy.accessed_priority(stored);
            assert!(next > stored);
            assert!(LogFrequency::effective_priority(next) >= LogFrequency::effective_priority(stored));
            stored = next;
        }
    }

    #[test]
    fn test_log_saturates() {
        let strategy = LogFrequency::default();
        let stored = strategy.encode(u32::max_value());
        assert_eq!(strategy.accessed_priority(stored), stored);
        assert!(LogFrequency::effective_priority(stored) <= 32 * strategy.scale());
    }

    #[test]
    fn test_recency() {
        let mut strategy = Recency::default();
        assert_eq!(strategy.initial_priority(), 0);
        assert_eq!(strategy.initial_priority(), 1);
        assert_eq!(strategy.insertion_counter(), 2);
        assert_eq!(strategy.accessed_priority(1), 1);
    }
}
