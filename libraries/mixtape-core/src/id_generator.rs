//! Pluggable identifier generation
//!
//! Playlists and comments draw their ids from an [`IdGenerator`]. Production
//! code uses random UUIDs; tests can swap in [`SequentialIdGenerator`] to get
//! predictable ids.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of globally unique identifiers
pub trait IdGenerator: Send + Sync {
    /// Produce a fresh, non-empty identifier never returned before
    fn next_id(&self) -> String;
}

/// UUID v4 generator (default)
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `prefix-N` generator starting at 1
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    /// Create a generator producing `prefix-1`, `prefix-2`, ...
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn uuid_generator_never_repeats() {
        let generator = UuidGenerator;
        let ids: HashSet<String> = (0..100).map(|_| generator.next_id()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn sequential_generator_counts_up() {
        let generator = SequentialIdGenerator::new("c");
        assert_eq!(generator.next_id(), "c-1");
        assert_eq!(generator.next_id(), "c-2");
        assert_eq!(generator.issued(), 2);
    }

    #[test]
    fn sequential_default_prefix() {
        assert_eq!(SequentialIdGenerator::default().next_id(), "id-1");
    }
}
