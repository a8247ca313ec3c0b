//! Local fallback pool.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::CoreError;

/// A fixed, non-empty set of pre-translated facts.
///
/// Used when every remote provider fails. Because the pool can never be
/// empty, [`FallbackPool::pick`] always yields display text.
#[derive(Debug, Clone)]
pub struct FallbackPool {
    facts: Vec<String>,
}

impl FallbackPool {
    /// Creates a pool from the given facts.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] if no non-blank fact is given.
    pub fn new<I, S>(facts: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let facts: Vec<String> = facts
            .into_iter()
            .map(Into::into)
            .filter(|f| !f.trim().is_empty())
            .collect();

        if facts.is_empty() {
            return Err(CoreError::InvalidConfig(
                "fallback pool must contain at least one fact".to_string(),
            ));
        }

        Ok(Self { facts })
    }

    /// Picks one fact uniformly at random.
    pub fn pick(&self) -> &str {
        self.pick_with(&mut rand::thread_rng())
    }

    /// Picks one fact uniformly at random using the given RNG.
    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // `new` rejects empty pools, so `choose` always has a candidate.
        self.facts
            .choose(rng)
            .map_or(self.facts[0].as_str(), String::as_str)
    }

    /// Returns true if the pool contains the given fact.
    pub fn contains(&self, fact: &str) -> bool {
        self.facts.iter().any(|f| f == fact)
    }

    /// Returns the number of facts.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Always false; pools are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Iterates over all facts.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.facts.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_empty_pool_rejected() {
        assert!(FallbackPool::new(Vec::<String>::new()).is_err());
        assert!(FallbackPool::new(["  ", ""]).is_err());
    }

    #[test]
    fn test_pick_is_member() {
        let pool = FallbackPool::new(["uno", "dos", "tres"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let fact = pool.pick_with(&mut rng);
            assert!(pool.contains(fact));
        }
    }

    #[test]
    fn test_pick_covers_pool() {
        let pool = FallbackPool::new(["a", "b"]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let picks: Vec<&str> = (0..100).map(|_| pool.pick_with(&mut rng)).collect();
        assert!(picks.contains(&"a"));
        assert!(picks.contains(&"b"));
    }
}
