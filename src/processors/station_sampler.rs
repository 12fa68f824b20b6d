use crate::error::{GeneratorError, Result};
use crate::models::StationList;
use rand::Rng;

/// Fixed-size sample of station names drawn with replacement from a [`StationList`].
///
/// Rows pick their station from this pool, so the output distribution follows the
/// pool's empirical distribution rather than being exactly uniform over the list.
#[derive(Debug, Clone)]
pub struct SamplePool<'a> {
    entries: Vec<&'a str>,
}

impl<'a> SamplePool<'a> {
    pub fn build<R: Rng + ?Sized>(stations: &'a StationList, size: usize, rng: &mut R) -> Result<Self> {
        if stations.is_empty() {
            return Err(GeneratorError::InvalidArgument(
                "cannot sample from an empty station list".into(),
            ));
        }
        if size == 0 {
            return Err(GeneratorError::InvalidArgument(
                "sample pool size must be positive".into(),
            ));
        }

        let names = stations.names();
        let entries = (0..size)
            .map(|_| names[rng.gen_range(0..names.len())].as_str())
            .collect();

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[&'a str] {
        &self.entries
    }

    /// Pick one pool entry uniformly at random
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a str {
        self.entries[rng.gen_range(0..self.entries.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::SAMPLE_POOL_SIZE;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_pool_has_requested_size_and_known_names() -> Result<()> {
        let stations = StationList::new(["A", "B", "C"]);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let pool = SamplePool::build(&stations, SAMPLE_POOL_SIZE, &mut rng)?;

        assert_eq!(pool.len(), SAMPLE_POOL_SIZE);
        assert!(pool.entries().iter().all(|name| stations.contains(name)));

        // With 10k draws over 3 names every name shows up
        for name in stations.iter() {
            assert!(pool.entries().contains(&name));
        }
        Ok(())
    }

    #[test]
    fn test_pool_is_deterministic_for_seed() -> Result<()> {
        let stations = StationList::new(["Abha", "Accra", "Adelaide", "Aden"]);

        let first = SamplePool::build(&stations, 100, &mut ChaCha8Rng::seed_from_u64(42))?;
        let second = SamplePool::build(&stations, 100, &mut ChaCha8Rng::seed_from_u64(42))?;
        let other = SamplePool::build(&stations, 100, &mut ChaCha8Rng::seed_from_u64(43))?;

        assert_eq!(first.entries(), second.entries());
        assert_ne!(first.entries(), other.entries());
        Ok(())
    }

    #[test]
    fn test_empty_inputs_are_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert!(SamplePool::build(&StationList::default(), 10, &mut rng).is_err());
        assert!(SamplePool::build(&StationList::new(["A"]), 0, &mut rng).is_err());
    }
}
