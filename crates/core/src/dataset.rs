//! The shuffled input every insertion benchmark reads from.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::Error;
use crate::result::Result;

/// Number of values the driver inserts into each container.
pub const DATASET_SIZE: usize = 100_000;

/// A random permutation of `1..=n`, fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    values: Vec<i32>,
    seed: Option<u64>,
}

impl Dataset {
    /// Build `1..=size` and shuffle it.
    ///
    /// With `Some(seed)` the permutation is reproducible; with `None` the
    /// generator is seeded from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DatasetSizeOutOfRange`] if `size` is zero or does
    /// not fit in `i32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctbench_core::Dataset;
    ///
    /// let a = Dataset::shuffled(1_000, Some(7)).unwrap();
    /// let b = Dataset::shuffled(1_000, Some(7)).unwrap();
    /// assert_eq!(a.as_slice(), b.as_slice());
    /// ```
    pub fn shuffled(size: usize, seed: Option<u64>) -> Result<Self> {
        let upper = i32::try_from(size)
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| Error::dataset_size_out_of_range(size, max_dataset_size()))?;

        let mut values: Vec<i32> = (1..=upper).collect();
        let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        values.shuffle(&mut rng);

        tracing::debug!(size, ?seed, "dataset shuffled");
        Ok(Self { values, seed })
    }

    /// The values in shuffled order.
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    /// Iterate the values in shuffled order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = i32> + ExactSizeIterator + '_ {
        self.values.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The seed used for the shuffle, if one was given.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Largest dataset whose values still fit in `i32`.
fn max_dataset_size() -> usize {
    usize::try_from(i32::MAX).unwrap_or(usize::MAX)
}
