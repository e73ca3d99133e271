use std::sync::atomic::AtomicU64;

/// Hands out one seed per simulation.
///
/// Every simulation builds its own generator from the seed it is given,
/// so concurrent simulations never share random state.
#[derive(Debug, Default)]
pub enum SeedSource {
    /// `first, first + 1, first + 2, …` in the order simulations start.
    Sequential(AtomicU64),
    /// A fresh random seed for every simulation.
    #[default]
    Random,
}

/// use total ordering for the atomic operations to prevent
/// the operations to be reordered by the compiler or the CPU.
const ORDERING: std::sync::atomic::Ordering = std::sync::atomic::Ordering::SeqCst;

impl SeedSource {
    pub fn sequential(first: u64) -> Self {
        Self::Sequential(AtomicU64::new(first))
    }

    /// `Sequential` from `seed` if one is given, `Random` otherwise.
    pub fn from_config(seed: Option<u64>) -> Self {
        seed.map(Self::sequential).unwrap_or(Self::Random)
    }

    /// Take the seed of the next simulation.
    #[inline]
    pub fn next_seed(&self) -> u64 {
        match self {
            Self::Sequential(next) => next.fetch_add(1, ORDERING),
            Self::Random => rand::random(),
        }
    }
}
