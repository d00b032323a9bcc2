//! Priority sources for treap nodes.
//!
//! Every inserted element draws one `u64` priority from the container's generator.
//! Any [`RngCore`] works; [`DefaultRng`] is used unless one is supplied through
//! [`TreapVec::with_rng`](crate::TreapVec::with_rng).

use rand::SeedableRng;
#[cfg(not(feature = "std"))]
use core::sync::atomic::{AtomicU64, Ordering};

pub use rand::RngCore;

/// The generator used by [`TreapVec::new`](crate::TreapVec::new).
pub type DefaultRng = rand_xoshiro::Xoshiro256PlusPlus;

/// Builds a [`DefaultRng`] from a fixed seed.
///
/// Two containers seeded identically and fed the same operations have identical shapes.
#[must_use]
pub fn seeded(seed: u64) -> DefaultRng {
    DefaultRng::seed_from_u64(seed)
}

/// Builds a [`DefaultRng`] with a fresh seed.
pub(crate) fn fresh() -> DefaultRng {
    seeded(fresh_seed())
}

/// Returns a seed drawn from the thread-local entropy source.
#[cfg(feature = "std")]
pub(crate) fn fresh_seed() -> u64 {
    rand::random()
}

/// Returns a seed for a new generator.
///
/// Without `std` there is no entropy source, so seeds are spread from a global counter.
#[cfg(not(feature = "std"))]
pub(crate) fn fresh_seed() -> u64 {
    const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
    static NEXT_SEED: AtomicU64 = AtomicU64::new(GOLDEN_GAMMA);

    NEXT_SEED.fetch_add(GOLDEN_GAMMA, Ordering::Relaxed)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn fresh_generators_differ() {
        let mut a = fresh();
        let mut b = fresh();
        let a: [u64; 4] = core::array::from_fn(|_| a.next_u64());
        let b: [u64; 4] = core::array::from_fn(|_| b.next_u64());
        assert_ne!(a, b);
    }
}
