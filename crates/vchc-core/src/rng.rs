//! Seeded randomness for reproducible source graph generation.

use std::hash::Hasher;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use siphasher::sip::SipHasher13;

/// Reproducible random stream remembering the seed it started from.
///
/// Labelled forks derive independent streams, so a fuzz case can draw its
/// vertex count and its edge order without one perturbing the other.
#[derive(Debug, Clone)]
pub struct RngHandle {
    seed: u64,
    inner: StdRng,
}

impl RngHandle {
    /// Starts a stream at `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed this stream started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent stream named `label`; the parent's position does not matter.
    pub fn fork(&self, label: &str) -> Self {
        Self::from_seed(derive_substream_seed(self.seed, label))
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

/// SipHash-1-3 of `(seed, label)` under zero keys, stable across platforms.
pub fn derive_substream_seed(seed: u64, label: &str) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(seed);
    hasher.write(label.as_bytes());
    hasher.finish()
}
