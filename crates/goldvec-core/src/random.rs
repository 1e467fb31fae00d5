//! Randomness sources.
//!
//! Drivers draw every key, IV, salt and plaintext through [`RandomSource`].
//! Any `RngCore + CryptoRng` qualifies, so the OS generator and a seeded
//! `StdRng` both plug in without changing driver signatures.

use bytes::Bytes;
use rand::rngs::{OsRng, StdRng};
use rand::{CryptoRng, RngCore, SeedableRng};

use crate::error::RandomError;

/// A cryptographically secure byte generator.
pub trait RandomSource: RngCore + CryptoRng {
    /// Draw `n` fresh random bytes.
    fn random(&mut self, n: usize) -> Result<Bytes, RandomError> {
        let mut buf = vec![0u8; n];
        self.try_fill_bytes(&mut buf)?;
        Ok(Bytes::from(buf))
    }
}

impl<R: RngCore + CryptoRng + ?Sized> RandomSource for R {}

/// The entropy source selected for a run.
///
/// Unseeded runs read the operating system CSPRNG. A seed switches to
/// `StdRng`, which makes a run repeatable on the same build.
#[derive(Debug)]
pub enum EntropySource {
    Os(OsRng),
    Seeded(StdRng),
}

impl EntropySource {
    /// OS entropy.
    pub fn os() -> Self {
        Self::Os(OsRng)
    }

    /// Deterministic stream from a 64-bit seed.
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(StdRng::seed_from_u64(seed))
    }

    /// Seeded if `seed` is set, OS entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::os(),
        }
    }

    /// Whether this source is repeatable.
    pub fn is_seeded(&self) -> bool {
        matches!(self, Self::Seeded(_))
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::os()
    }
}

impl RngCore for EntropySource {
    fn next_u32(&mut self) -> u32 {
        match self {
            Self::Os(rng) => rng.next_u32(),
            Self::Seeded(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Self::Os(rng) => rng.next_u64(),
            Self::Seeded(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Self::Os(rng) => rng.fill_bytes(dest),
            Self::Seeded(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            Self::Os(rng) => rng.try_fill_bytes(dest),
            Self::Seeded(rng) => rng.try_fill_bytes(dest),
        }
    }
}

impl CryptoRng for EntropySource {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_length() {
        let mut rng = EntropySource::os();
        assert_eq!(rng.random(0).unwrap().len(), 0);
        assert_eq!(rng.random(56).unwrap().len(), 56);
    }

    #[test]
    fn test_seeded_is_repeatable() {
        let mut a = EntropySource::seeded(7);
        let mut b = EntropySource::seeded(7);
        assert_eq!(a.random(32).unwrap(), b.random(32).unwrap());
        assert!(a.is_seeded());
    }

    #[test]
    fn test_fresh_draws_differ() {
        let mut rng = EntropySource::os();
        let first = rng.random(32).unwrap();
        let second = rng.random(32).unwrap();
        assert_ne!(first, second);
    }
}
