//! Dataset drivers.
//!
//! Each driver walks a size index `i` over a fixed range and, per index,
//! draws its inputs from a [`RandomSource`](goldvec_core::RandomSource),
//! makes one primitive call and appends one case. Drivers are pure
//! functions of their parameters and the injected randomness; they never
//! touch the filesystem.

pub mod cipher;
pub mod encoding;
pub mod hash;
pub mod kdf;
pub mod oaep;
pub mod padding;

use goldvec_core::Schema;
use std::ops::Range;

use crate::category::{Category, Family};

/// Column layout of every dataset `category` produces.
pub fn schema_for(category: Category) -> Schema {
    match category.family() {
        Family::Cipher(_) => cipher::schema(),
        Family::Hash(algorithm) => hash::schema(algorithm),
        Family::Padding(scheme) => padding::schema(scheme),
        Family::Kdf => kdf::schema(),
        Family::Rsa => oaep::schema(),
        Family::Encoding => encoding::schema(),
    }
}

/// A contiguous run of size indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRange {
    first: usize,
    count: usize,
}

impl SizeRange {
    /// `1..=count`.
    pub fn from_one(count: usize) -> Self {
        Self { first: 1, count }
    }

    /// `0..count`.
    pub fn from_zero(count: usize) -> Self {
        Self { first: 0, count }
    }

    pub fn first(self) -> usize {
        self.first
    }

    pub fn len(self) -> usize {
        self.count
    }

    pub fn is_empty(self) -> bool {
        self.count == 0
    }

    pub fn iter(self) -> Range<usize> {
        self.first..self.first + self.count
    }
}
