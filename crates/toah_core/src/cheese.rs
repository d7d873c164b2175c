//! Cheese discs stacked on the stools.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// A cheese with a given (relative) size.
///
/// Two cheeses of equal size are interchangeable: equality, ordering
/// and hashing only look at the size.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("{}", size)]
pub struct Cheese {
    size: NonZeroU32,
}

impl Cheese {
    /// Creates a cheese of the given size.
    pub const fn new(size: NonZeroU32) -> Self {
        Self { size }
    }

    /// Returns the size of this cheese.
    pub fn size(&self) -> u32 {
        self.size.get()
    }

    /// Returns true if this cheese may rest on top of `below`.
    pub fn fits_on(&self, below: &Cheese) -> bool {
        self.size <= below.size
    }
}

/// Error returned when building a cheese of size zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Cheese size must be positive")]
pub struct ZeroSizedCheese;

impl std::error::Error for ZeroSizedCheese {}

impl TryFrom<u32> for Cheese {
    type Error = ZeroSizedCheese;

    fn try_from(size: u32) -> Result<Self, Self::Error> {
        NonZeroU32::new(size).map(Cheese::new).ok_or(ZeroSizedCheese)
    }
}

impl From<NonZeroU32> for Cheese {
    fn from(size: NonZeroU32) -> Self {
        Cheese::new(size)
    }
}
