//! Error taxonomy and the small deterministic hashing/RNG primitives.

pub(crate) mod error;
pub(crate) mod math;
