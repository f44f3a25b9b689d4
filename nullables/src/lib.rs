//! Nullable infrastructure for deterministic testing.
//!
//! Entropy is the only external dependency key generation touches; this crate
//! provides a scripted replacement that returns pre-configured values so
//! tests can drive the rejection-sampling loop and assert exact keys.
//!
//! Usage: swap the system RNG for a nullable in tests.

pub mod random;

pub use random::NullEntropy;
