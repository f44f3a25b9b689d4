//! Fundamental types for coinkit.
//!
//! This crate defines the types shared across the workspace: coin network
//! descriptors, validated private-key scalars, compact ECDSA signatures, and
//! the common error enum. It carries no cryptographic dependencies; the
//! actual curve and digest work lives in `coinkit-crypto`.

pub mod error;
pub mod keys;
pub mod network;

pub use error::KeyError;
pub use keys::{PrivateScalar, Signature, SECP256K1_ORDER};
pub use network::{networks, HashFamily, Network};
