//! Cryptographic key management for coinkit.
//!
//! - **secp256k1 key pairs** with lazy public-key derivation and per-network
//!   WIF / Base58Check address encodings
//! - **Digest pipelines** (SHA-256 and BLAKE-256 families) for address
//!   payloads and checksums
//! - **Dual ECDSA backends**: libsecp256k1 fast path with a pure-Rust (k256)
//!   reference fallback, invisible to callers

pub mod address;
pub mod base58check;
mod blake256;
pub mod hash;
pub mod keypair;
pub mod sign;
pub mod wif;

pub use address::{decode_address, derive_address, validate_address};
pub use hash::{
    address_digest, blake256, checksum_digest, hash160, hash160_blake256, hash256, ripemd160,
    sha1, sha256,
};
pub use keypair::KeyPair;
pub use sign::{sign_hash, verify_hash};
pub use wif::WifDecoded;
