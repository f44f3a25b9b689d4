//! Digest pipelines for addresses, checksums, and message hashing.

use coinkit_types::HashFamily;
use ripemd::Ripemd160;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::blake256::Blake256;

/// SHA-1 digest of arbitrary data.
pub fn sha1(data: &[u8]) -> [u8; 20] {
    Sha1::digest(data).into()
}

/// SHA-256 digest of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// RIPEMD-160 digest of arbitrary data.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(data).into()
}

/// BLAKE-256 digest of arbitrary data.
pub fn blake256(data: &[u8]) -> [u8; 32] {
    Blake256::digest(data)
}

/// Double SHA-256, used for checksum-style hashing.
pub fn hash256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// RIPEMD-160 ∘ SHA-256, the standard address digest.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// RIPEMD-160 ∘ BLAKE-256, the address digest for BLAKE-256 networks.
pub fn hash160_blake256(data: &[u8]) -> [u8; 20] {
    ripemd160(&blake256(data))
}

/// 20-byte address payload digest for the given hash family.
pub fn address_digest(data: &[u8], family: HashFamily) -> [u8; 20] {
    match family {
        HashFamily::Sha256 => hash160(data),
        HashFamily::Blake256 => hash160_blake256(data),
    }
}

/// 32-byte double digest used for Base58Check checksums.
pub fn checksum_digest(data: &[u8], family: HashFamily) -> [u8; 32] {
    match family {
        HashFamily::Sha256 => hash256(data),
        HashFamily::Blake256 => blake256(&blake256(data)),
    }
}
