//! Base58Check encoding with a per-family checksum hash.
//!
//! Layout: `base58(version || payload || checksum)` where the checksum is the
//! first four bytes of the family's double digest over `version || payload`.
//! SHA-256 networks use double SHA-256, BLAKE-256 networks double BLAKE-256.

use coinkit_types::{HashFamily, KeyError};

use crate::hash::checksum_digest;

const CHECKSUM_LEN: usize = 4;

/// Base58Check-encode `payload` under `version`.
pub fn encode(version: u8, payload: &[u8], family: HashFamily) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
    data.push(version);
    data.extend_from_slice(payload);
    let checksum = checksum_digest(&data, family);
    data.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    bs58::encode(data).into_string()
}

/// Decode a Base58Check string, returning `(version, payload)`.
///
/// Fails on invalid base58, truncated input, or a checksum mismatch.
pub fn decode(encoded: &str, family: HashFamily) -> Result<(u8, Vec<u8>), KeyError> {
    let data = bs58::decode(encoded)
        .into_vec()
        .map_err(|e| KeyError::Encoding(format!("invalid base58: {e}")))?;
    if data.len() < 1 + CHECKSUM_LEN {
        return Err(KeyError::Encoding("payload too short".into()));
    }
    let (body, checksum) = data.split_at(data.len() - CHECKSUM_LEN);
    let expected = checksum_digest(body, family);
    if checksum != &expected[..CHECKSUM_LEN] {
        return Err(KeyError::Encoding("checksum mismatch".into()));
    }
    Ok((body[0], body[1..].to_vec()))
}
