//! Pay-to-pubkey-hash address derivation from public keys.
//!
//! Address format: Base58Check over the network's `pub_key_hash` version byte
//! and the 20-byte digest of the SEC1 public key encoding. The digest and
//! checksum pipelines follow the network's hash family.

use coinkit_types::{KeyError, Network};

use crate::{base58check, hash};

/// Derive the address for an encoded public key on `network`.
pub fn derive_address(public_key_bytes: &[u8], network: &Network) -> String {
    let digest = hash::address_digest(public_key_bytes, network.hash_family);
    base58check::encode(network.pub_key_hash, &digest, network.hash_family)
}

/// Extract the 20-byte public key digest from an address on `network`.
///
/// Fails if the string is malformed, carries the wrong version byte, or has
/// an invalid checksum.
pub fn decode_address(address: &str, network: &Network) -> Result<[u8; 20], KeyError> {
    let (version, payload) = base58check::decode(address, network.hash_family)?;
    if version != network.pub_key_hash {
        return Err(KeyError::InvalidNetworkVersion {
            expected: network.pub_key_hash,
            found: version,
        });
    }
    payload
        .as_slice()
        .try_into()
        .map_err(|_| KeyError::Encoding(format!("invalid address payload length {}", payload.len())))
}

/// Validate that an address is well-formed for `network`.
pub fn validate_address(address: &str, network: &Network) -> bool {
    decode_address(address, network).is_ok()
}
