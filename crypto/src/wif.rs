//! Wallet Import Format serialization of private keys.
//!
//! Payload layout under Base58Check: `key32 || [0x01 if compressed]`; the
//! version byte and checksum family come from the network profile.

use coinkit_types::{HashFamily, KeyError};

use crate::base58check;

/// Fields recovered from a WIF string.
#[derive(Debug, PartialEq, Eq)]
pub struct WifDecoded {
    pub version: u8,
    pub private_key: [u8; 32],
    pub compressed: bool,
}

/// Encode a 32-byte private key as WIF.
pub fn encode(version: u8, private_key: &[u8; 32], compressed: bool, family: HashFamily) -> String {
    let mut payload = Vec::with_capacity(33);
    payload.extend_from_slice(private_key);
    if compressed {
        payload.push(0x01);
    }
    base58check::encode(version, &payload, family)
}

/// Decode a WIF string with the given checksum family.
pub fn decode(encoded: &str, family: HashFamily) -> Result<WifDecoded, KeyError> {
    let (version, payload) = base58check::decode(encoded, family)?;
    let compressed = match payload.len() {
        32 => false,
        33 if payload[32] == 0x01 => true,
        33 => {
            return Err(KeyError::Encoding(
                "invalid compression flag byte".into(),
            ))
        }
        n => {
            return Err(KeyError::Encoding(format!(
                "invalid payload length {n}"
            )))
        }
    };
    let private_key: [u8; 32] = payload[..32].try_into().expect("length checked above");
    Ok(WifDecoded {
        version,
        private_key,
        compressed,
    })
}
