//! Coin network descriptors.

use serde::{Deserialize, Serialize};

/// Digest family a network uses for address payloads and Base58Check
/// checksums.
///
/// `Sha256` networks hash public keys with RIPEMD-160 ∘ SHA-256 and checksum
/// with double SHA-256; `Blake256` networks substitute BLAKE-256 for SHA-256
/// in both places.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashFamily {
    Sha256,
    Blake256,
}

/// Describes one coin network's serialization profile.
///
/// Descriptors are plain data and never mutated; a `KeyPair` captures its
/// network at construction time and uses it for every WIF and address
/// encoding afterwards. Custom chains are described by constructing a value
/// directly (or deserializing one from configuration); the common chains are
/// available as constants in [`networks`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Network {
    /// Version byte prepended to WIF private-key encodings.
    pub wif: u8,
    /// Version byte prepended to pay-to-pubkey-hash addresses.
    pub pub_key_hash: u8,
    /// Digest pipeline for addresses and Base58Check checksums.
    pub hash_family: HashFamily,
}

impl Default for Network {
    /// The primary network, Bitcoin mainnet.
    fn default() -> Self {
        networks::BITCOIN
    }
}

/// Built-in network profiles.
pub mod networks {
    use super::{HashFamily, Network};

    /// Bitcoin mainnet, the default network for key pairs.
    pub const BITCOIN: Network = Network {
        wif: 0x80,
        pub_key_hash: 0x00,
        hash_family: HashFamily::Sha256,
    };

    /// Bitcoin testnet (also used by most altcoin testnets).
    pub const BITCOIN_TESTNET: Network = Network {
        wif: 0xef,
        pub_key_hash: 0x6f,
        hash_family: HashFamily::Sha256,
    };

    /// Litecoin mainnet.
    pub const LITECOIN: Network = Network {
        wif: 0xb0,
        pub_key_hash: 0x30,
        hash_family: HashFamily::Sha256,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_versions() {
        assert_eq!(networks::BITCOIN.wif, 0x80);
        assert_eq!(networks::BITCOIN.pub_key_hash, 0x00);
        assert_eq!(networks::BITCOIN_TESTNET.wif, 0xef);
        assert_eq!(networks::LITECOIN.pub_key_hash, 0x30);
    }

    #[test]
    fn builtins_use_sha256_family() {
        for net in [
            networks::BITCOIN,
            networks::BITCOIN_TESTNET,
            networks::LITECOIN,
        ] {
            assert_eq!(net.hash_family, HashFamily::Sha256);
        }
    }

    #[test]
    fn default_is_bitcoin() {
        assert_eq!(Network::default(), networks::BITCOIN);
    }

    #[test]
    fn serde_roundtrip() {
        let net = Network {
            wif: 0x22,
            pub_key_hash: 0x07,
            hash_family: HashFamily::Blake256,
        };
        let json = serde_json::to_string(&net).unwrap();
        let back: Network = serde_json::from_str(&json).unwrap();
        assert_eq!(back, net);
    }
}
