//! Asymmetric key pairs with lazy public-key derivation.
//!
//! A `KeyPair` is immutable after construction apart from the one-time
//! materialization of its public point, which is derived from the private
//! scalar on first use and cached for the pair's lifetime. Pairs built from
//! a public key alone can derive addresses and verify signatures but never
//! gain signing capability.

use std::fmt;
use std::sync::OnceLock;

use coinkit_types::{networks, KeyError, Network, PrivateScalar, Signature};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::{address, sign, wif};

pub struct KeyPair {
    private: Option<PrivateScalar>,
    public: OnceLock<k256::PublicKey>,
    compressed: bool,
    network: Network,
}

impl KeyPair {
    /// Construct from exactly one key source.
    ///
    /// Supplying both a private scalar and a public point fails with
    /// `UnexpectedPublicKey`; supplying neither fails with `InvalidOptions`.
    pub fn new(
        private: Option<PrivateScalar>,
        public: Option<k256::PublicKey>,
        compressed: bool,
        network: Network,
    ) -> Result<Self, KeyError> {
        match (private, public) {
            (Some(_), Some(_)) => Err(KeyError::UnexpectedPublicKey),
            (None, None) => Err(KeyError::InvalidOptions(
                "either a private scalar or a public point is required".into(),
            )),
            (Some(scalar), None) => Ok(Self {
                private: Some(scalar),
                public: OnceLock::new(),
                compressed,
                network,
            }),
            (None, Some(point)) => {
                let public = OnceLock::new();
                let _ = public.set(point);
                Ok(Self {
                    private: None,
                    public,
                    compressed,
                    network,
                })
            }
        }
    }

    /// Generate a compressed key pair for `network` from the system RNG.
    pub fn random(network: Network) -> Self {
        Self::random_with(&mut OsRng, true, network)
    }

    /// Generate a key pair from the supplied RNG.
    ///
    /// Draws 32 bytes at a time and redraws until the value lies strictly
    /// inside `(0, n)`. Redrawing keeps the distribution uniform over valid
    /// scalars; reducing mod n would bias it.
    pub fn random_with<R: RngCore + CryptoRng>(
        rng: &mut R,
        compressed: bool,
        network: Network,
    ) -> Self {
        let mut buf = [0u8; 32];
        let scalar = loop {
            rng.fill_bytes(&mut buf);
            if let Ok(scalar) = PrivateScalar::from_bytes(buf) {
                break scalar;
            }
        };
        Self {
            private: Some(scalar),
            public: OnceLock::new(),
            compressed,
            network,
        }
    }

    /// Construct a signing-capable pair from a validated scalar.
    pub fn from_private_scalar(scalar: PrivateScalar, compressed: bool, network: Network) -> Self {
        Self {
            private: Some(scalar),
            public: OnceLock::new(),
            compressed,
            network,
        }
    }

    /// Construct a verify-only pair from a SEC1 public key encoding.
    ///
    /// The encoding's tag byte becomes the pair's `compressed` flag.
    pub fn from_public_key_bytes(bytes: &[u8], network: Network) -> Result<Self, KeyError> {
        let point =
            k256::PublicKey::from_sec1_bytes(bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        let compressed = bytes.first() != Some(&0x04);
        let public = OnceLock::new();
        let _ = public.set(point);
        Ok(Self {
            private: None,
            public,
            compressed,
            network,
        })
    }

    /// Decode a WIF string against the default network (Bitcoin mainnet).
    pub fn from_wif(encoded: &str) -> Result<Self, KeyError> {
        Self::from_wif_for_network(encoded, networks::BITCOIN)
    }

    /// Decode a WIF string against one expected network.
    ///
    /// The decode pipeline follows the network's hash family; a version byte
    /// other than the network's fails with `InvalidNetworkVersion`.
    pub fn from_wif_for_network(encoded: &str, network: Network) -> Result<Self, KeyError> {
        let decoded = wif::decode(encoded, network.hash_family)?;
        if decoded.version != network.wif {
            return Err(KeyError::InvalidNetworkVersion {
                expected: network.wif,
                found: decoded.version,
            });
        }
        let scalar = PrivateScalar::from_bytes(decoded.private_key)?;
        Ok(Self {
            private: Some(scalar),
            public: OnceLock::new(),
            compressed: decoded.compressed,
            network,
        })
    }

    /// Decode a WIF string against a list of candidate networks.
    ///
    /// Each candidate is tried with its own hash family's decode pipeline and
    /// matched on the WIF version byte. When several candidates match, the
    /// last one in the list wins. No match fails with
    /// `UnknownNetworkVersion`.
    pub fn from_wif_in(encoded: &str, candidates: &[Network]) -> Result<Self, KeyError> {
        let mut selected: Option<Network> = None;
        let mut seen_version: Option<u8> = None;
        let mut match_count = 0usize;
        for candidate in candidates {
            let Ok(decoded) = wif::decode(encoded, candidate.hash_family) else {
                continue;
            };
            seen_version = Some(decoded.version);
            if decoded.version == candidate.wif {
                match_count += 1;
                selected = Some(*candidate);
            }
        }
        if match_count > 1 {
            tracing::debug!(
                match_count,
                "multiple candidate networks share the WIF version byte, using the last match"
            );
        }
        match (selected, seen_version) {
            (Some(network), _) => Self::from_wif_for_network(encoded, network),
            (None, Some(version)) => Err(KeyError::UnknownNetworkVersion(version)),
            (None, None) => Err(KeyError::Encoding(
                "not decodable under any candidate network".into(),
            )),
        }
    }

    /// The pair's public point, derived from the private scalar on first use.
    fn public_point(&self) -> &k256::PublicKey {
        self.public.get_or_init(|| {
            let scalar = self
                .private
                .as_ref()
                .expect("construction guarantees a private scalar or a supplied point");
            k256::SecretKey::from_bytes(&scalar.to_bytes().into())
                .expect("range-checked scalar is a valid secret key")
                .public_key()
        })
    }

    /// SEC1 encoding of the public key: 33 bytes compressed, 65 uncompressed.
    pub fn public_key_bytes(&self) -> Vec<u8> {
        self.public_point()
            .to_encoded_point(self.compressed)
            .as_bytes()
            .to_vec()
    }

    /// The private key as fixed 32 big-endian bytes.
    pub fn private_key_bytes(&self) -> Result<[u8; 32], KeyError> {
        let scalar = self.private.as_ref().ok_or(KeyError::MissingPrivateKey)?;
        Ok(scalar.to_bytes())
    }

    /// The pay-to-pubkey-hash address for this pair's network.
    pub fn address(&self) -> String {
        address::derive_address(&self.public_key_bytes(), &self.network)
    }

    /// Serialize the private key as WIF for this pair's network.
    pub fn to_wif(&self) -> Result<String, KeyError> {
        let scalar = self.private.as_ref().ok_or(KeyError::MissingPrivateKey)?;
        Ok(wif::encode(
            self.network.wif,
            &scalar.to_bytes(),
            self.compressed,
            self.network.hash_family,
        ))
    }

    /// Sign a 32-byte message hash.
    pub fn sign(&self, message_hash: &[u8; 32]) -> Result<Signature, KeyError> {
        let scalar = self.private.as_ref().ok_or(KeyError::MissingPrivateKey)?;
        sign::sign_hash(message_hash, scalar)
    }

    /// Verify a compact signature over a 32-byte message hash against this
    /// pair's public key.
    pub fn verify(&self, message_hash: &[u8; 32], signature: &Signature) -> bool {
        sign::verify_hash(
            message_hash,
            signature,
            &self.public_key_bytes(),
            self.public_point(),
        )
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Whether this pair holds a private scalar and can sign.
    pub fn can_sign(&self) -> bool {
        self.private.is_some()
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("compressed", &self.compressed)
            .field("network", &self.network)
            .field("can_sign", &self.can_sign())
            .finish_non_exhaustive()
    }
}
