use proptest::prelude::*;

use coinkit_crypto::KeyPair;
use coinkit_types::{networks, HashFamily, Network, PrivateScalar};

const BLAKE_NET: Network = Network {
    wif: 0x22,
    pub_key_hash: 0x07,
    hash_family: HashFamily::Blake256,
};

fn scalar_bytes() -> impl Strategy<Value = [u8; 32]> {
    prop::array::uniform32(0u8..).prop_filter("scalar in (0, n)", |bytes| {
        PrivateScalar::from_bytes(*bytes).is_ok()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// WIF roundtrip: to_wif -> from_wif -> to_wif is stable.
    #[test]
    fn wif_roundtrip(bytes in scalar_bytes(), compressed in any::<bool>()) {
        let kp = KeyPair::from_private_scalar(
            PrivateScalar::from_bytes(bytes).unwrap(),
            compressed,
            networks::BITCOIN,
        );
        let encoded = kp.to_wif().unwrap();
        let restored = KeyPair::from_wif(&encoded).unwrap();
        prop_assert_eq!(restored.to_wif().unwrap(), encoded);
        prop_assert_eq!(restored.private_key_bytes().unwrap(), bytes);
        prop_assert_eq!(restored.is_compressed(), compressed);
    }

    /// WIF roundtrip holds on a BLAKE-256 network as well.
    #[test]
    fn wif_roundtrip_blake_network(bytes in scalar_bytes()) {
        let kp = KeyPair::from_private_scalar(
            PrivateScalar::from_bytes(bytes).unwrap(),
            true,
            BLAKE_NET,
        );
        let encoded = kp.to_wif().unwrap();
        let restored = KeyPair::from_wif_for_network(&encoded, BLAKE_NET).unwrap();
        prop_assert_eq!(restored.to_wif().unwrap(), encoded);
    }

    /// Public key buffer roundtrip: encode -> decode -> encode is stable.
    #[test]
    fn public_key_roundtrip(bytes in scalar_bytes(), compressed in any::<bool>()) {
        let kp = KeyPair::from_private_scalar(
            PrivateScalar::from_bytes(bytes).unwrap(),
            compressed,
            networks::BITCOIN,
        );
        let encoded = kp.public_key_bytes();
        let restored = KeyPair::from_public_key_bytes(&encoded, networks::BITCOIN).unwrap();
        prop_assert_eq!(restored.public_key_bytes(), encoded);
    }

    /// Addresses are a function of (scalar, compression, network) alone, and
    /// the compression flag changes them.
    #[test]
    fn address_determinism(bytes in scalar_bytes()) {
        let make = |compressed| {
            KeyPair::from_private_scalar(
                PrivateScalar::from_bytes(bytes).unwrap(),
                compressed,
                networks::BITCOIN,
            )
        };
        prop_assert_eq!(make(true).address(), make(true).address());
        prop_assert_ne!(make(true).address(), make(false).address());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    /// A pair verifies its own signatures and rejects a stranger's key.
    #[test]
    fn sign_verify_roundtrip(bytes in scalar_bytes(), hash in any::<[u8; 32]>()) {
        let kp = KeyPair::from_private_scalar(
            PrivateScalar::from_bytes(bytes).unwrap(),
            true,
            networks::BITCOIN,
        );
        let sig = kp.sign(&hash).unwrap();
        prop_assert!(kp.verify(&hash, &sig));

        let stranger = KeyPair::from_private_scalar(
            PrivateScalar::from_bytes([0x5au8; 32]).unwrap(),
            true,
            networks::BITCOIN,
        );
        if stranger.public_key_bytes() != kp.public_key_bytes() {
            prop_assert!(!stranger.verify(&hash, &sig));
        }
    }
}
