//! ECDSA signing and verification over a fast-path/fallback backend chain.
//!
//! Two backends produce and check signatures: an optimized one backed by
//! libsecp256k1 (the `secp256k1` feature, on by default) and a pure-Rust
//! reference backend (k256). Each request is offered to the fast backend
//! first; a declined answer (the backend cannot represent the inputs, or the
//! feature is compiled out) falls through to the reference backend.
//! Declining is distinct from computing a negative result: a
//! parseable-but-invalid signature verifies as `Handled(false)`, never
//! `Declined`.
//!
//! Both backends emit RFC 6979 deterministic, low-S normalized compact
//! signatures, so callers cannot observe which backend ran.

use coinkit_types::{KeyError, PrivateScalar, Signature};

/// Outcome of offering a request to one backend.
#[cfg(feature = "secp256k1")]
enum Dispatch<T> {
    Handled(T),
    Declined,
}

/// Sign a 32-byte message hash with the backend chain.
pub fn sign_hash(hash: &[u8; 32], scalar: &PrivateScalar) -> Result<Signature, KeyError> {
    #[cfg(feature = "secp256k1")]
    match fast::sign(hash, scalar) {
        Dispatch::Handled(signature) => return Ok(signature),
        Dispatch::Declined => {
            tracing::debug!("fast signing backend declined, falling back to reference backend");
        }
    }
    reference::sign(hash, scalar)
}

/// Verify a compact signature over a 32-byte message hash.
///
/// The fast backend checks against the raw SEC1 encoding; the reference
/// backend checks against the already-decoded point. Returns `false` for any
/// well-formed but invalid signature.
pub fn verify_hash(
    hash: &[u8; 32],
    signature: &Signature,
    public_key_bytes: &[u8],
    public_point: &k256::PublicKey,
) -> bool {
    #[cfg(not(feature = "secp256k1"))]
    let _ = public_key_bytes;
    #[cfg(feature = "secp256k1")]
    match fast::verify(hash, signature, public_key_bytes) {
        Dispatch::Handled(valid) => return valid,
        Dispatch::Declined => {
            tracing::debug!("fast verification backend declined, falling back to reference backend");
        }
    }
    reference::verify(hash, signature, public_point)
}

#[cfg(feature = "secp256k1")]
mod fast {
    use super::Dispatch;
    use coinkit_types::{PrivateScalar, Signature};
    use secp256k1::{ecdsa, Message, PublicKey, SecretKey, SECP256K1};

    pub fn sign(hash: &[u8; 32], scalar: &PrivateScalar) -> Dispatch<Signature> {
        let Ok(secret) = SecretKey::from_slice(&scalar.to_bytes()) else {
            return Dispatch::Declined;
        };
        let message = Message::from_digest(*hash);
        let signature = SECP256K1.sign_ecdsa(&message, &secret);
        Dispatch::Handled(Signature(signature.serialize_compact()))
    }

    pub fn verify(
        hash: &[u8; 32],
        signature: &Signature,
        public_key_bytes: &[u8],
    ) -> Dispatch<bool> {
        let Ok(public_key) = PublicKey::from_slice(public_key_bytes) else {
            return Dispatch::Declined;
        };
        let Ok(sig) = ecdsa::Signature::from_compact(&signature.0) else {
            // Parseable inputs with out-of-range r/s are an invalid
            // signature, not a reason to fall through.
            return Dispatch::Handled(false);
        };
        let message = Message::from_digest(*hash);
        Dispatch::Handled(SECP256K1.verify_ecdsa(&message, &sig, &public_key).is_ok())
    }
}

mod reference {
    use coinkit_types::{KeyError, PrivateScalar, Signature};
    use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
    use k256::ecdsa::{SigningKey, VerifyingKey};

    pub fn sign(hash: &[u8; 32], scalar: &PrivateScalar) -> Result<Signature, KeyError> {
        let signing_key = SigningKey::from_bytes(&scalar.to_bytes().into())
            .map_err(|_| KeyError::InvalidPrivateKey)?;
        let signature: k256::ecdsa::Signature = signing_key
            .sign_prehash(hash)
            .map_err(|e| KeyError::Signing(e.to_string()))?;
        let mut raw = [0u8; 64];
        raw.copy_from_slice(&signature.to_bytes());
        Ok(Signature(raw))
    }

    pub fn verify(hash: &[u8; 32], signature: &Signature, public_point: &k256::PublicKey) -> bool {
        let Ok(sig) = k256::ecdsa::Signature::from_slice(&signature.0) else {
            return false;
        };
        VerifyingKey::from(*public_point)
            .verify_prehash(hash, &sig)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k256::elliptic_curve::sec1::ToEncodedPoint;

    fn test_scalar() -> PrivateScalar {
        PrivateScalar::from_bytes([0x42u8; 32]).unwrap()
    }

    fn public_point(scalar: &PrivateScalar) -> k256::PublicKey {
        k256::SecretKey::from_bytes(&scalar.to_bytes().into())
            .unwrap()
            .public_key()
    }

    #[test]
    fn sign_verify_roundtrip() {
        let scalar = test_scalar();
        let point = public_point(&scalar);
        let encoded = point.to_encoded_point(true);
        let hash = [0x17u8; 32];

        let sig = sign_hash(&hash, &scalar).unwrap();
        assert!(verify_hash(&hash, &sig, encoded.as_bytes(), &point));
    }

    #[test]
    fn wrong_hash_fails() {
        let scalar = test_scalar();
        let point = public_point(&scalar);
        let encoded = point.to_encoded_point(true);

        let sig = sign_hash(&[0x17u8; 32], &scalar).unwrap();
        assert!(!verify_hash(&[0x18u8; 32], &sig, encoded.as_bytes(), &point));
    }

    #[test]
    fn wrong_key_fails() {
        let scalar = test_scalar();
        let other = PrivateScalar::from_bytes([0x43u8; 32]).unwrap();
        let other_point = public_point(&other);
        let encoded = other_point.to_encoded_point(true);

        let sig = sign_hash(&[0x17u8; 32], &scalar).unwrap();
        assert!(!verify_hash(&[0x17u8; 32], &sig, encoded.as_bytes(), &other_point));
    }

    #[test]
    fn signing_is_deterministic() {
        let scalar = test_scalar();
        let hash = [0x99u8; 32];
        let s1 = sign_hash(&hash, &scalar).unwrap();
        let s2 = sign_hash(&hash, &scalar).unwrap();
        assert_eq!(s1, s2);
    }

    #[test]
    fn reference_backend_verifies_chain_signatures() {
        let scalar = test_scalar();
        let point = public_point(&scalar);
        let hash = [0x31u8; 32];
        let sig = sign_hash(&hash, &scalar).unwrap();
        assert!(super::reference::verify(&hash, &sig, &point));
    }

    #[cfg(feature = "secp256k1")]
    #[test]
    fn backends_agree_byte_for_byte() {
        let scalar = test_scalar();
        let hash = [0x55u8; 32];
        let fast_sig = match super::fast::sign(&hash, &scalar) {
            Dispatch::Handled(sig) => sig,
            Dispatch::Declined => panic!("fast backend declined a valid scalar"),
        };
        let reference_sig = super::reference::sign(&hash, &scalar).unwrap();
        assert_eq!(fast_sig, reference_sig);
    }

    #[cfg(feature = "secp256k1")]
    #[test]
    fn fast_backend_declines_undecodable_point() {
        let scalar = test_scalar();
        let sig = sign_hash(&[0x01u8; 32], &scalar).unwrap();
        // 33 bytes with an unknown tag: not a point encoding the FFI parser accepts.
        let mut garbage = [0u8; 33];
        garbage[0] = 0xff;
        match super::fast::verify(&[0x01u8; 32], &sig, &garbage) {
            Dispatch::Declined => {}
            Dispatch::Handled(_) => panic!("expected the fast backend to decline"),
        }
    }

    #[test]
    fn corrupted_signature_is_invalid_not_error() {
        let scalar = test_scalar();
        let point = public_point(&scalar);
        let encoded = point.to_encoded_point(true);
        let hash = [0x77u8; 32];

        let mut sig = sign_hash(&hash, &scalar).unwrap();
        sig.0[10] ^= 0x01;
        assert!(!verify_hash(&hash, &sig, encoded.as_bytes(), &point));
    }
}
