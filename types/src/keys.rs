//! Key material types: validated private scalars and compact signatures.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::KeyError;

/// Order of the secp256k1 base-point group, big-endian.
///
/// Valid private scalars lie strictly between 0 and this value.
pub const SECP256K1_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xfe, 0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36,
    0x41, 0x41,
];

/// A validated secp256k1 private scalar, stored as 32 big-endian bytes.
///
/// Construction enforces the open range `(0, n)`, so every value of this type
/// is usable with both signing backends. The type intentionally does not
/// implement `Debug`, `Clone`, or serde to prevent accidental exposure; bytes
/// are zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateScalar([u8; 32]);

impl PrivateScalar {
    /// Validate 32 big-endian bytes as a scalar in `(0, n)`.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, KeyError> {
        if bytes == [0u8; 32] || bytes >= SECP256K1_ORDER {
            return Err(KeyError::InvalidPrivateKey);
        }
        Ok(Self(bytes))
    }

    /// Interpret an arbitrary-length big-endian unsigned integer as a scalar.
    ///
    /// Shorter input is left-zero-padded to 32 bytes. Input whose magnitude
    /// needs more than 32 bytes fails with `PrivateKeyTooLarge`; the value
    /// then goes through the same range validation as [`from_bytes`].
    ///
    /// [`from_bytes`]: Self::from_bytes
    pub fn from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        let significant = match slice.iter().position(|&b| b != 0) {
            Some(first) => &slice[first..],
            None => &[],
        };
        if significant.len() > 32 {
            return Err(KeyError::PrivateKeyTooLarge);
        }
        let mut bytes = [0u8; 32];
        bytes[32 - significant.len()..].copy_from_slice(significant);
        Self::from_bytes(bytes)
    }

    /// The fixed 32-byte big-endian encoding of the scalar.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }
}

/// A 64-byte compact ECDSA signature, `r || s`, low-S normalized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature(pub [u8; 64]);

impl Signature {
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.0)
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SigVisitor;

        impl<'de> serde::de::Visitor<'de> for SigVisitor {
            type Value = Signature;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "64 bytes")
            }

            fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
                let arr: [u8; 64] = v
                    .try_into()
                    .map_err(|_| E::invalid_length(v.len(), &self))?;
                Ok(Signature(arr))
            }

            fn visit_seq<A: serde::de::SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> Result<Self::Value, A::Error> {
                let mut arr = [0u8; 64];
                for (i, byte) in arr.iter_mut().enumerate() {
                    *byte = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &self))?;
                }
                Ok(Signature(arr))
            }
        }

        deserializer.deserialize_bytes(SigVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_scalar_rejected() {
        assert!(matches!(
            PrivateScalar::from_bytes([0u8; 32]),
            Err(KeyError::InvalidPrivateKey)
        ));
    }

    #[test]
    fn order_and_above_rejected() {
        assert!(matches!(
            PrivateScalar::from_bytes(SECP256K1_ORDER),
            Err(KeyError::InvalidPrivateKey)
        ));
        assert!(matches!(
            PrivateScalar::from_bytes([0xff; 32]),
            Err(KeyError::InvalidPrivateKey)
        ));
    }

    #[test]
    fn one_is_valid() {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        let scalar = PrivateScalar::from_bytes(bytes).unwrap();
        assert_eq!(scalar.to_bytes(), bytes);
    }

    #[test]
    fn order_minus_one_is_valid() {
        let mut bytes = SECP256K1_ORDER;
        bytes[31] -= 1;
        assert!(PrivateScalar::from_bytes(bytes).is_ok());
    }

    #[test]
    fn short_slice_left_padded() {
        let scalar = PrivateScalar::from_slice(&[0x01, 0x02]).unwrap();
        let mut expected = [0u8; 32];
        expected[30] = 0x01;
        expected[31] = 0x02;
        assert_eq!(scalar.to_bytes(), expected);
    }

    #[test]
    fn long_slice_with_leading_zeros_accepted() {
        let mut wide = [0u8; 40];
        wide[39] = 0x2a;
        let scalar = PrivateScalar::from_slice(&wide).unwrap();
        assert_eq!(scalar.to_bytes()[31], 0x2a);
    }

    #[test]
    fn oversized_magnitude_rejected() {
        let mut wide = [0u8; 33];
        wide[0] = 0x01;
        assert!(matches!(
            PrivateScalar::from_slice(&wide),
            Err(KeyError::PrivateKeyTooLarge)
        ));
    }

    #[test]
    fn empty_slice_is_zero() {
        assert!(matches!(
            PrivateScalar::from_slice(&[]),
            Err(KeyError::InvalidPrivateKey)
        ));
    }

    #[test]
    fn signature_bincode_roundtrip() {
        let sig = Signature([0xabu8; 64]);
        let encoded = bincode::serialize(&sig).unwrap();
        let decoded: Signature = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, sig);
    }

    #[test]
    fn signature_wrong_length_rejected() {
        let short = bincode::serialize(&vec![0u8; 63]).unwrap();
        assert!(bincode::deserialize::<Signature>(&short).is_err());
    }
}
