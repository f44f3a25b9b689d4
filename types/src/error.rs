//! Common error type shared across crates.

use thiserror::Error;

/// Errors surfaced by key construction, encoding, and signing.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("private key must lie strictly between 0 and the curve order")]
    InvalidPrivateKey,

    #[error("private key magnitude exceeds 32 bytes")]
    PrivateKeyTooLarge,

    #[error("operation requires a private key")]
    MissingPrivateKey,

    #[error("unexpected public key parameter")]
    UnexpectedPublicKey,

    #[error("invalid public key encoding")]
    InvalidPublicKey,

    #[error("no candidate network with WIF version {0:#04x}")]
    UnknownNetworkVersion(u8),

    #[error("WIF version {found:#04x} does not match network version {expected:#04x}")]
    InvalidNetworkVersion { expected: u8, found: u8 },

    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("signing error: {0}")]
    Signing(String),
}
