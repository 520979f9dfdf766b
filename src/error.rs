// Error types for RSA key generation and chained block encryption

use num_bigint::BigInt;
use thiserror::Error;

/// Errors produced by the RSA engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsaError {
    /// Bit length was requested for a negative number
    #[error("invalid number - only positives are allowed: {0}")]
    NegativeValue(BigInt),

    /// A prime search drew its whole candidate budget without finding a prime
    #[error("prime search exhausted after {attempts} candidates")]
    AttemptsExhausted { attempts: u64 },

    /// Ciphertext is not an IV followed by whole modulus-sized blocks
    #[error(
        "malformed ciphertext: {length} bits is not {block_size} + k * {modulus_bits}"
    )]
    MalformedCiphertext {
        length: usize,
        block_size: usize,
        modulus_bits: usize,
    },

    #[error("block size must be positive, got {0}")]
    InvalidBlockSize(usize),

    /// p and q share the bit budget evenly, so the modulus size must be even
    #[error("key size must be even, got {0}")]
    OddKeySize(u64),

    /// Every candidate exponent from `start` up to phi shares a factor with phi
    #[error("no public exponent >= {start} is coprime with phi(n)")]
    NoPublicExponent { start: u64 },
}

/// Result type for RSA operations
pub type Result<T> = std::result::Result<T, RsaError>;
