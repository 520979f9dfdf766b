//! RSA key generation and chained block encryption of bit sequences.
//!
//! Keys are generated with an exact modulus size; the RSA transform is then
//! used as the block primitive of a CBC-style mode over least-significant-bit
//! first [`BitVector`]s.
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use rsa_cbc::{generate_keys_with, BitVector, RsaConfig};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let keys = generate_keys_with(64, &RsaConfig::default(), &mut rng).unwrap();
//!
//! let plaintext = BitVector::from_bytes(b"Hello");
//! let ciphertext = keys.public_key.encrypt(8, &plaintext, &mut rng).unwrap();
//! let decrypted = keys.private_key.decrypt(8, &ciphertext).unwrap();
//! assert_eq!(decrypted, plaintext);
//! ```
//!
//! None of this is hardened: no constant-time arithmetic, no padding scheme.

pub mod config;
pub mod error;
pub mod rsa;

pub use config::RsaConfig;
pub use error::{Result, RsaError};
pub use rsa::{
    decrypt, encrypt, generate_keys, generate_keys_with, BitVector, Factors, RsaKeyPair,
    RsaPrivateKey, RsaPublicKey,
};
