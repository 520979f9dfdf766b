// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod bits;
pub mod decrypt;
pub mod encrypt;
pub mod keygen;
pub mod prime;
pub mod random;

pub use bits::BitVector;
pub use decrypt::decrypt;
pub use encrypt::encrypt;
pub use keygen::{generate_keys, generate_keys_with, Factors, RsaKeyPair, RsaPrivateKey, RsaPublicKey};
pub use prime::{generate_prime, is_probable_prime};
pub use random::RandomSource;
