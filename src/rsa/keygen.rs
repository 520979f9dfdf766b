// RSA Key Generation
// Implements RSA key pair generation (factors, public and private keys)

use log::{debug, info, warn};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed};

use super::bigint::{bit_size, extended_gcd, from_u64, gcd, mod_inverse, mod_pow, RsaBigInt};
use super::bits::BitVector;
use super::prime::generate_prime_matching;
use super::random::RandomSource;
use crate::config::RsaConfig;
use crate::error::{Result, RsaError};

/// Prime factors of the modulus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factors {
    pub p: RsaBigInt,
    pub q: RsaBigInt,
}

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub n: RsaBigInt, // Modulus
    pub e: RsaBigInt, // Public exponent
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub n: RsaBigInt, // Modulus (same as public)
    pub d: RsaBigInt, // Private exponent
}

/// RSA Key Pair together with the primes it was built from
#[derive(Debug, Clone)]
pub struct RsaKeyPair {
    pub factors: Factors,
    pub private_key: RsaPrivateKey,
    pub public_key: RsaPublicKey,
}

impl Factors {
    /// Euler's totient of p*q
    pub fn phi(&self) -> RsaBigInt {
        (&self.p - 1u8) * (&self.q - 1u8)
    }
}

impl RsaPublicKey {
    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        bit_size(&self.n)
    }

    /// Raw RSA on a single value: m^e mod n
    pub fn apply(&self, m: &RsaBigInt) -> RsaBigInt {
        mod_pow(m, &self.e, &self.n)
    }

    /// Chained block encryption of `plaintext` with this key
    pub fn encrypt<R>(
        &self,
        block_size: usize,
        plaintext: &BitVector,
        rng: &mut R,
    ) -> Result<BitVector>
    where
        R: RandomSource + ?Sized,
    {
        super::encrypt::encrypt(block_size, self, plaintext, rng)
    }
}

impl RsaPrivateKey {
    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        bit_size(&self.n)
    }

    /// Raw RSA on a single value: c^d mod n
    pub fn apply(&self, c: &RsaBigInt) -> RsaBigInt {
        mod_pow(c, &self.d, &self.n)
    }

    /// Chained block decryption of `ciphertext` with this key
    pub fn decrypt(&self, block_size: usize, ciphertext: &BitVector) -> Result<BitVector> {
        super::decrypt::decrypt(block_size, self, ciphertext)
    }
}

impl RsaKeyPair {
    /// Get the bit length of the key
    pub fn bit_length(&self) -> u64 {
        self.public_key.bit_length()
    }

    pub fn into_parts(self) -> (Factors, RsaPrivateKey, RsaPublicKey) {
        (self.factors, self.private_key, self.public_key)
    }
}

/// Generate an RSA key pair whose modulus is exactly `size` bits, using the
/// thread-local generator and default settings
pub fn generate_keys(size: u64) -> Result<RsaKeyPair> {
    generate_keys_with(size, &RsaConfig::default(), &mut rand::thread_rng())
}

/// Generate an RSA key pair whose modulus is exactly `size` bits.
///
/// Both primes are drawn with `size / 2` bits and retried until the product
/// has the requested size. The public exponent is the smallest value from
/// `config.exponent_start` upward that is coprime with phi(n).
pub fn generate_keys_with<R>(size: u64, config: &RsaConfig, rng: &mut R) -> Result<RsaKeyPair>
where
    R: RandomSource + ?Sized,
{
    if size % 2 != 0 {
        return Err(RsaError::OddKeySize(size));
    }
    let half_bits = size / 2;

    // Step 1: p*p must already reach the full size, so any q close to p does too
    let p = generate_prime_matching(half_bits, config, rng, |p| bit_size(&(p * p)) == size)?;
    debug!("first prime found");

    // Step 2: a distinct q with p*q of the full size
    let q = generate_prime_matching(half_bits, config, rng, |q| {
        q != &p && bit_size(&(&p * q)) == size
    })?;
    debug!("second prime found");

    let factors = Factors { p, q };

    // Step 3: n = p*q, phi(n) = (p-1)(q-1)
    let n = &factors.p * &factors.q;
    let phi = factors.phi();

    // Step 4: public exponent
    let e = public_exponent(&phi, config.exponent_start)?;

    // Step 5: private exponent from the extended gcd coefficient
    let d = private_exponent(&phi, &e);

    info!("generated {}-bit key pair (e = {})", size, e);

    Ok(RsaKeyPair {
        factors,
        private_key: RsaPrivateKey { n: n.clone(), d },
        public_key: RsaPublicKey { n, e },
    })
}

/// Smallest e >= start with gcd(e, phi) = 1, scanning only below phi
fn public_exponent(phi: &RsaBigInt, start: u64) -> Result<RsaBigInt> {
    let phi_int = BigInt::from(phi.clone());
    let mut e = from_u64(start);
    while &e < phi {
        if gcd(&BigInt::from(e.clone()), &phi_int).is_one() {
            return Ok(e);
        }
        e += 1u8;
    }
    Err(RsaError::NoPublicExponent { start })
}

/// Private exponent for `e`, preferring the normalized modular inverse if
/// the extended gcd coefficient ever disagrees with it
fn private_exponent(phi: &RsaBigInt, e: &RsaBigInt) -> RsaBigInt {
    checked_private_exponent(raw_private_exponent(phi, e), phi, e)
}

/// d = y from extended_gcd(phi, e) when positive, y mod phi otherwise
fn raw_private_exponent(phi: &RsaBigInt, e: &RsaBigInt) -> RsaBigInt {
    let phi_int = BigInt::from(phi.clone());
    let (_, y, _) = extended_gcd(&phi_int, &BigInt::from(e.clone()));
    let raw = if y.is_positive() { y } else { y.mod_floor(&phi_int) };
    // raw is non-negative here
    raw.magnitude().clone()
}

fn checked_private_exponent(d: RsaBigInt, phi: &RsaBigInt, e: &RsaBigInt) -> RsaBigInt {
    match mod_inverse(e, phi) {
        Some(inverse) if inverse != d => {
            warn!(
                "extended gcd coefficient {} is not the inverse of e mod phi, using {}",
                d, inverse
            );
            inverse
        }
        _ => d,
    }
}
