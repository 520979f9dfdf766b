// Miller-Rabin primality test and random prime search

use log::debug;
use num_integer::Integer;
use num_traits::One;

use super::bigint::{from_u64, mod_pow, RsaBigInt};
use super::random::RandomSource;
use crate::config::RsaConfig;
use crate::error::{Result, RsaError};

/// Miller-Rabin primality test.
/// Returns true if n is probably prime; each of the `confidence` rounds
/// lets a composite through with probability at most 1/4.
pub fn is_probable_prime<R>(n: &RsaBigInt, confidence: u32, rng: &mut R) -> bool
where
    R: RandomSource + ?Sized,
{
    if *n == from_u64(2) {
        return true;
    }
    if n.is_even() {
        return false;
    }
    if n <= &RsaBigInt::one() {
        return false;
    }
    if n <= &from_u64(7) {
        return true;
    }

    // Write n-1 as d * 2^s with d odd
    let n_minus_one = n - 1u8;
    let mut d = n_minus_one.clone();
    let mut s = 0u64;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    let two = from_u64(2);
    'witness: for _ in 0..confidence {
        // Witness in [2, n-2]
        let a = rng.random_range(&two, &n_minus_one);
        let mut x = mod_pow(&a, &d, n);

        if x.is_one() || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = (&x * &x) % n;
            if x.is_one() {
                return false;
            }
            if x == n_minus_one {
                continue 'witness;
            }
        }

        // Composite
        return false;
    }

    // Probably prime
    true
}

/// Draw random integers of at most `bits` bits until one passes
/// [`is_probable_prime`].
///
/// Gives up with [`RsaError::AttemptsExhausted`] once `config.max_attempts`
/// candidates have been rejected.
pub fn generate_prime<R>(bits: u64, config: &RsaConfig, rng: &mut R) -> Result<RsaBigInt>
where
    R: RandomSource + ?Sized,
{
    generate_prime_matching(bits, config, rng, |_| true)
}

/// Like [`generate_prime`], but a probable prime is only returned when
/// `accept` also holds for it. Rejected primes count against the budget.
pub fn generate_prime_matching<R, F>(
    bits: u64,
    config: &RsaConfig,
    rng: &mut R,
    mut accept: F,
) -> Result<RsaBigInt>
where
    R: RandomSource + ?Sized,
    F: FnMut(&RsaBigInt) -> bool,
{
    let mut attempts = 0u64;
    loop {
        if let Some(limit) = config.max_attempts {
            if attempts >= limit {
                debug!("no suitable {}-bit prime after {} candidates", bits, attempts);
                return Err(RsaError::AttemptsExhausted { attempts });
            }
        }
        attempts += 1;

        let candidate = rng.random_bits(bits);
        if accept(&candidate) && is_probable_prime(&candidate, config.confidence, rng) {
            debug!("{}-bit prime found after {} candidates", bits, attempts);
            return Ok(candidate);
        }
    }
}
