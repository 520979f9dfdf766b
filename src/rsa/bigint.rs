// RSA Big Integer Operations
// Modular arithmetic toolkit on top of num-bigint

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{Result, RsaError};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Greatest common divisor (Euclid). Always non-negative, gcd(a, 0) = |a|.
///
/// ```
/// use num_bigint::BigInt;
/// use rsa_cbc::rsa::bigint::gcd;
///
/// assert_eq!(gcd(&BigInt::from(143), &BigInt::from(559)), BigInt::from(13));
/// ```
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = a.mod_floor(&b);
        a = std::mem::replace(&mut b, r);
    }
    a.abs()
}

/// Extended Euclidean Algorithm, iterative.
/// Returns (x, y, g) such that d*x + f*y = g = gcd(d, f).
///
/// The coefficients are returned as the iteration leaves them and may be
/// negative; callers reduce them into whatever range they need.
///
/// ```
/// use num_bigint::BigInt;
/// use rsa_cbc::rsa::bigint::extended_gcd;
///
/// let (x, y, g) = extended_gcd(&BigInt::from(143), &BigInt::from(559));
/// assert_eq!((x, y, g), (BigInt::from(4), BigInt::from(-1), BigInt::from(13)));
/// ```
pub fn extended_gcd(d: &BigInt, f: &BigInt) -> (BigInt, BigInt, BigInt) {
    let mut d = d.clone();
    let mut f = f.clone();
    let (mut x, mut last_x) = (BigInt::zero(), BigInt::one());
    let (mut y, mut last_y) = (BigInt::one(), BigInt::zero());

    while !f.is_zero() {
        let (quotient, remainder) = d.div_mod_floor(&f);
        d = std::mem::replace(&mut f, remainder);

        let next_x = &last_x - &quotient * &x;
        last_x = std::mem::replace(&mut x, next_x);

        let next_y = &last_y - &quotient * &y;
        last_y = std::mem::replace(&mut y, next_y);
    }

    (last_x, last_y, d)
}

/// Modular exponentiation: base^exp mod modulus.
/// Square-and-multiply over the exponent bits, least significant first.
///
/// # Panics
/// Panics if `modulus` is zero.
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    assert!(!modulus.is_zero(), "mod_pow: modulus must be positive");

    let mut result = RsaBigInt::one() % modulus;
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        exp >>= 1;
        base = (&base * &base) % modulus;
    }

    result
}

/// Compute modular inverse: a^(-1) mod m, reduced into [0, m).
/// Returns None if the inverse doesn't exist.
///
/// ```
/// use rsa_cbc::rsa::bigint::{from_u64, mod_inverse};
///
/// assert_eq!(mod_inverse(&from_u64(31), &from_u64(105)), Some(from_u64(61)));
/// assert_eq!(mod_inverse(&from_u64(6), &from_u64(9)), None);
/// ```
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> Option<RsaBigInt> {
    if m.is_zero() {
        return None;
    }

    let a = BigInt::from_biguint(Sign::Plus, a.clone());
    let m = BigInt::from_biguint(Sign::Plus, m.clone());
    let (x, _, g) = extended_gcd(&a, &m);

    if !g.is_one() {
        // Inverse doesn't exist
        return None;
    }

    x.mod_floor(&m).to_biguint()
}

/// Number of bits needed to hold a non-negative number (0 needs one bit)
pub fn bit_length(value: &BigInt) -> Result<u64> {
    match value.to_biguint() {
        Some(unsigned) => Ok(bit_size(&unsigned)),
        None => Err(RsaError::NegativeValue(value.clone())),
    }
}

/// Unsigned counterpart of [`bit_length`]
pub fn bit_size(value: &RsaBigInt) -> u64 {
    value.bits().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(&int(143), &int(559)), int(13));
        assert_eq!(gcd(&int(17), &int(0)), int(17));
        assert_eq!(gcd(&int(0), &int(0)), int(0));
        assert_eq!(gcd(&int(-12), &int(18)), int(6));
    }

    #[test]
    fn test_gcd_brute_force() {
        for a in 0i64..40 {
            for b in 0i64..40 {
                let g = gcd(&int(a), &int(b));
                let expected = (1..=a.max(b))
                    .filter(|k| a % k == 0 && b % k == 0)
                    .max()
                    .unwrap_or(0);
                assert_eq!(g, int(expected), "gcd({}, {})", a, b);
            }
        }
    }

    #[test]
    fn test_extended_gcd() {
        let (x, y, g) = extended_gcd(&int(143), &int(559));
        assert_eq!((x.clone(), y.clone(), g.clone()), (int(4), int(-1), int(13)));
        assert_eq!(int(143) * x + int(559) * y, g);

        let (x, y, g) = extended_gcd(&int(31), &int(105));
        assert_eq!((x, y, g), (int(-44), int(13), int(1)));
    }

    #[test]
    fn test_extended_gcd_bezout_identity() {
        for d in 1i64..60 {
            for f in 1i64..60 {
                let (x, y, g) = extended_gcd(&int(d), &int(f));
                assert_eq!(int(d) * x + int(f) * y, g.clone());
                assert_eq!(g, gcd(&int(d), &int(f)));
            }
        }
    }

    #[test]
    fn test_mod_pow() {
        // 3^5 mod 7 = 243 mod 7 = 5
        let result = mod_pow(&from_u64(3), &from_u64(5), &from_u64(7));
        assert_eq!(result, from_u64(5));

        assert_eq!(mod_pow(&from_u64(9), &from_u64(0), &from_u64(7)), from_u64(1));
        assert_eq!(mod_pow(&from_u64(9), &from_u64(0), &from_u64(1)), from_u64(0));
        assert_eq!(mod_pow(&from_u64(0), &from_u64(4), &from_u64(7)), from_u64(0));
    }

    #[test]
    fn test_mod_pow_matches_num_bigint() {
        let base = from_u64(0xDEAD_BEEF);
        let exp = from_u64(65537);
        let modulus = from_u64(0xFFFF_FFFF_FFFF_FFC5);
        assert_eq!(mod_pow(&base, &exp, &modulus), base.modpow(&exp, &modulus));
    }

    #[test]
    #[should_panic]
    fn test_mod_pow_zero_modulus() {
        mod_pow(&from_u64(2), &from_u64(3), &from_u64(0));
    }

    #[test]
    fn test_mod_inverse() {
        // 3 * 5 = 15 ≡ 1 mod 7, so inverse of 3 mod 7 is 5
        let a = from_u64(3);
        let m = from_u64(7);
        let inv = mod_inverse(&a, &m).unwrap();
        assert_eq!(inv, from_u64(5));
        assert_eq!((a * inv) % m, from_u64(1));

        assert_eq!(mod_inverse(&from_u64(31), &from_u64(105)), Some(from_u64(61)));
    }

    #[test]
    fn test_mod_inverse_missing() {
        assert_eq!(mod_inverse(&from_u64(6), &from_u64(9)), None);
        assert_eq!(mod_inverse(&from_u64(0), &from_u64(9)), None);
        assert_eq!(mod_inverse(&from_u64(3), &from_u64(0)), None);
    }

    #[test]
    fn test_bit_length() {
        assert_eq!(bit_length(&int(0)), Ok(1));
        assert_eq!(bit_length(&int(1)), Ok(1));
        assert_eq!(bit_length(&int(1024)), Ok(11));
        assert_eq!(bit_length(&int(1023)), Ok(10));
        assert_eq!(bit_length(&int(-1)), Err(RsaError::NegativeValue(int(-1))));
        assert_eq!(bit_size(&from_u64(0)), 1);
    }
}
