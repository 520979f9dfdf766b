// Random source used for prime candidates, Miller-Rabin witnesses and IVs

use num_bigint::RandBigInt;
use rand::Rng;

use super::bigint::RsaBigInt;

/// Supplier of uniformly distributed big integers.
///
/// Every `rand::Rng` is a `RandomSource`; the strength of the numbers is
/// whatever the wrapped generator provides.
pub trait RandomSource {
    /// Uniform value in [0, 2^bits)
    fn random_bits(&mut self, bits: u64) -> RsaBigInt;

    /// Uniform value in [low, high)
    ///
    /// # Panics
    /// Panics if `low >= high`.
    fn random_range(&mut self, low: &RsaBigInt, high: &RsaBigInt) -> RsaBigInt;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn random_bits(&mut self, bits: u64) -> RsaBigInt {
        self.gen_biguint(bits)
    }

    fn random_range(&mut self, low: &RsaBigInt, high: &RsaBigInt) -> RsaBigInt {
        self.gen_biguint_range(low, high)
    }
}
