// RSA Encryption Implementation
// Chained block (CBC) encryption of bit sequences with RSA as the block primitive

use log::{debug, warn};
use num_traits::{One, Zero};

use super::bigint::RsaBigInt;
use super::bits::{bits_to_int, int_to_bits, BitVector};
use super::keygen::RsaPublicKey;
use super::random::RandomSource;
use crate::error::{Result, RsaError};

/// Encrypt `plaintext` in `block_size`-bit blocks.
///
/// The plaintext is zero-padded to a multiple of `block_size`. The output
/// starts with a random `block_size`-bit initialization vector, followed by
/// one modulus-sized block per plaintext block:
/// `c_i = (m_i ^ c_{i-1})^e mod n`, with the IV standing in for `c_0`.
pub fn encrypt<R>(
    block_size: usize,
    public_key: &RsaPublicKey,
    plaintext: &BitVector,
    rng: &mut R,
) -> Result<BitVector>
where
    R: RandomSource + ?Sized,
{
    if block_size == 0 {
        return Err(RsaError::InvalidBlockSize(block_size));
    }

    // After encryption each block is as wide as the modulus
    let modulus_bits = public_key.bit_length() as usize;
    if block_size >= modulus_bits {
        warn!(
            "block size {} is not below the {}-bit modulus, blocks may not round-trip",
            block_size, modulus_bits
        );
    }

    let mut padded = plaintext.clone();
    padded.pad_to_block_multiple(block_size);
    let block_count = padded.len() / block_size;

    // IV in [0, 2^s - 1)
    let iv_bound = (RsaBigInt::one() << block_size) - 1u8;
    let iv = rng.random_range(&RsaBigInt::zero(), &iv_bound);

    let mut result = BitVector::with_capacity(block_size + block_count * modulus_bits);
    result.extend_from_slice(&int_to_bits(&iv, block_size));

    let mut cbc = iv;
    for block in padded.blocks(block_size) {
        let chained = bits_to_int(block) ^ &cbc;
        let ciphertext = public_key.apply(&chained);
        result.extend_from_slice(&int_to_bits(&ciphertext, modulus_bits));
        cbc = ciphertext;
    }

    debug!(
        "encrypted {} blocks of {} bits into {} bits",
        block_count,
        block_size,
        result.len()
    );
    Ok(result)
}
