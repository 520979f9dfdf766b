// RSA Decryption Implementation
// Chained block (CBC) decryption of bit sequences produced by `encrypt`

use log::debug;

use super::bits::{bits_to_int, int_to_bits, BitVector};
use super::keygen::RsaPrivateKey;
use crate::error::{Result, RsaError};

/// Decrypt a ciphertext laid out as a `block_size`-bit IV followed by
/// modulus-sized blocks.
///
/// Each block gives `m_i = (c_i^d mod n) ^ c_{i-1}`; the ciphertext, not the
/// recovered plaintext, chains into the next block. The output keeps the zero
/// padding added at encryption time.
pub fn decrypt(
    block_size: usize,
    private_key: &RsaPrivateKey,
    ciphertext: &BitVector,
) -> Result<BitVector> {
    if block_size == 0 {
        return Err(RsaError::InvalidBlockSize(block_size));
    }

    let modulus_bits = private_key.bit_length() as usize;
    let length = ciphertext.len();
    if length < block_size || (length - block_size) % modulus_bits != 0 {
        return Err(RsaError::MalformedCiphertext {
            length,
            block_size,
            modulus_bits,
        });
    }

    let (iv, body) = ciphertext.split_at(block_size);
    let block_count = body.len() / modulus_bits;

    let mut cbc = bits_to_int(iv);
    let mut result = BitVector::with_capacity(block_count * block_size);
    for block in body.chunks(modulus_bits) {
        let c = bits_to_int(block);
        let m = private_key.apply(&c) ^ &cbc;
        result.extend_from_slice(&int_to_bits(&m, block_size));
        cbc = c;
    }

    debug!("decrypted {} blocks of {} bits", block_count, modulus_bits);
    Ok(result)
}
