// Bit-vector codec
// Unsigned integers <-> least-significant-bit-first boolean sequences

use std::ops::Deref;

use num_traits::Zero;

use super::bigint::RsaBigInt;

/// Ordered bit sequence, least significant bit first
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitVector {
    bits: Vec<bool>,
}

/// Binary digits of `value`, least significant first.
/// Zero is encoded as a single 0 bit. A non-zero `width` pads with zeros to
/// the next multiple of `width`; nothing is ever truncated.
///
/// ```
/// use rsa_cbc::rsa::bits::int_to_bits;
/// use rsa_cbc::rsa::bigint::from_u64;
///
/// assert_eq!(int_to_bits(&from_u64(5), 7), vec![true, false, true, false, false, false, false]);
/// ```
pub fn int_to_bits(value: &RsaBigInt, width: usize) -> Vec<bool> {
    let mut bits: Vec<bool> = if value.is_zero() {
        vec![false]
    } else {
        value.to_radix_le(2).into_iter().map(|digit| digit == 1).collect()
    };
    if width != 0 {
        pad_to_block_multiple(&mut bits, width);
    }
    bits
}

/// Sum of bit_i * 2^i
pub fn bits_to_int(bits: &[bool]) -> RsaBigInt {
    RsaBigInt::from_bytes_le(&pack_bytes(bits))
}

fn pack_bytes(bits: &[bool]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |byte, (i, &bit)| byte | ((bit as u8) << i))
        })
        .collect()
}

/// Zero-extend `bits` in place until its length is a positive multiple of
/// `block_size`. An empty sequence first gets a single 0 bit.
///
/// # Panics
/// Panics if `block_size` is zero.
pub fn pad_to_block_multiple(bits: &mut Vec<bool>, block_size: usize) {
    assert!(block_size > 0, "block size must be positive");
    if bits.is_empty() {
        bits.push(false);
    }
    let remainder = bits.len() % block_size;
    if remainder != 0 {
        bits.resize(bits.len() + block_size - remainder, false);
    }
}

impl BitVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    /// See [`int_to_bits`]
    pub fn from_uint(value: &RsaBigInt, width: usize) -> Self {
        Self {
            bits: int_to_bits(value, width),
        }
    }

    /// See [`bits_to_int`]
    pub fn to_uint(&self) -> RsaBigInt {
        bits_to_int(&self.bits)
    }

    /// Unpack bytes in order, each byte least significant bit first
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let bits = bytes
            .iter()
            .flat_map(|byte| (0..8).map(move |i| (byte >> i) & 1 == 1))
            .collect();
        Self { bits }
    }

    /// Inverse of [`BitVector::from_bytes`]. A trailing partial byte is zero-filled.
    pub fn to_bytes(&self) -> Vec<u8> {
        pack_bytes(&self.bits)
    }

    /// See [`pad_to_block_multiple`]
    pub fn pad_to_block_multiple(&mut self, block_size: usize) {
        pad_to_block_multiple(&mut self.bits, block_size);
    }

    /// Consecutive `block_size`-bit slices; the last one may be shorter
    pub fn blocks(&self, block_size: usize) -> std::slice::Chunks<'_, bool> {
        self.bits.chunks(block_size)
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn extend_from_slice(&mut self, bits: &[bool]) {
        self.bits.extend_from_slice(bits);
    }
}

impl Deref for BitVector {
    type Target = [bool];

    fn deref(&self) -> &[bool] {
        &self.bits
    }
}

impl From<Vec<bool>> for BitVector {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl FromIterator<bool> for BitVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;

    const T: bool = true;
    const F: bool = false;

    #[test]
    fn test_int_to_bits() {
        assert_eq!(int_to_bits(&from_u64(5), 0), vec![T, F, T]);
        assert_eq!(int_to_bits(&from_u64(5), 7), vec![T, F, T, F, F, F, F]);
        assert_eq!(int_to_bits(&from_u64(0), 0), vec![F]);
        assert_eq!(int_to_bits(&from_u64(0), 4), vec![F, F, F, F]);
        // 11 bits padded to the next multiple of 4
        assert_eq!(int_to_bits(&from_u64(1024), 4).len(), 12);
        // exact multiple is left alone
        assert_eq!(int_to_bits(&from_u64(255), 8).len(), 8);
    }

    #[test]
    fn test_bits_to_int() {
        assert_eq!(bits_to_int(&[T, F, T, F, F]), from_u64(5));
        assert_eq!(bits_to_int(&[]), from_u64(0));
        assert_eq!(
            bits_to_int(&[T, T, T, T, F, F, F, F, F, F]),
            from_u64(15)
        );
    }

    #[test]
    fn test_pad_to_block_multiple() {
        let mut bits = vec![];
        pad_to_block_multiple(&mut bits, 3);
        assert_eq!(bits, vec![F, F, F]);

        let mut bits = vec![T, T, T, T, T];
        pad_to_block_multiple(&mut bits, 4);
        assert_eq!(bits, vec![T, T, T, T, T, F, F, F]);

        let mut bits = vec![T, T];
        pad_to_block_multiple(&mut bits, 2);
        assert_eq!(bits, vec![T, T]);
    }

    #[test]
    fn test_bytes() {
        let vector = BitVector::from_bytes(&[0x01, 0x80]);
        assert_eq!(vector.len(), 16);
        assert!(vector[0]);
        assert!(vector[15]);
        assert_eq!(vector.to_uint(), from_u64(0x8001));
        assert_eq!(vector.to_bytes(), vec![0x01, 0x80]);

        let partial = BitVector::from(vec![T, F, T]);
        assert_eq!(partial.to_bytes(), vec![0x05]);
    }

    #[test]
    fn test_blocks() {
        let mut vector = BitVector::from_uint(&from_u64(0b1_0110_1101), 0);
        vector.pad_to_block_multiple(4);
        let blocks: Vec<_> = vector.blocks(4).map(bits_to_int).collect();
        assert_eq!(blocks, vec![from_u64(0b1101), from_u64(0b0110), from_u64(1)]);
    }
}
