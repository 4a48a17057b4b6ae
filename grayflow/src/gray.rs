//! Reflected-binary Gray-code transforms.
//!
//! The encoder XORs a bus against a one-bit right shift of itself; the top
//! Gray bit equals the top binary bit because the shifted-in bit is zero.
//! The decoder folds the running prefix XOR back down.

use arrayvec::ArrayVec;
use static_assertions::*;
use thiserror::Error;

/// Bus width of the fixed-width encoder.
pub const BUS_WIDTH: usize = 8;

/// Widest bus supported by the wide transforms.
pub const WIDTH_MAX: usize = u64::BITS as usize;

const_assert!(BUS_WIDTH <= WIDTH_MAX);

#[allow(missing_docs)]
#[allow(variant_size_differences)]
#[derive(Debug, PartialEq, Eq, Error)]
pub enum GrayCodeError {
    #[error("value {value:#x} does not fit in {width} bits")]
    InvalidInput { value: u64, width: usize },

    #[error("unsupported bus width: {width}")]
    BadWidth { width: usize },
}

/// Encodes an 8-bit binary value as reflected Gray code.
pub const fn gray_encode(b: u8) -> u8 {
    b ^ (b >> 1)
}

/// Decodes an 8-bit reflected Gray code back to binary.
pub const fn gray_decode(g: u8) -> u8 {
    let mut b = g;
    let mut mask = b >> 1;
    while mask != 0 {
        b ^= mask;
        mask >>= 1;
    }
    b
}

/// Encodes a binary value on a `width`-bit bus as reflected Gray code.
pub fn gray_encode_wide(b: u64, width: usize) -> Result<u64, GrayCodeError> {
    check_width(b, width)?;
    Ok(b ^ (b >> 1))
}

/// Decodes a `width`-bit reflected Gray code back to binary.
pub fn gray_decode_wide(g: u64, width: usize) -> Result<u64, GrayCodeError> {
    check_width(g, width)?;
    let mut b = g;
    let mut mask = b >> 1;
    while mask != 0 {
        b ^= mask;
        mask >>= 1;
    }
    Ok(b)
}

fn check_width(value: u64, width: usize) -> Result<(), GrayCodeError> {
    if width == 0 || width > WIDTH_MAX {
        return Err(GrayCodeError::BadWidth { width });
    }
    if width < WIDTH_MAX && value >> width != 0 {
        return Err(GrayCodeError::InvalidInput { value, width });
    }
    Ok(())
}

/// Encodes an LSB-first bit vector as reflected Gray code, bit by bit.
///
/// The input is zero-extended by one bit, so `g[i] = b[i + 1] ^ b[i]` for
/// every lane and the top lane passes through unchanged.
pub fn gray_encode_bits<const N: usize>(b: [bool; N]) -> [bool; N] {
    (0..N)
        .map(|i| if i + 1 < N { b[i + 1] ^ b[i] } else { b[i] })
        .collect::<ArrayVec<bool, N>>()
        .into_inner()
        .unwrap()
}

/// Decodes an LSB-first Gray-coded bit vector, folding the prefix XOR from
/// the MSB down.
pub fn gray_decode_bits<const N: usize>(g: [bool; N]) -> [bool; N] {
    let mut b = g;
    for i in (0..N.saturating_sub(1)).rev() {
        b[i] ^= b[i + 1];
    }
    b
}
