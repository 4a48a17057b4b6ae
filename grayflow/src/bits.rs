//! LSB-first bit-vector utilities.

use arrayvec::ArrayVec;

/// Returns ceiling log2.
pub const fn clog2(value: u64) -> usize {
    if value == 0 {
        0
    } else {
        (u64::BITS - (value - 1).leading_zeros()) as usize
    }
}

/// Returns the LSB-first bit representation of an integer.
///
/// Panics if `N` is too narrow to hold every set bit of `value`.
pub fn u64_to_bits<const N: usize>(value: u64) -> [bool; N] {
    assert!(
        (u64::BITS - value.leading_zeros()) as usize <= N,
        "Width ({}) is too small to be converted from the value '{:#x}'",
        N,
        value
    );
    (0..N)
        .map(|i| if i >= u64::BITS as usize { false } else { (value & (1 << i)) != 0 })
        .collect::<ArrayVec<bool, N>>()
        .into_inner()
        .unwrap()
}

/// Reassembles an LSB-first bit vector into an integer.
pub fn bits_to_u64<const N: usize>(bits: [bool; N]) -> u64 {
    bits.iter()
        .enumerate()
        .take(u64::BITS as usize)
        .fold(0, |value, (i, &bit)| value | ((bit as u64) << i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clog2_small_values() {
        assert_eq!(clog2(0), 0);
        assert_eq!(clog2(1), 0);
        assert_eq!(clog2(2), 1);
        assert_eq!(clog2(3), 2);
        assert_eq!(clog2(8), 3);
        assert_eq!(clog2(9), 4);
        assert_eq!(clog2(256), 8);
    }

    #[test]
    fn bits_roundtrip() {
        for value in [0u64, 1, 2, 0x5a, 0xff] {
            assert_eq!(bits_to_u64(u64_to_bits::<8>(value)), value);
        }
        assert_eq!(bits_to_u64(u64_to_bits::<64>(u64::MAX)), u64::MAX);
    }

    #[test]
    fn bits_are_lsb_first() {
        assert_eq!(u64_to_bits::<4>(0b0110), [false, true, true, false]);
    }

    #[test]
    #[should_panic]
    fn bits_width_too_small() {
        let _ = u64_to_bits::<4>(0x10);
    }
}
