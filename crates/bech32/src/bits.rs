//! Regrouping of bit strings between fixed group widths.

use crate::error::{Bech32Error, Bech32Result};

/// Regroup `data`, a sequence of `from`-bit values, into a sequence of `to`-bit values. Both
/// widths must be in `1..=8`.
///
/// When `pad` is true, trailing bits are left-justified into one final zero-padded group. This is
/// the mode used to turn bytes into 5-bit groups before encoding. When `pad` is false, the trailing
/// bits must be fewer than `from` and all zero, otherwise `NonZeroPadding` is returned. This is
/// the mode used to turn decoded 5-bit groups back into bytes.
///
/// ```
/// use coins_bech32::convert_bits;
///
/// let groups = convert_bits(&[0x00, 0x01, 0x02], 8, 5, true).unwrap();
/// assert_eq!(groups, vec![0, 0, 0, 16, 4]);
///
/// let bytes = convert_bits(&groups, 5, 8, false).unwrap();
/// assert_eq!(bytes, vec![0x00, 0x01, 0x02]);
/// ```
pub fn convert_bits(data: &[u8], from: u8, to: u8, pad: bool) -> Bech32Result<Vec<u8>> {
    if !(1..=8).contains(&from) || !(1..=8).contains(&to) {
        return Err(Bech32Error::InvalidBitGroups { from, to });
    }

    let from = u32::from(from);
    let to = u32::from(to);
    let max_value: u32 = (1 << to) - 1;
    // Only the bits that can still be emitted are kept.
    let max_acc: u32 = (1 << (from + to - 1)) - 1;

    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut out = Vec::with_capacity((data.len() * from as usize + to as usize - 1) / to as usize);

    for &value in data {
        if u32::from(value) >> from != 0 {
            return Err(Bech32Error::InvalidInputWidth {
                value,
                bits: from as u8,
            });
        }
        acc = ((acc << from) | u32::from(value)) & max_acc;
        bits += from;
        while bits >= to {
            bits -= to;
            out.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            out.push(((acc << (to - bits)) & max_value) as u8);
        }
    } else if bits >= from || (acc << (to - bits)) & max_value != 0 {
        tracing::trace!(leftover_bits = bits, "rejecting unpadded conversion trailer");
        return Err(Bech32Error::NonZeroPadding);
    }

    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_should_regroup_bytes_into_padded_quintets() {
        assert_eq!(
            convert_bits(&[0x00, 0x01, 0x02], 8, 5, true).unwrap(),
            vec![0, 0, 0, 16, 4]
        );
        assert_eq!(
            convert_bits(b"hello world", 8, 5, true).unwrap(),
            vec![13, 1, 18, 22, 24, 27, 3, 15, 4, 1, 27, 22, 30, 28, 19, 12, 12, 16]
        );
        assert_eq!(convert_bits(&[0xff], 8, 5, true).unwrap(), vec![31, 28]);
    }

    #[test]
    fn it_should_regroup_quintets_back_into_bytes() {
        assert_eq!(convert_bits(&[31, 28], 5, 8, false).unwrap(), vec![0xff]);
        assert_eq!(
            convert_bits(&[0, 0, 0, 16, 4], 5, 8, false).unwrap(),
            vec![0x00, 0x01, 0x02]
        );
    }

    #[test]
    fn it_should_handle_empty_input() {
        assert!(convert_bits(&[], 8, 5, true).unwrap().is_empty());
        assert!(convert_bits(&[], 5, 8, false).unwrap().is_empty());
    }

    #[test]
    fn it_should_support_other_widths() {
        // 001 010 011 100 101 110 111 000 -> 00101001 11001011 10111000
        assert_eq!(
            convert_bits(&[1, 2, 3, 4, 5, 6, 7, 0], 3, 8, false).unwrap(),
            vec![0x29, 0xcb, 0xb8]
        );
        assert_eq!(
            convert_bits(&[1, 2, 3, 4, 5, 6, 7, 8], 3, 8, true),
            Err(Bech32Error::InvalidInputWidth { value: 8, bits: 3 })
        );
        assert_eq!(
            convert_bits(&[0b1010_0101], 8, 1, false).unwrap(),
            vec![1, 0, 1, 0, 0, 1, 0, 1]
        );
    }

    #[test]
    fn it_should_reject_values_wider_than_from_bits() {
        assert_eq!(
            convert_bits(&[0, 32], 5, 8, false),
            Err(Bech32Error::InvalidInputWidth { value: 32, bits: 5 })
        );
    }

    #[test]
    fn it_should_reject_non_zero_padding() {
        // 31, 31 leaves 2 set bits after the first byte
        assert_eq!(
            convert_bits(&[31, 31], 5, 8, false),
            Err(Bech32Error::NonZeroPadding)
        );
        // 15 zero bits leave 7 bits, more than a full 5-bit group
        assert_eq!(
            convert_bits(&[0, 0, 0], 5, 8, false),
            Err(Bech32Error::NonZeroPadding)
        );
    }

    #[test]
    fn it_should_reject_invalid_bit_groups() {
        assert_eq!(
            convert_bits(&[1], 0, 5, true),
            Err(Bech32Error::InvalidBitGroups { from: 0, to: 5 })
        );
        assert_eq!(
            convert_bits(&[1], 8, 9, true),
            Err(Bech32Error::InvalidBitGroups { from: 8, to: 9 })
        );
    }
}
