//! The bech32 alphabet.

/// The 32 character bech32 alphabet. The value `i` is encoded as `CHARSET[i]`.
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Reverse lookup from ASCII to 5-bit value. Both cases map to the same value, `-1` marks bytes
/// outside the alphabet.
const CHARSET_REV: [i8; 128] = {
    let mut rev = [-1i8; 128];
    let mut i = 0;
    while i < CHARSET.len() {
        rev[CHARSET[i] as usize] = i as i8;
        rev[CHARSET[i].to_ascii_uppercase() as usize] = i as i8;
        i += 1;
    }
    rev
};

/// Map a 5-bit value to its lowercase character. Returns `None` for values above 31.
pub fn encode_char(value: u8) -> Option<char> {
    CHARSET.get(value as usize).map(|&c| c as char)
}

/// Map a character of either case to its 5-bit value. Returns `None` for characters outside the
/// alphabet.
pub fn decode_char(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match CHARSET_REV[c as usize] {
        -1 => None,
        v => Some(v as u8),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_should_map_every_value_both_ways() {
        for value in 0..32u8 {
            let c = encode_char(value).unwrap();
            assert_eq!(decode_char(c), Some(value));
            assert_eq!(decode_char(c.to_ascii_uppercase()), Some(value));
        }
        assert_eq!(encode_char(32), None);
    }

    #[test]
    fn it_should_exclude_confusable_characters() {
        for c in ['1', 'b', 'i', 'o', 'B', 'I', 'O', ' ', '\u{ff}'] {
            assert_eq!(decode_char(c), None, "{c:?} should not decode");
        }
    }
}
