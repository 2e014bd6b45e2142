//! The bech32 BCH checksum.
//!
//! The HRP and data are read as coefficients of a polynomial over GF(32), and the checksum is
//! the remainder modulo the BIP173 generator. `polymod` works on 5-bit groups and packs the
//! running remainder into the low 30 bits of a `u32`.

use crate::codec::CHECKSUM_LENGTH;

/// The value `polymod` must reduce a valid string to.
pub const BECH32_CONST: u32 = 1;

const GENERATORS: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// Expand an HRP for checksum computation: the high 3 bits of every byte, a zero, then the low 5
/// bits of every byte. Callers pass the lowercased HRP.
pub fn hrp_expand(hrp: &str) -> Vec<u8> {
    let bytes = hrp.as_bytes();
    let mut v = Vec::with_capacity(bytes.len() * 2 + 1);
    v.extend(bytes.iter().map(|b| b >> 5));
    v.push(0);
    v.extend(bytes.iter().map(|b| b & 0x1f));
    v
}

/// Compute the BCH remainder of a sequence of 5-bit groups.
pub fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for &v in values {
        let b = chk >> 25;
        chk = ((chk & 0x1ffffff) << 5) ^ u32::from(v);
        for (i, g) in GENERATORS.iter().enumerate() {
            if (b >> i) & 1 == 1 {
                chk ^= g;
            }
        }
    }
    chk
}

/// Compute the 6 checksum groups for `data` under a lowercase `hrp`.
pub fn create_checksum(hrp: &str, data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0; CHECKSUM_LENGTH]);
    let residue = polymod(&values) ^ BECH32_CONST;

    let mut checksum = [0u8; CHECKSUM_LENGTH];
    for (i, group) in checksum.iter_mut().enumerate() {
        *group = ((residue >> (5 * (CHECKSUM_LENGTH - 1 - i))) & 0x1f) as u8;
    }
    checksum
}

/// Check that `data`, which ends in its 6 checksum groups, verifies under a lowercase `hrp`.
pub fn verify_checksum(hrp: &str, data: &[u8]) -> bool {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    polymod(&values) == BECH32_CONST
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_should_expand_hrps() {
        assert_eq!(hrp_expand("bc"), vec![3, 3, 0, 2, 3]);
        assert_eq!(hrp_expand("?"), vec![1, 0, 31]);
    }

    #[test]
    fn it_should_create_checksums_that_verify() {
        let data = vec![0, 0, 0, 16, 4];
        let checksum = create_checksum("bc", &data);
        // "c6pqmj"
        assert_eq!(checksum, [24, 26, 1, 0, 27, 18]);

        let mut full = data.clone();
        full.extend_from_slice(&checksum);
        assert!(verify_checksum("bc", &full));
        assert!(!verify_checksum("tb", &full));
    }

    #[test]
    fn it_should_detect_any_single_group_change() {
        let mut full = vec![1, 2, 3, 4, 5];
        full.extend_from_slice(&create_checksum("test", &full));
        for i in 0..full.len() {
            for delta in 1..32u8 {
                let mut corrupted = full.clone();
                corrupted[i] ^= delta;
                assert!(!verify_checksum("test", &corrupted), "index {i} delta {delta}");
            }
        }
    }

    #[test]
    fn it_should_checksum_empty_data() {
        // "a12uel5l"
        assert_eq!(create_checksum("a", &[]), [10, 28, 25, 31, 20, 31]);
    }
}
