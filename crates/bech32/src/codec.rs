//! Bech32 string encoding and decoding.

use crate::{
    bits::convert_bits,
    charset::{decode_char, encode_char},
    checksum::{create_checksum, verify_checksum},
    error::{Bech32Error, Bech32Result},
};

/// The maximum length of a bech32 string under BIP173.
pub const MAX_LENGTH: usize = 90;

/// The number of checksum characters at the end of every bech32 string.
pub const CHECKSUM_LENGTH: usize = 6;

/// The character between the HRP and the data part. Decoding splits at its last occurrence.
pub const SEPARATOR: char = '1';

/// A one-character HRP, the separator, and a bare checksum.
const MIN_LENGTH: usize = 1 + 1 + CHECKSUM_LENGTH;

/// Encodes and decodes bech32 strings up to a configurable maximum length.
///
/// `Bech32Codec::default()` enforces the BIP173 limit of 90 characters. Some protocols carry
/// longer payloads in bech32 strings, and can raise the limit with `with_max_length`. The checksum
/// guarantees of BIP173 only hold up to the standard limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bech32Codec {
    max_length: usize,
}

impl Default for Bech32Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl Bech32Codec {
    /// Instantiate a codec with the BIP173 length limit.
    pub const fn new() -> Self {
        Self::with_max_length(MAX_LENGTH)
    }

    /// Instantiate a codec that accepts strings of up to `max_length` characters.
    pub const fn with_max_length(max_length: usize) -> Self {
        Self { max_length }
    }

    /// The longest string this codec will produce or accept.
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// Encode 5-bit `data` under `hrp`. The checksum is computed over the lowercased HRP. The
    /// output is lowercase, unless the HRP is uppercase, in which case the whole string is
    /// uppercase.
    ///
    /// ```
    /// use coins_bech32::Bech32Codec;
    ///
    /// let codec = Bech32Codec::default();
    /// assert_eq!(codec.encode("a", &[]).unwrap(), "a12uel5l");
    /// assert_eq!(codec.encode("A", &[]).unwrap(), "A12UEL5L");
    /// ```
    pub fn encode(&self, hrp: &str, data: &[u8]) -> Bech32Result<String> {
        check_hrp(hrp)?;
        let uppercase = match case_of(hrp) {
            Case::Mixed => return Err(Bech32Error::MixedCase),
            Case::Upper => true,
            Case::Lower | Case::Uncased => false,
        };

        let length = hrp.len() + 1 + data.len() + CHECKSUM_LENGTH;
        if length > self.max_length {
            tracing::debug!(length, limit = self.max_length, "bech32 string too long");
            return Err(Bech32Error::TooLong {
                length,
                limit: self.max_length,
            });
        }

        let checksum = create_checksum(&hrp.to_ascii_lowercase(), data);

        let mut encoded = String::with_capacity(length);
        encoded.push_str(hrp);
        encoded.push(SEPARATOR);
        for &value in data.iter().chain(checksum.iter()) {
            let c = encode_char(value).ok_or(Bech32Error::InvalidDataValue(value))?;
            encoded.push(if uppercase { c.to_ascii_uppercase() } else { c });
        }
        Ok(encoded)
    }

    /// Decode a bech32 string into its HRP and 5-bit data, with the checksum removed. The HRP is
    /// returned as it appears in `s`.
    ///
    /// ```
    /// use coins_bech32::Bech32Codec;
    ///
    /// let (hrp, data) = Bech32Codec::default().decode("BC1QQQSYC6PQMJ").unwrap();
    /// assert_eq!(hrp, "BC");
    /// assert_eq!(data, vec![0, 0, 0, 16, 4]);
    /// ```
    pub fn decode(&self, s: &str) -> Bech32Result<(String, Vec<u8>)> {
        if s.len() < MIN_LENGTH || s.len() > self.max_length {
            tracing::debug!(
                length = s.len(),
                limit = self.max_length,
                "bech32 string length out of range"
            );
            return Err(Bech32Error::InvalidLength(s.len()));
        }
        if case_of(s) == Case::Mixed {
            return Err(Bech32Error::MixedCase);
        }

        let sep = s.rfind(SEPARATOR).ok_or(Bech32Error::MissingSeparator)?;
        let (hrp, data_part) = (&s[..sep], &s[sep + 1..]);
        check_hrp(hrp)?;
        if data_part.len() < CHECKSUM_LENGTH {
            return Err(Bech32Error::InvalidLength(s.len()));
        }

        let mut data = data_part
            .char_indices()
            .map(|(i, c)| {
                decode_char(c).ok_or(Bech32Error::InvalidCharacter {
                    character: c,
                    position: sep + 1 + i,
                })
            })
            .collect::<Bech32Result<Vec<u8>>>()?;

        if !verify_checksum(&hrp.to_ascii_lowercase(), &data) {
            tracing::debug!(hrp, "bech32 checksum mismatch");
            return Err(Bech32Error::InvalidChecksum);
        }

        data.truncate(data.len() - CHECKSUM_LENGTH);
        Ok((hrp.to_owned(), data))
    }

    /// Regroup `bytes` into padded 5-bit groups and encode them under `hrp`.
    pub fn encode_from_base256(&self, hrp: &str, bytes: &[u8]) -> Bech32Result<String> {
        let data = convert_bits(bytes, 8, 5, true)?;
        self.encode(hrp, &data)
    }

    /// Decode `s` and regroup its data back into bytes. Fails with `NonZeroPadding` if the data
    /// was not produced from whole bytes.
    pub fn decode_to_base256(&self, s: &str) -> Bech32Result<(String, Vec<u8>)> {
        let (hrp, data) = self.decode(s)?;
        let bytes = convert_bits(&data, 5, 8, false)?;
        Ok((hrp, bytes))
    }
}

/// Encode 5-bit `data` under `hrp` with the BIP173 length limit.
pub fn encode(hrp: &str, data: &[u8]) -> Bech32Result<String> {
    Bech32Codec::default().encode(hrp, data)
}

/// Decode a bech32 string of at most 90 characters into its HRP and 5-bit data.
pub fn decode(s: &str) -> Bech32Result<(String, Vec<u8>)> {
    Bech32Codec::default().decode(s)
}

/// Encode a byte payload under `hrp` with the BIP173 length limit.
pub fn encode_from_base256(hrp: &str, bytes: &[u8]) -> Bech32Result<String> {
    Bech32Codec::default().encode_from_base256(hrp, bytes)
}

/// Decode a bech32 string of at most 90 characters into its HRP and byte payload.
pub fn decode_to_base256(s: &str) -> Bech32Result<(String, Vec<u8>)> {
    Bech32Codec::default().decode_to_base256(s)
}

fn check_hrp(hrp: &str) -> Bech32Result<()> {
    if hrp.is_empty() || hrp.bytes().any(|b| !(33..=126).contains(&b)) {
        tracing::trace!(hrp, "rejecting human-readable part");
        return Err(Bech32Error::InvalidHrp(hrp.to_owned()));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Case {
    Uncased,
    Lower,
    Upper,
    Mixed,
}

fn case_of(s: &str) -> Case {
    let lower = s.bytes().any(|b| b.is_ascii_lowercase());
    let upper = s.bytes().any(|b| b.is_ascii_uppercase());
    match (lower, upper) {
        (false, false) => Case::Uncased,
        (true, false) => Case::Lower,
        (false, true) => Case::Upper,
        (true, true) => Case::Mixed,
    }
}
