//! Errors returned by the bech32 codec and bit converter.

use thiserror::Error;

/// Errors that can be returned while regrouping bits or encoding and decoding bech32 strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Bech32Error {
    /// Bit group sizes must be between 1 and 8 inclusive.
    #[error("invalid bit groups: cannot convert from {from} to {to} bits")]
    InvalidBitGroups {
        /// The requested input width
        from: u8,
        /// The requested output width
        to: u8,
    },

    /// An input element has significant bits above the declared input width.
    #[error("value {value:#04x} does not fit in {bits} bits")]
    InvalidInputWidth {
        /// The offending element
        value: u8,
        /// The declared input width
        bits: u8,
    },

    /// An unpadded conversion left over a full input group, or non-zero trailing bits.
    #[error("invalid padding: non-zero or excess trailing bits")]
    NonZeroPadding,

    /// The human-readable part is empty or contains a byte outside the printable range 33-126.
    #[error("invalid human-readable part {0:?}")]
    InvalidHrp(String),

    /// A data value passed to `encode` does not fit in 5 bits.
    #[error("data value {0} is not a 5-bit group")]
    InvalidDataValue(u8),

    /// The encoded string would exceed the codec's length limit.
    #[error("encoded string is too long: {length} characters (limit {limit})")]
    TooLong {
        /// The length of the string that would have been produced
        length: usize,
        /// The codec's configured limit
        limit: usize,
    },

    /// The string to decode is too short, too long, or has a data part shorter than the checksum.
    #[error("invalid length {0}")]
    InvalidLength(usize),

    /// The input mixes lowercase and uppercase characters.
    #[error("string mixes upper and lower case")]
    MixedCase,

    /// The string to decode contains no `1` separator.
    #[error("missing separator '1'")]
    MissingSeparator,

    /// A data part character is not in the bech32 alphabet.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character
        character: char,
        /// Its byte offset in the full input string
        position: usize,
    },

    /// The checksum does not verify.
    #[error("invalid checksum")]
    InvalidChecksum,
}

/// Type alias for bech32 results
pub type Bech32Result<T> = Result<T, Bech32Error>;
