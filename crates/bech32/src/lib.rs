//! # Coins Bech32
//!
//! `coins-bech32` is a standalone implementation of the BIP173 bech32 string
//! encoding. A bech32 string is a human-readable prefix (HRP), the separator
//! `1`, and a data part drawn from a 32 character alphabet whose final 6
//! characters are a BCH checksum over the HRP and the data.
//!
//! The codec is agnostic to what the payload means. It does not know about
//! segwit versions or witness programs.
//!
//! ## Crate Layout
//!
//! ### Bits
//!
//! `convert_bits` regroups a sequence of `from`-bit values into `to`-bit
//! values. Byte payloads are regrouped 8 -> 5 (padded) before encoding and
//! 5 -> 8 (unpadded) after decoding.
//!
//! ### Charset & Checksum
//!
//! The `charset` module maps 5-bit values to characters and back. The
//! `checksum` module implements HRP expansion and the `polymod` checksum.
//!
//! ### Codec
//!
//! `Bech32Codec` holds the maximum string length (90 by default) and exposes
//! `encode` / `decode`, plus `encode_from_base256` / `decode_to_base256` for
//! byte payloads. Free functions of the same names use the default codec.
//!
//! ```
//! use coins_bech32::{decode_to_base256, encode_from_base256};
//!
//! let encoded = encode_from_base256("bc", &[0x00, 0x01, 0x02]).unwrap();
//! assert_eq!(encoded, "bc1qqqsyc6pqmj");
//!
//! let (hrp, payload) = decode_to_base256(&encoded).unwrap();
//! assert_eq!(hrp, "bc");
//! assert_eq!(payload, vec![0x00, 0x01, 0x02]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod bits;
pub mod charset;
pub mod checksum;
pub mod codec;
pub mod error;

pub use bits::convert_bits;
pub use checksum::BECH32_CONST;
pub use codec::{
    decode, decode_to_base256, encode, encode_from_base256, Bech32Codec, CHECKSUM_LENGTH,
    MAX_LENGTH, SEPARATOR,
};
pub use error::{Bech32Error, Bech32Result};
