//! Tagged variable-length integer encoding for canonical signing payloads.
//!
//! Provides the `Varint` append-only buffer and the `encode_varint` helper.
//! Integers of up to 512 bits are written as a single byte when small, or as
//! a width tag followed by a little-endian body zero-padded to the tag width:
//!
//! | first byte  | body                    |
//! |-------------|-------------------------|
//! | 0-249       | none, the value itself  |
//! | 250 (0xfa)  | 2 bytes (16 bits)       |
//! | 251 (0xfb)  | 4 bytes (32 bits)       |
//! | 252 (0xfc)  | 8 bytes (64 bits)       |
//! | 253 (0xfd)  | 16 bytes (128 bits)     |
//! | 254 (0xfe)  | 32 bytes (256 bits)     |
//! | 255 (0xff)  | 64 bytes (512 bits)     |
//!
//! Byte strings are appended verbatim. An empty byte string is written as a
//! single `0x00`, which is the same encoding as integer zero; remote
//! verifiers rely on that layout, so the two cases are not disambiguated.

use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

use crate::PrimitivesError;

/// Largest integer written as a single byte without a tag.
pub const MAX_SINGLE_BYTE: u8 = 249;

/// Largest bit length the codec can represent.
pub const MAX_VARINT_BITS: u64 = 512;

/// Width table ordered by increasing width: `(bits, tag)`.
const WIDTH_TAGS: [(u64, u8); 6] = [
    (16, 0xfa),
    (32, 0xfb),
    (64, 0xfc),
    (128, 0xfd),
    (256, 0xfe),
    (512, 0xff),
];

/// Find the narrowest `(bits, tag)` entry able to hold a value of `bits` bits.
fn width_for(bits: u64) -> Option<(u64, u8)> {
    WIDTH_TAGS.iter().copied().find(|(width, _)| *width >= bits)
}

/// Append the varint encoding of `number` to `out`.
///
/// Nothing is written when an error is returned.
fn write_varint(number: &BigInt, out: &mut Vec<u8>) -> Result<(), PrimitivesError> {
    if number.sign() == Sign::Minus {
        return Err(PrimitivesError::InvalidInput(
            "negative number not encodable".to_string(),
        ));
    }
    let magnitude = number.magnitude();

    // Covers zero as well: 0 is written as the single byte 0x00.
    if let Some(small) = magnitude.to_u8().filter(|v| *v <= MAX_SINGLE_BYTE) {
        out.push(small);
        return Ok(());
    }

    let bits = magnitude.bits();
    let (width, tag) = width_for(bits).ok_or(PrimitivesError::ValueTooLarge { bits })?;
    debug_assert!(width <= MAX_VARINT_BITS);

    let mut body = magnitude.to_bytes_le();
    body.resize((width / 8) as usize, 0);

    out.push(tag);
    out.extend_from_slice(&body);
    Ok(())
}

/// Encode a single integer into a new byte vector.
///
/// # Arguments
/// * `number` - A non-negative integer of at most 512 bits.
///
/// # Returns
/// The encoded bytes, `InvalidInput` for negative numbers, or
/// `ValueTooLarge` when more than 512 bits are required.
pub fn encode_varint(number: &BigInt) -> Result<Vec<u8>, PrimitivesError> {
    let mut out = Vec::with_capacity(1);
    write_varint(number, &mut out)?;
    Ok(out)
}

/// An append-only buffer building a canonical payload out of varints and
/// raw byte strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Varint {
    buf: Vec<u8>,
}

impl Varint {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Varint { buf: Vec::new() }
    }

    /// Create a new buffer with a pre-allocated capacity.
    ///
    /// # Arguments
    /// * `capacity` - Initial byte capacity of the internal buffer.
    pub fn with_capacity(capacity: usize) -> Self {
        Varint {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Append the varint encoding of an arbitrary-precision integer.
    ///
    /// # Arguments
    /// * `number` - A non-negative integer of at most 512 bits.
    ///
    /// # Returns
    /// `Ok(())` on success. On error the buffer is left unchanged.
    pub fn append(&mut self, number: &BigInt) -> Result<(), PrimitivesError> {
        write_varint(number, &mut self.buf)
    }

    /// Append the varint encoding of a signed 64-bit integer.
    ///
    /// Negative values fail with `InvalidInput`.
    pub fn append_i64(&mut self, number: i64) -> Result<(), PrimitivesError> {
        self.append(&BigInt::from(number))
    }

    /// Append the varint encoding of an unsigned 64-bit integer.
    pub fn append_u64(&mut self, number: u64) -> Result<(), PrimitivesError> {
        self.append(&BigInt::from(number))
    }

    /// Append a raw byte string.
    ///
    /// Non-empty input is written verbatim with no tag and no length prefix;
    /// callers emit the length varint first when one is required. Empty input
    /// is written as a single `0x00` byte.
    ///
    /// # Arguments
    /// * `bytes` - The bytes to append.
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            self.buf.push(0);
        } else {
            self.buf.extend_from_slice(bytes);
        }
    }

    /// Hex-decode `hex_str` and append it as a byte string.
    ///
    /// # Returns
    /// `Ok(())` on success, or `InvalidHex` if the string is not valid hex.
    pub fn append_hex(&mut self, hex_str: &str) -> Result<(), PrimitivesError> {
        let bytes = hex::decode(hex_str)?;
        self.append_bytes(&bytes);
        Ok(())
    }

    /// Return a reference to the current buffer contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the buffer and return the finished payload.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Return the number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}
