//! Zigzag and varint helpers.
//!
//! Varints store 7 payload bits per byte, least significant group first, with bit 7 set on every
//! byte except the last. Signed values are zigzag mapped first (0, -1, 1, -2, 2, … become
//! 0, 1, 2, 3, 4, …) so that small magnitudes stay short.
//!
//! ```rust
//! use twkb_core::io::{decode_zigzag, encode_zigzag, varint_len};
//!
//! assert_eq!(encode_zigzag(-2), 3);
//! assert_eq!(decode_zigzag(3), -2);
//! assert_eq!(varint_len(encode_zigzag(63)), 1);
//! assert_eq!(varint_len(encode_zigzag(64)), 2);
//! ```

/// Maximum number of bytes a 64-bit varint may occupy.
pub const MAX_VARINT_LEN: usize = 10;

/// Maps a signed value onto an unsigned one: `(v << 1) ^ (v >> 63)`.
#[must_use]
pub fn encode_zigzag(value: i64) -> u64 {
	((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`encode_zigzag`].
#[must_use]
pub fn decode_zigzag(value: u64) -> i64 {
	if value & 1 == 1 {
		-((value >> 1) as i64) - 1
	} else {
		(value >> 1) as i64
	}
}

/// Zigzag maps `value` into a field of `bits` bits. Used for the 4-bit precision nibble.
///
/// The caller is responsible for `value` fitting into the field.
#[must_use]
pub fn encode_zigzag_bits(value: i64, bits: u32) -> u64 {
	let mask = (1u64 << bits) - 1;
	(((value << 1) ^ (value >> (bits - 1))) as u64) & mask
}

/// Inverse of [`encode_zigzag_bits`]; the decoding does not depend on the field width.
#[must_use]
pub fn decode_zigzag_bits(value: u64) -> i64 {
	decode_zigzag(value)
}

/// Number of bytes [`encode_varint`] produces for `value`.
#[must_use]
pub fn varint_len(value: u64) -> usize {
	let bits = 64 - value.leading_zeros() as usize;
	bits.div_ceil(7).max(1)
}

/// Encodes an unsigned value as varint bytes.
#[must_use]
pub fn encode_varint(mut value: u64) -> Vec<u8> {
	let mut bytes = Vec::with_capacity(varint_len(value));
	while value >= 0x80 {
		bytes.push(((value & 0x7F) as u8) | 0x80);
		value >>= 7;
	}
	bytes.push(value as u8);
	bytes
}

/// Encodes a signed value as zigzag varint bytes.
#[must_use]
pub fn encode_svarint(value: i64) -> Vec<u8> {
	encode_varint(encode_zigzag(value))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, 0)]
	#[case(-1, 1)]
	#[case(1, 2)]
	#[case(-2, 3)]
	#[case(2, 4)]
	#[case(10, 20)]
	#[case(i64::MAX, u64::MAX - 1)]
	#[case(i64::MIN, u64::MAX)]
	fn zigzag(#[case] signed: i64, #[case] unsigned: u64) {
		assert_eq!(encode_zigzag(signed), unsigned);
		assert_eq!(decode_zigzag(unsigned), signed);
	}

	#[test]
	fn zigzag_bijection_on_sample() {
		for value in (-100_000..100_000).chain([i64::MIN, i64::MIN + 1, i64::MAX - 1, i64::MAX]) {
			assert_eq!(decode_zigzag(encode_zigzag(value)), value);
		}
	}

	#[rstest]
	#[case(0, 0)]
	#[case(-1, 1)]
	#[case(1, 2)]
	#[case(3, 6)]
	#[case(-7, 13)]
	#[case(7, 14)]
	fn zigzag_nibble(#[case] value: i64, #[case] nibble: u64) {
		assert_eq!(encode_zigzag_bits(value, 4), nibble);
		assert_eq!(decode_zigzag_bits(nibble), value);
	}

	#[test]
	fn small_magnitudes_use_one_byte() {
		for value in -64..64 {
			assert_eq!(encode_svarint(value).len(), 1, "value {value}");
		}
		assert_eq!(encode_svarint(64).len(), 2);
		assert_eq!(encode_svarint(-65).len(), 2);
	}

	#[rstest]
	#[case(0, &[0x00])]
	#[case(1, &[0x01])]
	#[case(127, &[0x7F])]
	#[case(128, &[0x80, 0x01])]
	#[case(300, &[0xAC, 0x02])]
	#[case(u64::MAX, &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01])]
	fn varint_bytes(#[case] value: u64, #[case] bytes: &[u8]) {
		assert_eq!(encode_varint(value), bytes);
		assert_eq!(varint_len(value), bytes.len());
	}

	#[test]
	fn svarint_bytes() {
		assert_eq!(encode_svarint(10), vec![0x14]);
		assert_eq!(encode_svarint(-75), vec![149, 1]);
	}
}
