pub mod decode;
pub mod encode;

pub use decode::PcmDecoder;
pub use encode::PcmEncoder;

use crate::error::{WavError, WavResult};

const UINT8_MIDPOINT: i32 = 128;
const S12_MASK: i32 = 0xFFF0;
const S24_SIGN_BIT: u8 = 0x80;

/// Bit depths the codec can read and write. Every per-depth rule lives on this
/// type so a new depth only touches this file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
	/// Unsigned 8-bit, centered on 128.
	U8,
	/// Signed 12-bit stored left-justified in a 16-bit little-endian word.
	S12,
	S16,
	S24,
	S32,
}

impl BitDepth {
	pub const ALL: [BitDepth; 5] =
		[BitDepth::U8, BitDepth::S12, BitDepth::S16, BitDepth::S24, BitDepth::S32];

	pub fn from_bits(bits: u16) -> WavResult<Self> {
		match bits {
			8 => Ok(BitDepth::U8),
			12 => Ok(BitDepth::S12),
			16 => Ok(BitDepth::S16),
			24 => Ok(BitDepth::S24),
			32 => Ok(BitDepth::S32),
			other => Err(WavError::UnsupportedDepth(other)),
		}
	}

	pub fn bits(&self) -> u16 {
		match self {
			BitDepth::U8 => 8,
			BitDepth::S12 => 12,
			BitDepth::S16 => 16,
			BitDepth::S24 => 24,
			BitDepth::S32 => 32,
		}
	}

	/// Bytes one sample occupies in the payload.
	pub fn byte_width(&self) -> usize {
		match self {
			BitDepth::U8 => 1,
			BitDepth::S12 | BitDepth::S16 => 2,
			BitDepth::S24 => 3,
			BitDepth::S32 => 4,
		}
	}

	/// Range a sample can take once decoded.
	pub fn range(&self) -> (i32, i32) {
		match self {
			BitDepth::U8 => (-128, 127),
			BitDepth::S12 => (-2048, 2047),
			BitDepth::S16 => (i16::MIN as i32, i16::MAX as i32),
			BitDepth::S24 => (-(1 << 23), (1 << 23) - 1),
			BitDepth::S32 => (i32::MIN, i32::MAX),
		}
	}

	/// Decodes the first `byte_width()` bytes of `sample`.
	///
	/// Panics if `sample` is shorter than `byte_width()`.
	pub fn decode(&self, sample: &[u8]) -> i32 {
		match self {
			BitDepth::U8 => sample[0] as i32 - UINT8_MIDPOINT,
			BitDepth::S12 => (i16::from_le_bytes([sample[0], sample[1]]) >> 4) as i32,
			BitDepth::S16 => i16::from_le_bytes([sample[0], sample[1]]) as i32,
			BitDepth::S24 => {
				let ext = if sample[2] & S24_SIGN_BIT != 0 { 0xFF } else { 0x00 };
				i32::from_le_bytes([sample[0], sample[1], sample[2], ext])
			}
			BitDepth::S32 => i32::from_le_bytes([sample[0], sample[1], sample[2], sample[3]]),
		}
	}

	/// Encodes `value` into the first `byte_width()` bytes of `out`.
	///
	/// Only 16-bit clamps. 8-bit wraps and 12/24-bit drop the high bits.
	///
	/// Panics if `out` is shorter than `byte_width()`.
	pub fn encode(&self, value: i32, out: &mut [u8]) {
		match self {
			BitDepth::U8 => out[0] = value.wrapping_add(UINT8_MIDPOINT) as u8,
			BitDepth::S12 => {
				let word = (value.wrapping_shl(4) & S12_MASK) as u16;
				out[..2].copy_from_slice(&word.to_le_bytes());
			}
			BitDepth::S16 => {
				let clamped = value.clamp(i16::MIN as i32, i16::MAX as i32) as i16;
				out[..2].copy_from_slice(&clamped.to_le_bytes());
			}
			BitDepth::S24 => out[..3].copy_from_slice(&value.to_le_bytes()[..3]),
			BitDepth::S32 => out[..4].copy_from_slice(&value.to_le_bytes()),
		}
	}
}

impl std::fmt::Display for BitDepth {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}-bit", self.bits())
	}
}
