use super::BitDepth;
use crate::error::{WavError, WavResult};

pub struct PcmDecoder {
	depth: BitDepth,
}

impl PcmDecoder {
	pub fn new(depth: BitDepth) -> Self {
		Self { depth }
	}

	/// Reads the sample starting at byte `offset` of `data`.
	pub fn decode(&self, data: &[u8], offset: usize) -> WavResult<i32> {
		let width = self.depth.byte_width();
		let sample = offset
			.checked_add(width)
			.and_then(|end| data.get(offset..end))
			.ok_or_else(|| WavError::format(format!("truncated sample at byte {}", offset)))?;
		Ok(self.depth.decode(sample))
	}

	/// Averages every channel of the frame starting at `offset` into one value.
	pub fn decode_mono(&self, data: &[u8], offset: usize, channels: usize) -> WavResult<f64> {
		let width = self.depth.byte_width();
		let mut sum = 0.0;
		for ch in 0..channels {
			sum += self.decode(data, offset + ch * width)? as f64;
		}
		Ok(sum / channels as f64)
	}
}
