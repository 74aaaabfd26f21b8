use super::{Outcome, Transform};
use crate::container::WavFile;
use crate::error::{WavError, WavResult};

/// Plays the file backwards by reversing the order of its frames. Samples
/// inside a frame keep their channel order.
#[derive(Default)]
pub struct Reverse;

impl Reverse {
	pub fn new() -> Self {
		Self
	}

	/// `bits / 8` bytes per channel, so sub-byte and 12-bit depths are not
	/// widened to their storage size.
	fn block_size(wav: &WavFile) -> usize {
		(wav.bits_per_sample() / 8) as usize * wav.num_channels() as usize
	}
}

impl Transform for Reverse {
	fn apply(&mut self, wav: &mut WavFile) -> WavResult<Outcome> {
		let block = Self::block_size(wav);
		if block == 0 {
			return Err(WavError::DegenerateInput("block size is 0".to_string()));
		}

		let data = wav.payload_mut();
		let blocks = data.len() / block;

		for i in 0..blocks / 2 {
			let (head, tail) = data.split_at_mut((blocks - 1 - i) * block);
			head[i * block..(i + 1) * block].swap_with_slice(&mut tail[..block]);
		}

		log::info!("reversed {} blocks of sound", blocks);
		Ok(Outcome::Modified)
	}

	fn name(&self) -> &'static str {
		"reverse"
	}
}
