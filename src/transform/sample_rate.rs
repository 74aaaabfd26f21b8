use super::{Outcome, Transform};
use crate::container::WavFile;
use crate::error::WavResult;

/// Rewrites the declared sample rate and the fields derived from it.
///
/// The payload is not resampled, so playback pitch and duration change with
/// the new rate.
pub struct SampleRate {
	rate: u32,
}

impl SampleRate {
	pub fn new(rate: u32) -> Self {
		Self { rate }
	}
}

impl Transform for SampleRate {
	fn apply(&mut self, wav: &mut WavFile) -> WavResult<Outcome> {
		wav.set_sample_rate(self.rate);

		let format = wav.format();
		wav.set_block_align(format.block_align());
		wav.set_byte_rate(format.byte_rate());

		log::info!("sample rate changed to {}", self.rate);
		Ok(Outcome::Modified)
	}

	fn name(&self) -> &'static str {
		"sample_rate"
	}
}
