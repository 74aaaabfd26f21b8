use super::{Outcome, Transform};
use crate::container::WavFile;
use crate::error::WavResult;

/// Header fields worth showing to a user.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderInfo {
	pub channels: u16,
	pub sample_rate: u32,
	pub byte_rate: u32,
	pub bits_per_sample: u16,
	pub block_align: u16,
	pub data_size: u32,
	pub duration: f64,
}

impl HeaderInfo {
	pub fn from_wav(wav: &WavFile) -> Self {
		let byte_rate = wav.byte_rate();
		let data_size = wav.subchunk2_size();
		let duration = if byte_rate == 0 { 0.0 } else { data_size as f64 / byte_rate as f64 };

		Self {
			channels: wav.num_channels(),
			sample_rate: wav.sample_rate(),
			byte_rate,
			bits_per_sample: wav.bits_per_sample(),
			block_align: wav.block_align(),
			data_size,
			duration,
		}
	}
}

#[derive(Default)]
pub struct Inspect;

impl Inspect {
	pub fn new() -> Self {
		Self
	}
}

impl Transform for Inspect {
	fn apply(&mut self, wav: &mut WavFile) -> WavResult<Outcome> {
		let info = HeaderInfo::from_wav(wav);
		log::info!(
			"channels={} sample_rate={} byte_rate={} bits_per_sample={}",
			info.channels,
			info.sample_rate,
			info.byte_rate,
			info.bits_per_sample
		);
		Ok(Outcome::Inspected(info))
	}

	fn name(&self) -> &'static str {
		"inspect"
	}
}
