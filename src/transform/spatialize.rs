use super::{Outcome, Transform};
use crate::codecs::{BitDepth, PcmDecoder, PcmEncoder};
use crate::container::WavFile;
use crate::container::wav::expected_chunk_size;
use crate::error::{WavError, WavResult};
use std::f64::consts::PI;

const STEREO: u16 = 2;

/// "8D audio": down-mixes every frame to mono and pans it around the
/// listener at `rps` rotations per second, producing a stereo file at the
/// original bit depth.
pub struct Spatialize {
	rps: f64,
}

impl Spatialize {
	pub fn new(rps: f64) -> Self {
		Self { rps }
	}

	/// Left and right gains for frame `index`: `1 - sin` and `1 + cos` of the
	/// rotation angle at that point in time.
	pub fn pan(&self, index: usize, sample_rate: u32) -> (f64, f64) {
		let t = index as f64 / sample_rate as f64;
		let angle = 2.0 * PI * self.rps * t;
		(1.0 - angle.sin(), 1.0 + angle.cos())
	}

	fn render(&self, wav: &WavFile, depth: BitDepth) -> WavResult<(Vec<u8>, usize)> {
		let channels = wav.num_channels() as usize;
		if channels == 0 {
			return Err(WavError::DegenerateInput("file has no channels".to_string()));
		}

		let decoder = PcmDecoder::new(depth);
		let encoder = PcmEncoder::new(depth);
		let frame_size = channels * depth.byte_width();
		let stereo_frame_size = encoder.stereo_frame_size();
		let sample_rate = wav.sample_rate();

		let data = wav.payload();
		let frames = data.len() / frame_size;
		let size = frames * stereo_frame_size;

		let mut out = Vec::new();
		out.try_reserve_exact(size).map_err(|_| WavError::Allocation(size))?;
		out.resize(size, 0);

		for i in 0..frames {
			let mono = decoder.decode_mono(data, i * frame_size, channels)?;
			let (left_gain, right_gain) = self.pan(i, sample_rate);
			// `as` truncates toward zero and saturates at the i32 bounds
			let left = (mono * left_gain) as i32;
			let right = (mono * right_gain) as i32;
			encoder.encode_stereo(left, right, &mut out, i, stereo_frame_size)?;
		}

		Ok((out, frames))
	}
}

impl Transform for Spatialize {
	fn apply(&mut self, wav: &mut WavFile) -> WavResult<Outcome> {
		let depth = BitDepth::from_bits(wav.bits_per_sample())?;
		let (stereo, frames) = self.render(wav, depth)?;

		wav.replace_payload(stereo);
		wav.set_num_channels(STEREO);

		let format = wav.format();
		wav.set_block_align(format.block_align());
		wav.set_byte_rate(format.byte_rate());
		wav.set_chunk_size(expected_chunk_size(wav.subchunk1_size(), wav.subchunk2_size()));

		log::debug!("spatialized {} frames at {}", frames, depth);
		log::info!("created 8D audio at {:.2} rotations/sec", self.rps);
		Ok(Outcome::Modified)
	}

	fn name(&self) -> &'static str {
		"spatialize"
	}
}
