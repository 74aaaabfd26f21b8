use super::BitDepth;
use crate::error::{WavError, WavResult};

pub struct PcmEncoder {
	depth: BitDepth,
}

impl PcmEncoder {
	pub fn new(depth: BitDepth) -> Self {
		Self { depth }
	}

	/// Size in bytes of one two-channel frame at this depth.
	pub fn stereo_frame_size(&self) -> usize {
		self.depth.byte_width() * 2
	}

	/// Writes a left/right pair as frame `index` of `out`, where frames are
	/// `frame_size` bytes apart.
	pub fn encode_stereo(
		&self,
		left: i32,
		right: i32,
		out: &mut [u8],
		index: usize,
		frame_size: usize,
	) -> WavResult<()> {
		let width = self.depth.byte_width();
		let frame = index
			.checked_mul(frame_size)
			.and_then(|start| start.checked_add(width * 2).map(|end| start..end))
			.and_then(|range| out.get_mut(range))
			.ok_or_else(|| WavError::format(format!("frame {} is past the end of the buffer", index)))?;

		let (l, r) = frame.split_at_mut(width);
		self.depth.encode(left, l);
		self.depth.encode(right, r);
		Ok(())
	}
}
