use super::{HEADER_SIZE, WavFile};
use crate::error::{WavError, WavResult};

impl WavFile {
	/// Takes ownership of a loaded file and lays the header view over it.
	///
	/// Only the length is checked here; signatures are left to
	/// [`validate`](super::validate) so the caller gets the specific reason.
	pub fn parse(bytes: Vec<u8>) -> WavResult<Self> {
		if bytes.len() < HEADER_SIZE {
			return Err(WavError::format(format!(
				"buffer too short: {} bytes, need at least {}",
				bytes.len(),
				HEADER_SIZE
			)));
		}

		log::debug!("parsed {} byte wav buffer", bytes.len());
		Ok(Self { bytes })
	}
}
