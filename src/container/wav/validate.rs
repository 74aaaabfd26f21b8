use super::{PCM_FMT_SIZE, PCM_FORMAT, WavFile};
use crate::error::{WavError, WavResult};

/// Checks the four chunk tags, stopping at the first mismatch.
pub fn validate_container(wav: &WavFile) -> WavResult<()> {
	let checks: [([u8; 4], &[u8; 4], &str); 4] = [
		(wav.chunk_id(), b"RIFF", "chunk id is not 'RIFF'"),
		(wav.riff_format(), b"WAVE", "riff format is not 'WAVE'"),
		(wav.subchunk1_id(), b"fmt ", "subchunk1 id is not 'fmt '"),
		(wav.subchunk2_id(), b"data", "subchunk2 id is not 'data'"),
	];

	for (found, expected, reason) in checks {
		if &found != expected {
			return Err(WavError::format(reason));
		}
	}

	Ok(())
}

pub fn validate_subformat(wav: &WavFile) -> WavResult<()> {
	if wav.audio_format() != PCM_FORMAT {
		return Err(WavError::subformat(format!("audio format {} is not PCM", wav.audio_format())));
	}

	if wav.subchunk1_size() != PCM_FMT_SIZE {
		return Err(WavError::subformat(format!(
			"subchunk1 size is {}, expected {}",
			wav.subchunk1_size(),
			PCM_FMT_SIZE
		)));
	}

	Ok(())
}

/// Both checks; a file that fails either must not reach repair or a filter.
pub fn validate(wav: &WavFile) -> WavResult<()> {
	validate_container(wav)?;
	validate_subformat(wav)?;
	log::debug!("wav header is valid");
	Ok(())
}
