use super::{WavFile, expected_chunk_size, expected_data_size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairField {
	BlockAlign,
	ByteRate,
	Subchunk2Size,
	ChunkSize,
}

impl RepairField {
	pub fn name(&self) -> &'static str {
		match self {
			RepairField::BlockAlign => "blockAlign",
			RepairField::ByteRate => "byteRate",
			RepairField::Subchunk2Size => "subchunk2Size",
			RepairField::ChunkSize => "chunkSize",
		}
	}
}

/// A zero field that was filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repair {
	pub field: RepairField,
	pub old: u32,
	pub new: u32,
}

/// Recomputes the derivable header fields from the channel layout and the
/// loaded buffer length.
///
/// A mismatching field is reported, but only overwritten when it is zero:
/// nonzero values are trusted. Must run after validation and before any
/// filter. Running it twice changes nothing the first run did not.
pub fn repair_fields(wav: &mut WavFile, buffer_len: usize) -> Vec<Repair> {
	let format = wav.format();
	let mut repairs = Vec::new();

	let block_align = format.block_align();
	if let Some(repair) =
		check(RepairField::BlockAlign, wav.block_align() as u32, block_align as u32)
	{
		wav.set_block_align(block_align);
		repairs.push(repair);
	}

	let byte_rate = format.byte_rate();
	if let Some(repair) = check(RepairField::ByteRate, wav.byte_rate(), byte_rate) {
		wav.set_byte_rate(byte_rate);
		repairs.push(repair);
	}

	let subchunk2_size = expected_data_size(buffer_len);
	if let Some(repair) = check(RepairField::Subchunk2Size, wav.subchunk2_size(), subchunk2_size) {
		wav.set_subchunk2_size(subchunk2_size);
		repairs.push(repair);
	}

	// computed from the expected data size, not the stored one
	let chunk_size = expected_chunk_size(wav.subchunk1_size(), subchunk2_size);
	if let Some(repair) = check(RepairField::ChunkSize, wav.chunk_size(), chunk_size) {
		wav.set_chunk_size(chunk_size);
		repairs.push(repair);
	}

	repairs
}

fn check(field: RepairField, stored: u32, expected: u32) -> Option<Repair> {
	if stored == expected {
		return None;
	}

	log::warn!("{} is {} but expected {}", field.name(), stored, expected);
	if stored != 0 {
		return None;
	}

	log::info!("fixing {}", field.name());
	Some(Repair { field, old: stored, new: expected })
}
