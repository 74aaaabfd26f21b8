pub mod read;
pub mod repair;
pub mod validate;
pub mod write;

pub use repair::{Repair, RepairField, repair_fields};
pub use validate::{validate, validate_container, validate_subformat};

pub const RIFF_HEADER_SIZE: usize = 12;
pub const FMT_CHUNK_SIZE: usize = 24;
pub const DATA_HEADER_SIZE: usize = 8;
pub const HEADER_SIZE: usize = RIFF_HEADER_SIZE + FMT_CHUNK_SIZE + DATA_HEADER_SIZE;

pub const PCM_FORMAT: u16 = 1;
pub const PCM_FMT_SIZE: u32 = 16;

const CHUNK_ID: usize = 0;
const CHUNK_SIZE: usize = 4;
const FORMAT: usize = 8;
const SUBCHUNK1_ID: usize = 12;
const SUBCHUNK1_SIZE: usize = 16;
const AUDIO_FORMAT: usize = 20;
const NUM_CHANNELS: usize = 22;
const SAMPLE_RATE: usize = 24;
const BYTE_RATE: usize = 28;
const BLOCK_ALIGN: usize = 32;
const BITS_PER_SAMPLE: usize = 34;
const SUBCHUNK2_ID: usize = 36;
const SUBCHUNK2_SIZE: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
	pub channels: u16,
	pub sample_rate: u32,
	pub bit_depth: u16,
}

impl WavFormat {
	pub fn new(channels: u16, sample_rate: u32, bit_depth: u16) -> Self {
		Self { channels, sample_rate, bit_depth }
	}

	/// `channels * bits / 8`, truncated to the 16-bit header field.
	pub fn block_align(&self) -> u16 {
		(self.channels as u32 * self.bit_depth as u32 / 8) as u16
	}

	pub fn byte_rate(&self) -> u32 {
		self.sample_rate.wrapping_mul(self.block_align() as u32)
	}
}

/// Data chunk size implied by a file of `buffer_len` bytes.
pub fn expected_data_size(buffer_len: usize) -> u32 {
	(buffer_len as u32).wrapping_sub(HEADER_SIZE as u32)
}

/// RIFF chunk size implied by the two subchunk sizes.
pub fn expected_chunk_size(subchunk1_size: u32, subchunk2_size: u32) -> u32 {
	4u32.wrapping_add(8u32.wrapping_add(subchunk1_size)).wrapping_add(8u32.wrapping_add(subchunk2_size))
}

/// A WAV file held in one owned buffer. Header fields are read and written in
/// place at their fixed offsets; the payload is never copied.
///
/// The only constructor is [`WavFile::parse`], which guarantees the buffer is
/// at least [`HEADER_SIZE`] bytes long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavFile {
	bytes: Vec<u8>,
}

impl WavFile {
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}

	pub fn format(&self) -> WavFormat {
		WavFormat::new(self.num_channels(), self.sample_rate(), self.bits_per_sample())
	}

	pub fn chunk_id(&self) -> [u8; 4] {
		self.tag_at(CHUNK_ID)
	}

	pub fn chunk_size(&self) -> u32 {
		self.u32_at(CHUNK_SIZE)
	}

	pub fn set_chunk_size(&mut self, value: u32) {
		self.put_u32(CHUNK_SIZE, value);
	}

	pub fn riff_format(&self) -> [u8; 4] {
		self.tag_at(FORMAT)
	}

	pub fn subchunk1_id(&self) -> [u8; 4] {
		self.tag_at(SUBCHUNK1_ID)
	}

	pub fn subchunk1_size(&self) -> u32 {
		self.u32_at(SUBCHUNK1_SIZE)
	}

	pub fn set_subchunk1_size(&mut self, value: u32) {
		self.put_u32(SUBCHUNK1_SIZE, value);
	}

	pub fn audio_format(&self) -> u16 {
		self.u16_at(AUDIO_FORMAT)
	}

	pub fn set_audio_format(&mut self, value: u16) {
		self.put_u16(AUDIO_FORMAT, value);
	}

	pub fn num_channels(&self) -> u16 {
		self.u16_at(NUM_CHANNELS)
	}

	pub fn set_num_channels(&mut self, value: u16) {
		self.put_u16(NUM_CHANNELS, value);
	}

	pub fn sample_rate(&self) -> u32 {
		self.u32_at(SAMPLE_RATE)
	}

	pub fn set_sample_rate(&mut self, value: u32) {
		self.put_u32(SAMPLE_RATE, value);
	}

	pub fn byte_rate(&self) -> u32 {
		self.u32_at(BYTE_RATE)
	}

	pub fn set_byte_rate(&mut self, value: u32) {
		self.put_u32(BYTE_RATE, value);
	}

	pub fn block_align(&self) -> u16 {
		self.u16_at(BLOCK_ALIGN)
	}

	pub fn set_block_align(&mut self, value: u16) {
		self.put_u16(BLOCK_ALIGN, value);
	}

	pub fn bits_per_sample(&self) -> u16 {
		self.u16_at(BITS_PER_SAMPLE)
	}

	pub fn set_bits_per_sample(&mut self, value: u16) {
		self.put_u16(BITS_PER_SAMPLE, value);
	}

	pub fn subchunk2_id(&self) -> [u8; 4] {
		self.tag_at(SUBCHUNK2_ID)
	}

	pub fn subchunk2_size(&self) -> u32 {
		self.u32_at(SUBCHUNK2_SIZE)
	}

	pub fn set_subchunk2_size(&mut self, value: u32) {
		self.put_u32(SUBCHUNK2_SIZE, value);
	}

	/// The declared payload, cut short if the buffer ends before
	/// `subchunk2_size` bytes.
	pub fn payload(&self) -> &[u8] {
		let end = self.payload_end();
		&self.bytes[HEADER_SIZE..end]
	}

	pub fn payload_mut(&mut self) -> &mut [u8] {
		let end = self.payload_end();
		&mut self.bytes[HEADER_SIZE..end]
	}

	fn payload_end(&self) -> usize {
		let declared = HEADER_SIZE.saturating_add(self.subchunk2_size() as usize);
		declared.min(self.bytes.len())
	}

	fn tag_at(&self, offset: usize) -> [u8; 4] {
		[self.bytes[offset], self.bytes[offset + 1], self.bytes[offset + 2], self.bytes[offset + 3]]
	}

	fn u16_at(&self, offset: usize) -> u16 {
		u16::from_le_bytes([self.bytes[offset], self.bytes[offset + 1]])
	}

	fn u32_at(&self, offset: usize) -> u32 {
		u32::from_le_bytes(self.tag_at(offset))
	}

	fn put_u16(&mut self, offset: usize, value: u16) {
		self.bytes[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
	}

	fn put_u32(&mut self, offset: usize, value: u32) {
		self.bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
	}
}
