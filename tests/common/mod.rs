#![allow(dead_code)]

pub const HEADER_SIZE: usize = 44;

pub const OFFSET_CHUNK_SIZE: usize = 4;
pub const OFFSET_FORMAT: usize = 8;
pub const OFFSET_SUBCHUNK1_ID: usize = 12;
pub const OFFSET_SUBCHUNK1_SIZE: usize = 16;
pub const OFFSET_AUDIO_FORMAT: usize = 20;
pub const OFFSET_BYTE_RATE: usize = 28;
pub const OFFSET_BLOCK_ALIGN: usize = 32;
pub const OFFSET_SUBCHUNK2_ID: usize = 36;
pub const OFFSET_SUBCHUNK2_SIZE: usize = 40;

/// Builds a canonical 44-byte PCM header followed by `payload`.
pub fn create_wav(channels: u16, sample_rate: u32, bit_depth: u16, payload: &[u8]) -> Vec<u8> {
	let block_align = (channels as u32 * bit_depth as u32 / 8) as u16;
	let byte_rate = sample_rate.wrapping_mul(block_align as u32);
	let data_size = payload.len() as u32;

	let mut bytes = Vec::with_capacity(HEADER_SIZE + payload.len());
	bytes.extend_from_slice(b"RIFF");
	bytes.extend_from_slice(&(36 + data_size).to_le_bytes());
	bytes.extend_from_slice(b"WAVE");
	bytes.extend_from_slice(b"fmt ");
	bytes.extend_from_slice(&16u32.to_le_bytes());
	bytes.extend_from_slice(&1u16.to_le_bytes());
	bytes.extend_from_slice(&channels.to_le_bytes());
	bytes.extend_from_slice(&sample_rate.to_le_bytes());
	bytes.extend_from_slice(&byte_rate.to_le_bytes());
	bytes.extend_from_slice(&block_align.to_le_bytes());
	bytes.extend_from_slice(&bit_depth.to_le_bytes());
	bytes.extend_from_slice(b"data");
	bytes.extend_from_slice(&data_size.to_le_bytes());
	bytes.extend_from_slice(payload);
	bytes
}

pub fn pcm16(samples: &[i16]) -> Vec<u8> {
	samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

pub fn create_sine_pcm16(frames: usize, channels: u16, sample_rate: u32) -> Vec<u8> {
	let mut samples = Vec::with_capacity(frames * channels as usize);
	for i in 0..frames {
		let t = i as f32 / sample_rate as f32;
		let sample = ((2.0 * std::f32::consts::PI * 440.0 * t).sin() * 16000.0) as i16;
		for _ in 0..channels {
			samples.push(sample);
		}
	}
	pcm16(&samples)
}

pub fn read_u16(bytes: &[u8], offset: usize) -> u16 {
	u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

pub fn read_u32(bytes: &[u8], offset: usize) -> u32 {
	u32::from_le_bytes([bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]])
}

pub fn write_u16(bytes: &mut [u8], offset: usize, value: u16) {
	bytes[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

pub fn write_u32(bytes: &mut [u8], offset: usize, value: u32) {
	bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

pub fn read_pcm16(payload: &[u8]) -> Vec<i16> {
	payload.chunks_exact(2).map(|c| i16::from_le_bytes([c[0], c[1]])).collect()
}
