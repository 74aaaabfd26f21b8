use super::{HEADER_SIZE, WavFile};

impl WavFile {
	pub fn into_bytes(self) -> Vec<u8> {
		self.bytes
	}

	/// Swaps in a new payload behind the current header and updates
	/// `subchunk2_size` to match. Bytes past the old declared payload are
	/// dropped. Every other header field is left for the caller.
	pub fn replace_payload(&mut self, payload: Vec<u8>) {
		let mut bytes = Vec::with_capacity(HEADER_SIZE + payload.len());
		bytes.extend_from_slice(&self.bytes[..HEADER_SIZE]);
		bytes.extend_from_slice(&payload);
		self.bytes = bytes;
		self.set_subchunk2_size(payload.len() as u32);
	}
}
