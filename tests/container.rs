mod common;

use common::*;
use wavproc::WavError;
use wavproc::container::WavFile;
use wavproc::container::wav::{
	RepairField, repair_fields, validate, validate_container, validate_subformat,
};

#[test]
fn test_canonical_header_layout() {
	let wav = create_wav(2, 44100, 16, &[0u8; 400]);
	validate(&WavFile::parse(wav.clone()).unwrap()).unwrap();

	assert_eq!(wav.len(), HEADER_SIZE + 400);
	assert_eq!(&wav[0..4], b"RIFF");
	assert_eq!(read_u32(&wav, OFFSET_CHUNK_SIZE), 36 + 400);
	assert_eq!(&wav[8..12], b"WAVE");
	assert_eq!(&wav[12..16], b"fmt ");
	assert_eq!(read_u32(&wav, OFFSET_SUBCHUNK1_SIZE), 16);
	assert_eq!(read_u16(&wav, OFFSET_AUDIO_FORMAT), 1);
	assert_eq!(read_u32(&wav, OFFSET_BYTE_RATE), 44100 * 4);
	assert_eq!(read_u16(&wav, OFFSET_BLOCK_ALIGN), 4);
	assert_eq!(&wav[36..40], b"data");
	assert_eq!(read_u32(&wav, OFFSET_SUBCHUNK2_SIZE), 400);
}

#[test]
fn test_parse_exposes_fields_without_copy() {
	let bytes = create_wav(1, 8000, 8, &[1, 2, 3, 4]);
	let wav = WavFile::parse(bytes.clone()).unwrap();

	assert_eq!(wav.num_channels(), 1);
	assert_eq!(wav.sample_rate(), 8000);
	assert_eq!(wav.bits_per_sample(), 8);
	assert_eq!(wav.block_align(), 1);
	assert_eq!(wav.byte_rate(), 8000);
	assert_eq!(wav.payload(), &[1, 2, 3, 4]);
	assert_eq!(wav.into_bytes(), bytes);
}

#[test]
fn test_parse_rejects_short_buffer() {
	let bytes = create_wav(1, 8000, 16, &[]);
	let err = WavFile::parse(bytes[..43].to_vec()).unwrap_err();
	assert!(matches!(err, WavError::Format(_)));

	assert!(WavFile::parse(bytes).is_ok());
}

#[test]
fn test_setters_write_little_endian_in_place() {
	let mut wav = WavFile::parse(create_wav(1, 8000, 16, &[0u8; 8])).unwrap();
	wav.set_sample_rate(0x0102_0304);
	wav.set_block_align(0xABCD);

	let bytes = wav.as_bytes();
	assert_eq!(&bytes[24..28], &[0x04, 0x03, 0x02, 0x01]);
	assert_eq!(&bytes[32..34], &[0xCD, 0xAB]);
}

#[test]
fn test_payload_is_clamped_to_buffer() {
	let mut bytes = create_wav(1, 8000, 16, &[0u8; 8]);
	write_u32(&mut bytes, OFFSET_SUBCHUNK2_SIZE, 1000);
	let wav = WavFile::parse(bytes).unwrap();
	assert_eq!(wav.payload().len(), 8);
}

#[test]
fn test_payload_excludes_trailing_bytes() {
	let mut bytes = create_wav(1, 8000, 16, &[0u8; 8]);
	write_u32(&mut bytes, OFFSET_SUBCHUNK2_SIZE, 4);
	let wav = WavFile::parse(bytes).unwrap();
	assert_eq!(wav.payload().len(), 4);
	assert_eq!(wav.len(), HEADER_SIZE + 8);
}

#[test]
fn test_replace_payload_resizes_buffer() {
	let mut wav = WavFile::parse(create_wav(1, 8000, 16, &[0u8; 8])).unwrap();
	wav.replace_payload(vec![7u8; 32]);

	assert_eq!(wav.len(), HEADER_SIZE + 32);
	assert_eq!(wav.subchunk2_size(), 32);
	assert_eq!(wav.payload(), &[7u8; 32][..]);
	assert_eq!(wav.sample_rate(), 8000);
}

#[test]
fn test_validate_accepts_canonical_pcm() {
	let wav = WavFile::parse(create_wav(2, 44100, 16, &[0u8; 16])).unwrap();
	assert!(validate(&wav).is_ok());
}

#[test]
fn test_validate_container_reports_each_signature() {
	let cases: [(usize, &str); 4] = [
		(0, "RIFF"),
		(OFFSET_FORMAT, "WAVE"),
		(OFFSET_SUBCHUNK1_ID, "fmt "),
		(OFFSET_SUBCHUNK2_ID, "data"),
	];

	for (offset, tag) in cases {
		let mut bytes = create_wav(1, 8000, 16, &[0u8; 4]);
		bytes[offset..offset + 4].copy_from_slice(b"XXXX");
		let wav = WavFile::parse(bytes).unwrap();

		match validate_container(&wav) {
			Err(WavError::Format(reason)) => assert!(reason.contains(tag), "{}", reason),
			other => panic!("expected format error for {}, got {:?}", tag, other),
		}
	}
}

#[test]
fn test_validate_container_stops_at_first_violation() {
	let mut bytes = create_wav(1, 8000, 16, &[0u8; 4]);
	bytes[0..4].copy_from_slice(b"RIFX");
	bytes[36..40].copy_from_slice(b"junk");
	let wav = WavFile::parse(bytes).unwrap();

	match validate_container(&wav) {
		Err(WavError::Format(reason)) => assert!(reason.contains("RIFF")),
		other => panic!("unexpected {:?}", other),
	}
}

#[test]
fn test_validate_subformat_rejects_non_pcm() {
	let mut bytes = create_wav(1, 8000, 16, &[0u8; 4]);
	write_u16(&mut bytes, OFFSET_AUDIO_FORMAT, 2);
	let wav = WavFile::parse(bytes).unwrap();

	assert!(validate_container(&wav).is_ok());
	assert!(matches!(validate_subformat(&wav), Err(WavError::Subformat(_))));
	assert!(matches!(validate(&wav), Err(WavError::Subformat(_))));
}

#[test]
fn test_validate_subformat_rejects_extended_fmt_chunk() {
	let mut bytes = create_wav(1, 8000, 16, &[0u8; 4]);
	write_u32(&mut bytes, OFFSET_SUBCHUNK1_SIZE, 18);
	let wav = WavFile::parse(bytes).unwrap();

	assert!(matches!(validate_subformat(&wav), Err(WavError::Subformat(_))));
}

#[test]
fn test_repair_fills_zero_data_size() {
	let mut bytes = create_wav(2, 44100, 16, &[0u8; 4000]);
	write_u32(&mut bytes, OFFSET_SUBCHUNK2_SIZE, 0);
	let len = bytes.len();
	let mut wav = WavFile::parse(bytes).unwrap();

	let repairs = repair_fields(&mut wav, len);

	assert_eq!(repairs.len(), 1);
	assert_eq!(repairs[0].field, RepairField::Subchunk2Size);
	assert_eq!(repairs[0].old, 0);
	assert_eq!(repairs[0].new, 4000);
	assert_eq!(wav.subchunk2_size(), 4000);
	assert_eq!(wav.chunk_size(), 4 + (8 + 16) + (8 + 4000));

	let once = wav.as_bytes().to_vec();
	assert!(repair_fields(&mut wav, len).is_empty());
	assert_eq!(wav.as_bytes(), &once[..]);
}

#[test]
fn test_repair_fills_every_zero_field() {
	let mut bytes = create_wav(2, 44100, 16, &[0u8; 4000]);
	write_u32(&mut bytes, OFFSET_CHUNK_SIZE, 0);
	write_u32(&mut bytes, OFFSET_BYTE_RATE, 0);
	write_u16(&mut bytes, OFFSET_BLOCK_ALIGN, 0);
	write_u32(&mut bytes, OFFSET_SUBCHUNK2_SIZE, 0);
	let len = bytes.len();
	let mut wav = WavFile::parse(bytes).unwrap();

	let repairs = repair_fields(&mut wav, len);
	let fields: Vec<RepairField> = repairs.iter().map(|r| r.field).collect();

	assert_eq!(
		fields,
		vec![
			RepairField::BlockAlign,
			RepairField::ByteRate,
			RepairField::Subchunk2Size,
			RepairField::ChunkSize
		]
	);
	assert_eq!(wav.block_align(), 4);
	assert_eq!(wav.byte_rate(), 44100 * 4);
	assert_eq!(wav.subchunk2_size(), 4000);
	assert_eq!(wav.chunk_size(), 4036);
	assert_eq!(wav.as_bytes(), &create_wav(2, 44100, 16, &[0u8; 4000])[..]);
}

#[test]
fn test_repair_leaves_nonzero_mismatch() {
	let mut bytes = create_wav(2, 44100, 16, &[0u8; 400]);
	write_u32(&mut bytes, OFFSET_BYTE_RATE, 12345);
	write_u32(&mut bytes, OFFSET_SUBCHUNK2_SIZE, 100);
	let len = bytes.len();
	let mut wav = WavFile::parse(bytes.clone()).unwrap();

	let repairs = repair_fields(&mut wav, len);

	assert!(repairs.is_empty());
	assert_eq!(wav.byte_rate(), 12345);
	assert_eq!(wav.subchunk2_size(), 100);
	assert_eq!(wav.as_bytes(), &bytes[..]);
}

#[test]
fn test_repair_is_idempotent() {
	let mut bytes = create_wav(1, 22050, 24, &[0u8; 300]);
	write_u16(&mut bytes, OFFSET_BLOCK_ALIGN, 0);
	write_u32(&mut bytes, OFFSET_CHUNK_SIZE, 0);
	let len = bytes.len();
	let mut wav = WavFile::parse(bytes).unwrap();

	repair_fields(&mut wav, len);
	let once = wav.clone();
	repair_fields(&mut wav, len);

	assert_eq!(wav, once);
	assert_eq!(wav.block_align(), 3);
}
