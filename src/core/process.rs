use crate::container::WavFile;
use crate::container::wav::{Repair, repair_fields, validate};
use crate::error::WavResult;
use crate::transform::{FilterKind, HeaderInfo, Outcome};

/// A buffer that made it through the whole pipeline.
#[derive(Debug, Clone)]
pub struct Processed {
	pub bytes: Vec<u8>,
	pub repairs: Vec<Repair>,
	pub header: Option<HeaderInfo>,
}

impl Processed {
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}
}

/// Validates, repairs and filters one in-memory WAV file.
///
/// Any error means the returned buffer must not be persisted; nothing is
/// handed back in that case.
pub fn process(bytes: Vec<u8>, filter_id: i64, params: &[f64]) -> WavResult<Processed> {
	let kind = FilterKind::from_id(filter_id)?;

	let buffer_len = bytes.len();
	let mut wav = WavFile::parse(bytes)?;
	validate(&wav)?;

	let repairs = repair_fields(&mut wav, buffer_len);

	let mut filter = kind.build(params)?;
	log::debug!("applying filter {} ({})", kind.id(), filter.name());
	let header = match filter.apply(&mut wav)? {
		Outcome::Inspected(info) => Some(info),
		Outcome::Modified => None,
	};

	Ok(Processed { bytes: wav.into_bytes(), repairs, header })
}
