mod inspect;
mod reverse;
mod sample_rate;
mod spatialize;

pub use inspect::{HeaderInfo, Inspect};
pub use reverse::Reverse;
pub use sample_rate::SampleRate;
pub use spatialize::Spatialize;

use crate::container::WavFile;
use crate::error::{WavError, WavResult};

/// What a transform did to the file it was handed.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
	Modified,
	Inspected(HeaderInfo),
}

/// A single in-place operation on a validated, repaired file.
///
/// Implementations either succeed or leave `wav` exactly as they found it.
pub trait Transform {
	fn apply(&mut self, wav: &mut WavFile) -> WavResult<Outcome>;

	fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
	Inspect,
	SampleRate,
	Reverse,
	Spatialize,
}

impl FilterKind {
	pub const ALL: [FilterKind; 4] =
		[FilterKind::Inspect, FilterKind::SampleRate, FilterKind::Reverse, FilterKind::Spatialize];

	pub const DEFAULT: FilterKind = FilterKind::SampleRate;

	pub fn from_id(id: i64) -> WavResult<Self> {
		match id {
			0 => Ok(FilterKind::Inspect),
			1 => Ok(FilterKind::SampleRate),
			2 => Ok(FilterKind::Reverse),
			3 => Ok(FilterKind::Spatialize),
			other => Err(WavError::UnknownFilter(other)),
		}
	}

	pub fn id(&self) -> u8 {
		match self {
			FilterKind::Inspect => 0,
			FilterKind::SampleRate => 1,
			FilterKind::Reverse => 2,
			FilterKind::Spatialize => 3,
		}
	}

	/// Number of numeric parameters the filter takes.
	pub fn arity(&self) -> usize {
		self.default_params().len()
	}

	pub fn default_params(&self) -> &'static [f64] {
		match self {
			FilterKind::Inspect | FilterKind::Reverse => &[],
			FilterKind::SampleRate => &[40000.0],
			FilterKind::Spatialize => &[0.15],
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			FilterKind::Inspect => "inspect",
			FilterKind::SampleRate => "sample_rate",
			FilterKind::Reverse => "reverse",
			FilterKind::Spatialize => "spatialize",
		}
	}

	pub fn description(&self) -> &'static str {
		match self {
			FilterKind::Inspect => "Print header",
			FilterKind::SampleRate => "Change sample rate",
			FilterKind::Reverse => "Reverse sound",
			FilterKind::Spatialize => "Create 8D audio",
		}
	}

	pub fn build(&self, params: &[f64]) -> WavResult<Box<dyn Transform>> {
		if params.len() != self.arity() {
			return Err(WavError::Argument {
				filter: self.id(),
				expected: self.arity(),
				got: params.len(),
			});
		}

		let transform: Box<dyn Transform> = match self {
			FilterKind::Inspect => Box::new(Inspect::new()),
			FilterKind::SampleRate => Box::new(SampleRate::new(params[0] as u32)),
			FilterKind::Reverse => Box::new(Reverse::new()),
			FilterKind::Spatialize => Box::new(Spatialize::new(params[0])),
		};

		Ok(transform)
	}
}

impl std::fmt::Display for FilterKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.name())
	}
}
