use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a file on its way through the pipeline.
#[derive(Error, Debug)]
pub enum WavError {
	/// Container signatures are wrong or the buffer is too short to hold them.
	#[error("invalid wav container: {0}")]
	Format(String),

	/// Not canonical PCM.
	#[error("unsupported wav subformat: {0}")]
	Subformat(String),

	#[error("filter {filter} expects {expected} argument(s), got {got}")]
	Argument { filter: u8, expected: usize, got: usize },

	#[error("unknown filter id {0}")]
	UnknownFilter(i64),

	#[error("unsupported bit depth {0} (expected 8, 12, 16, 24 or 32)")]
	UnsupportedDepth(u16),

	#[error("degenerate input: {0}")]
	DegenerateInput(String),

	#[error("failed to allocate {0} bytes for output buffer")]
	Allocation(usize),

	#[error("{}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

impl WavError {
	pub fn format(reason: impl Into<String>) -> Self {
		Self::Format(reason.into())
	}

	pub fn subformat(reason: impl Into<String>) -> Self {
		Self::Subformat(reason.into())
	}

	pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Io { path: path.into(), source }
	}
}

pub type WavResult<T> = Result<T, WavError>;
