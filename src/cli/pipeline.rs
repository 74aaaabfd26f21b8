use super::FilterSelection;
use crate::core::{Processed, process};
use crate::error::{WavError, WavResult};
use crate::show::{Show, ShowOptions};
use std::path::PathBuf;

/// Load, process and save one file.
pub struct Pipeline {
	input_path: PathBuf,
	output_path: PathBuf,
	selection: FilterSelection,
	show: ShowOptions,
}

impl Pipeline {
	pub fn new(
		input_path: impl Into<PathBuf>,
		output_path: impl Into<PathBuf>,
		selection: FilterSelection,
		show: ShowOptions,
	) -> Self {
		Self { input_path: input_path.into(), output_path: output_path.into(), selection, show }
	}

	pub fn run(&self) -> WavResult<Processed> {
		let bytes = self.load()?;
		log::info!("loaded {} ({} bytes)", self.input_path.display(), bytes.len());

		let processed =
			process(bytes, self.selection.kind.id() as i64, &self.selection.params)?;

		if let Some(header) = &processed.header {
			Show::new(self.show).print(header);
		}

		self.save(&processed.bytes)?;
		Ok(processed)
	}

	fn load(&self) -> WavResult<Vec<u8>> {
		std::fs::read(&self.input_path).map_err(|e| WavError::io(&self.input_path, e))
	}

	fn save(&self, bytes: &[u8]) -> WavResult<()> {
		std::fs::write(&self.output_path, bytes).map_err(|e| WavError::io(&self.output_path, e))?;
		println!("saved {} ({} bytes)", self.output_path.display(), bytes.len());
		Ok(())
	}
}
