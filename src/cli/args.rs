use crate::transform::FilterKind;
use clap::Parser;

pub const DEFAULT_INPUT: &str = "test.wav";
pub const DEFAULT_OUTPUT: &str = "out.wav";

#[derive(Parser, Debug)]
#[command(name = "wavproc")]
#[command(about = env!("CARGO_PKG_DESCRIPTION"), long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(allow_negative_numbers = true)]
pub struct Args {
	#[arg(value_name = "INPUT", default_value = DEFAULT_INPUT, help = "WAV file to read")]
	pub input: String,

	#[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT, help = "Where to write the result")]
	pub output: String,

	#[arg(value_name = "FILTER", help = "Filter id (see --list-filters)")]
	pub filter: Option<String>,

	#[arg(value_name = "PARAMS", help = "Numeric filter arguments")]
	pub params: Vec<String>,

	#[arg(long, help = "Print the inspect report as JSON")]
	pub json: bool,

	#[arg(long, help = "List available filters and their arguments")]
	pub list_filters: bool,
}

/// A filter selection with its arguments after defaulting.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
	pub kind: FilterKind,
	pub params: Vec<f64>,
}

impl Args {
	pub fn parse() -> Self {
		<Self as clap::Parser>::parse()
	}

	/// Applies the defaulting rules: no filter means the default filter with
	/// its default arguments; an unknown filter falls back to the default
	/// filter but keeps the given arguments; arguments that are not positive
	/// numbers become `0.0`.
	pub fn selection(&self) -> FilterSelection {
		let Some(raw) = &self.filter else {
			let kind = FilterKind::DEFAULT;
			log::info!(
				"no filter given, proceeding with default filter {} {:?}",
				kind.id(),
				kind.default_params()
			);
			return FilterSelection { kind, params: kind.default_params().to_vec() };
		};

		let kind = match raw.trim().parse::<i64>().map(FilterKind::from_id) {
			Ok(Ok(kind)) => kind,
			_ => {
				log::warn!(
					"invalid filter {:?}, proceeding with default filter {}",
					raw,
					FilterKind::DEFAULT.id()
				);
				FilterKind::DEFAULT
			}
		};

		let params = self.params.iter().enumerate().map(|(i, p)| parse_param(i, p)).collect();
		FilterSelection { kind, params }
	}
}

fn parse_param(index: usize, raw: &str) -> f64 {
	match raw.trim().parse::<f64>() {
		Ok(value) if value > 0.0 => value,
		_ => {
			log::warn!("invalid filter argument #{} ({:?}), defaulting to 0", index + 1, raw);
			0.0
		}
	}
}
