mod human;
mod json;

use crate::transform::{FilterKind, HeaderInfo};

#[derive(Debug, Clone, Copy, Default)]
pub struct ShowOptions {
	pub json: bool,
}

pub struct Show {
	opts: ShowOptions,
}

impl Show {
	pub fn new(opts: ShowOptions) -> Self {
		Self { opts }
	}

	pub fn render(&self, info: &HeaderInfo) -> String {
		if self.opts.json {
			return json::render(info);
		}

		human::render(info)
	}

	pub fn print(&self, info: &HeaderInfo) {
		println!("{}", self.render(info));
	}
}

/// Table of every filter with its id and argument count.
pub fn filter_usage() -> String {
	human::render_filters(&FilterKind::ALL)
}
