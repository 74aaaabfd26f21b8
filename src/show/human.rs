use crate::transform::{FilterKind, HeaderInfo};
use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{Table, row};

pub fn render(info: &HeaderInfo) -> String {
	let mut table = Table::new();
	table.set_format(*FORMAT_CLEAN);
	table.set_titles(row![b -> "WAV file header", ""]);

	table.add_row(row!["Num channels", r -> info.channels]);
	table.add_row(row!["Sample rate", r -> format!("{} Hz", info.sample_rate)]);
	table.add_row(row!["Byte rate", r -> info.byte_rate]);
	table.add_row(row!["Bits per sample", r -> info.bits_per_sample]);
	table.add_row(row!["Block align", r -> info.block_align]);
	table.add_row(row!["Data size", r -> format!("{} bytes", info.data_size)]);
	table.add_row(row!["Duration", r -> format!("{:.3} s", info.duration)]);

	table.to_string()
}

pub fn render_filters(kinds: &[FilterKind]) -> String {
	let mut table = Table::new();
	table.set_format(*FORMAT_CLEAN);
	table.set_titles(row![b -> "Filter", b -> "Name", b -> "Description", b -> "# of args"]);

	for kind in kinds {
		table.add_row(row![r -> kind.id(), kind.name(), kind.description(), r -> kind.arity()]);
	}

	table.to_string()
}
