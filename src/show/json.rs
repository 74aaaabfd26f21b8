use crate::transform::HeaderInfo;

pub fn render(info: &HeaderInfo) -> String {
	let fields = [
		("channels", info.channels.to_string()),
		("sample_rate", info.sample_rate.to_string()),
		("byte_rate", info.byte_rate.to_string()),
		("bits_per_sample", info.bits_per_sample.to_string()),
		("block_align", info.block_align.to_string()),
		("data_size", info.data_size.to_string()),
		("duration", format!("{:.6}", info.duration)),
	];

	let body: Vec<String> =
		fields.iter().map(|(key, value)| format!("  \"{}\": {}", key, value)).collect();

	format!("{{\n{}\n}}", body.join(",\n"))
}
