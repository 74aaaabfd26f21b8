use wavproc::cli::{Args, Pipeline};
use wavproc::show::{ShowOptions, filter_usage};

fn main() {
	// RUST_LOG overrides the default level
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
		.format_timestamp(None)
		.init();

	let args = Args::parse();

	if args.list_filters {
		println!("{}", filter_usage());
		return;
	}

	let selection = args.selection();
	let pipeline =
		Pipeline::new(&args.input, &args.output, selection, ShowOptions { json: args.json });

	match pipeline.run() {
		Ok(processed) => {
			log::debug!("{} header field(s) repaired", processed.repairs.len());
		}
		Err(e) => {
			if matches!(e, wavproc::WavError::Argument { .. }) {
				eprintln!("{}", filter_usage());
			}
			eprintln!("Error: {}", e);
			std::process::exit(1);
		}
	}
}
