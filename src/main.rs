use std::env;
use std::process::ExitCode;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use evatile::{
	param_validator,
	shared_types::Parameters,
};


pub fn main() -> ExitCode {
	// RUST_LOG=info shows progress; warnings only by default
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.init();

	let args: Vec<String> = env::args().skip(1).collect();

	if args.len() < param_validator::MIN_ARGUMENTS {
		help_message();
		return ExitCode::from(2);
	}

	let parameters: Parameters = match param_validator::validate(&args) {
		Ok(parameters) => parameters,
		Err(error) => {
			println!("{}", error);
			return ExitCode::FAILURE;
		},
	};

	let instant = Instant::now();

	match evatile::process(&parameters) {
		Ok(()) => {
			info!("Done in {}ms", instant.elapsed().as_millis());
			return ExitCode::SUCCESS;
		},

		Err(error) => {
			println!("Error: {}", error);
			return ExitCode::FAILURE;
		},
	}
}


pub fn help_message() {
	println!("Image conversion tool for the game's tiled 4 bpp graphics.");
	println!();
	println!("Usage:");
	println!("  evatile n <bin | png> <width> <height> <filename>");
	println!("  Creates a new blank image and saves it");
	println!();
	println!("  evatile c <bin | png> [<width>] <input file> <bin | png> <output file>");
	println!("  Converts an <input file> image to <output file>");
	println!("  <width> required for binary format");
	println!();
	println!("Width and height must be multiples of 8. Set RUST_LOG=info for progress output.");
}
