use std::path::PathBuf;

use crate::shared_types::{
	ImageFormat,
	Operation,
	Parameters,
};

/// Mode, format, two size-or-path arguments and the output file.
pub const MIN_ARGUMENTS: usize = 5;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParameterError {
	#[error("Expected at least 5 arguments.")]
	MissingArguments,

	#[error("Unsupported file format: {0}. Supported values are bin, png.")]
	UnsupportedFormat(String),

	#[error("Error parsing width and height.")]
	InvalidSize,

	#[error("Width required for binary input.")]
	MissingWidth,

	#[error("Unrecognized parameter: {0}. Supported values are: n, c.")]
	UnrecognizedMode(String),
}


/// Parses the positional arguments (program name already stripped):
///
/// ```text
/// n <bin|png> <width> <height> <output file>
/// c <bin|png> [<width>] <input file> <bin|png> <output file>
/// ```
///
/// The output file is always the last argument. For `c`, the input file and
/// output format are counted from the end, so `<width>` can be left out for
/// PNG sources.
pub fn validate(args: &[String]) -> Result<Parameters, ParameterError> {
	let arg_count: usize = args.len();

	if arg_count < MIN_ARGUMENTS {
		return Err(ParameterError::MissingArguments);
	}

	let format: ImageFormat = args[1].parse()?;
	let target_path: PathBuf = PathBuf::from(&args[arg_count - 1]);

	match args[0].as_str() {
		"n" => {
			let width: u32 = args[2].parse().map_err(|_| ParameterError::InvalidSize)?;
			let height: u32 = args[3].parse().map_err(|_| ParameterError::InvalidSize)?;

			return Ok(Parameters {
				operation: Operation::New { width, height },
				target_path,
				target_format: format,
			});
		},

		"c" => {
			let mut source_width: Option<u32> = None;

			if format == ImageFormat::Binary {
				source_width = Some(args[2].parse().map_err(|_| ParameterError::MissingWidth)?);
			}

			let target_format: ImageFormat = args[arg_count - 2].parse()?;

			return Ok(Parameters {
				operation: Operation::Convert {
					source_path: PathBuf::from(&args[arg_count - 3]),
					source_format: format,
					source_width,
				},
				target_path,
				target_format,
			});
		},

		mode => return Err(ParameterError::UnrecognizedMode(mode.to_string())),
	}
}
