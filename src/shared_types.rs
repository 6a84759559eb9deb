use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::param_validator::ParameterError;

/// Side length of a square tile, in pixels.
pub const TILE_SIZE: u32 = 8;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ImageFormat {
	/// Headerless tiled 4 bpp data as stored by the game.
	Binary,
	/// 8-bit grayscale PNG.
	Png,
}

impl FromStr for ImageFormat {
	type Err = ParameterError;

	fn from_str(token: &str) -> Result<ImageFormat, ParameterError> {
		match token {
			"bin" => return Ok(ImageFormat::Binary),
			"png" => return Ok(ImageFormat::Png),
			_ => return Err(ParameterError::UnsupportedFormat(token.to_string())),
		}
	}
}

impl fmt::Display for ImageFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ImageFormat::Binary => f.write_str("bin"),
			ImageFormat::Png => f.write_str("png"),
		}
	}
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Operation {
	/// `n`: write a blank image.
	New {
		width: u32,
		height: u32,
	},

	/// `c`: load an image and save it in another format.
	Convert {
		source_path: PathBuf,
		source_format: ImageFormat,
		/// Only present for binary sources.
		source_width: Option<u32>,
	},
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Parameters {
	pub operation: Operation,
	pub target_path: PathBuf,
	pub target_format: ImageFormat,
}
