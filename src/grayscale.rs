use crate::{
	error::CodecError,
	pixel_grid::{self, PixelGrid},
};

/// Distance between two of the 16 gray levels (0x00, 0x11, ... 0xFF).
pub const LEVEL_STEP: u8 = 0x11;


/// An 8-bit grayscale raster, one intensity per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayscaleImage {
	width: u32,
	height: u32,
	intensities: Vec<u8>,
}

impl GrayscaleImage {
	pub fn new(width: u32, height: u32, intensities: Vec<u8>) -> Result<GrayscaleImage, CodecError> {
		let expected: usize = pixel_grid::pixel_count(width, height)?;

		if intensities.len() != expected {
			return Err(CodecError::BufferSizeMismatch { expected, actual: intensities.len() });
		}

		return Ok(GrayscaleImage { width, height, intensities });
	}

	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn height(&self) -> u32 {
		self.height
	}

	pub fn intensities(&self) -> &[u8] {
		&self.intensities
	}
}


/// Quantizes every intensity down to its 4-bit level. Images whose sides are
/// not whole tiles are refused.
pub fn decode_grayscale(image: &GrayscaleImage) -> Result<PixelGrid, CodecError> {
	let pixels: Vec<u8> = image.intensities.iter()
		.map(|&intensity| intensity / LEVEL_STEP)
		.collect();

	return PixelGrid::from_pixels(image.width, image.height, pixels);
}


pub fn encode_grayscale(grid: &PixelGrid) -> GrayscaleImage {
	let intensities: Vec<u8> = grid.pixels().iter()
		.map(|&value| value * LEVEL_STEP)
		.collect();

	return GrayscaleImage {
		width: grid.width(),
		height: grid.height(),
		intensities,
	};
}
