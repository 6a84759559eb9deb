use crate::error::CodecError;
use crate::shared_types::TILE_SIZE;

/// Largest value a 4-bit pixel can hold.
pub const PIXEL_MAX: u8 = 0xF;

/// A 4 bpp image whose sides are whole tiles.
///
/// Pixels live in one row-major buffer (`y * width + x`). Every value is kept
/// within `0..=PIXEL_MAX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
	width: u32,
	height: u32,
	pixels: Vec<u8>,
}

pub fn check_dimensions(width: u32, height: u32) -> Result<(), CodecError> {
	if width == 0 || height == 0 || width % TILE_SIZE != 0 || height % TILE_SIZE != 0 {
		return Err(CodecError::InvalidDimension { width, height });
	}

	return Ok(());
}

/// `width * height`, or `TooLarge` when it does not fit in memory addressing.
pub fn pixel_count(width: u32, height: u32) -> Result<usize, CodecError> {
	return (width as usize).checked_mul(height as usize)
		.ok_or(CodecError::TooLarge { width, height });
}

/// A zero-filled buffer of `len` bytes for a `width` x `height` image. Fails
/// with `TooLarge` instead of aborting when the allocation is refused.
pub fn zeroed_buffer(len: usize, width: u32, height: u32) -> Result<Vec<u8>, CodecError> {
	let mut buffer: Vec<u8> = Vec::new();
	buffer.try_reserve_exact(len).map_err(|_| CodecError::TooLarge { width, height })?;
	buffer.resize(len, 0);

	return Ok(buffer);
}

impl PixelGrid {
	/// Creates an all-zero image.
	pub fn blank(width: u32, height: u32) -> Result<PixelGrid, CodecError> {
		check_dimensions(width, height)?;
		let pixels: Vec<u8> = zeroed_buffer(pixel_count(width, height)?, width, height)?;

		return Ok(PixelGrid { width, height, pixels });
	}

	/// Wraps an existing row-major buffer, checking dimensions, length and range.
	pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Result<PixelGrid, CodecError> {
		check_dimensions(width, height)?;

		let expected: usize = pixel_count(width, height)?;
		if pixels.len() != expected {
			return Err(CodecError::BufferSizeMismatch { expected, actual: pixels.len() });
		}

		if let Some(&value) = pixels.iter().find(|&&value| value > PIXEL_MAX) {
			return Err(CodecError::PixelOutOfRange { value });
		}

		return Ok(PixelGrid { width, height, pixels });
	}

	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn height(&self) -> u32 {
		self.height
	}

	pub fn tile_columns(&self) -> u32 {
		self.width / TILE_SIZE
	}

	pub fn tile_rows(&self) -> u32 {
		self.height / TILE_SIZE
	}

	pub fn pixels(&self) -> &[u8] {
		&self.pixels
	}

	pub fn get(&self, x: u32, y: u32) -> Option<u8> {
		if x >= self.width || y >= self.height {
			return None;
		}

		return Some(self.pixels[self.index(x, y)]);
	}

	pub fn set(&mut self, x: u32, y: u32, value: u8) -> Result<(), CodecError> {
		if x >= self.width || y >= self.height {
			return Err(CodecError::OutOfBounds { x, y });
		}

		if value > PIXEL_MAX {
			return Err(CodecError::PixelOutOfRange { value });
		}

		let index: usize = self.index(x, y);
		self.pixels[index] = value;
		return Ok(());
	}

	/// One row of pixels, left to right.
	pub(crate) fn row(&self, y: u32) -> &[u8] {
		let start: usize = self.index(0, y);
		&self.pixels[start..start + self.width as usize]
	}

	pub(crate) fn row_mut(&mut self, y: u32) -> &mut [u8] {
		let start: usize = self.index(0, y);
		let width: usize = self.width as usize;
		&mut self.pixels[start..start + width]
	}

	fn index(&self, x: u32, y: u32) -> usize {
		y as usize * self.width as usize + x as usize
	}
}
