use std::path::PathBuf;

/// Failures raised while building, decoding or encoding a [`PixelGrid`](crate::pixel_grid::PixelGrid).
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
	/// Width or height is zero or not a multiple of the tile size.
	#[error("invalid dimensions {width}x{height}: width and height must be positive multiples of 8")]
	InvalidDimension { width: u32, height: u32 },

	/// Dimensions are valid but the pixel buffer cannot be allocated.
	#[error("image of {width}x{height} pixels is too large to allocate")]
	TooLarge { width: u32, height: u32 },

	/// Binary data does not end on a tile row boundary for the given width.
	#[error("truncated data: {byte_count} bytes is not a whole number of tile rows at width {width}")]
	TruncatedData { byte_count: usize, width: u32 },

	#[error("pixel value {value} is outside the 4-bit range 0-15")]
	PixelOutOfRange { value: u8 },

	#[error("pixel ({x}, {y}) is outside the image")]
	OutOfBounds { x: u32, y: u32 },

	#[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
	BufferSizeMismatch { expected: usize, actual: usize },

	#[error("file not found: {}", .0.display())]
	FileNotFound(PathBuf),

	#[error("i/o error: {0}")]
	Io(#[from] std::io::Error),

	#[error("png decode error: {0}")]
	PngDecode(#[from] png::DecodingError),

	#[error("png encode error: {0}")]
	PngEncode(#[from] png::EncodingError),
}
