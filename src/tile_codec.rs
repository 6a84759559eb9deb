//! Conversion between a [`PixelGrid`] and the game's headerless tiled layout.
//!
//! The image is cut into 8x8 tiles which are stored one after another, left to
//! right and then top to bottom:
//!
//! ```text
//! Tile1 Tile2 Tile3
//! Tile4 Tile5 Tile6
//! ```
//!
//! Each tile is 32 bytes, one byte per horizontal pixel pair, rows top to
//! bottom. The left pixel of a pair is the low nibble, the right pixel the
//! high nibble.

use std::io::Cursor;
use bitstream_io::{BitReader, BitWriter, LittleEndian};
use tracing::debug;

use crate::{
	bit_depth,
	error::CodecError,
	pixel_grid::PixelGrid,
	shared_types::TILE_SIZE,
};

/// Bytes in one 8x8 tile.
pub const TILE_BYTES: usize = (TILE_SIZE * TILE_SIZE / 2) as usize;


/// Rebuilds an image from tiled data. The format stores no dimensions, so the
/// width has to come from the caller; the height follows from the byte count.
pub fn decode_tiled(bytes: &[u8], width: u32) -> Result<PixelGrid, CodecError> {
	if width == 0 || width % TILE_SIZE != 0 {
		return Err(CodecError::InvalidDimension { width, height: 0 });
	}

	// Only whole tile rows are accepted; a partial one would otherwise be dropped.
	let tile_row_bytes: usize = width as usize / TILE_SIZE as usize * TILE_BYTES;
	if bytes.len() % tile_row_bytes != 0 {
		return Err(CodecError::TruncatedData { byte_count: bytes.len(), width });
	}

	let rows: usize = bytes.len() / (width as usize / 2);
	let height: u32 = u32::try_from(rows)
		.map_err(|_| CodecError::InvalidDimension { width, height: u32::MAX })?;
	debug!(width, height, byte_count = bytes.len(), "decoding tiled data");

	let mut grid: PixelGrid = PixelGrid::blank(width, height)?;
	let mut bit_reader = BitReader::endian(Cursor::new(bytes), LittleEndian);

	for tile_y in 0..grid.tile_rows() {
		for tile_x in 0..grid.tile_columns() {
			let column: usize = (tile_x * TILE_SIZE) as usize;

			for y in 0..TILE_SIZE {
				let row: &mut [u8] = grid.row_mut(tile_y * TILE_SIZE + y);
				bit_depth::read_pairs(&mut bit_reader, &mut row[column..column + TILE_SIZE as usize])?;
			}
		}
	}

	return Ok(grid);
}


/// Packs an image into tiled data, `width * height / 2` bytes long.
pub fn encode_tiled(grid: &PixelGrid) -> Result<Vec<u8>, CodecError> {
	let mut output: Vec<u8> = Vec::with_capacity(grid.pixels().len() / 2);
	let mut bit_writer = BitWriter::endian(&mut output, LittleEndian);

	for tile_y in 0..grid.tile_rows() {
		for tile_x in 0..grid.tile_columns() {
			let column: usize = (tile_x * TILE_SIZE) as usize;

			for y in 0..TILE_SIZE {
				let row: &[u8] = grid.row(tile_y * TILE_SIZE + y);
				bit_depth::write_pairs(&mut bit_writer, &row[column..column + TILE_SIZE as usize])?;
			}
		}
	}

	bit_writer.into_writer();
	debug!(width = grid.width(), height = grid.height(), byte_count = output.len(), "encoded tiled data");

	return Ok(output);
}


#[cfg(test)]
mod tests {
	use super::*;

	fn patterned(width: u32, height: u32) -> PixelGrid {
		let mut grid = PixelGrid::blank(width, height).unwrap();

		for y in 0..height {
			for x in 0..width {
				grid.set(x, y, ((x * 7 + y * 3) % 16) as u8).unwrap();
			}
		}

		return grid;
	}

	#[test]
	fn pair_packs_right_pixel_high() {
		let mut grid = PixelGrid::blank(8, 8).unwrap();
		grid.set(0, 0, 3).unwrap();
		grid.set(1, 0, 5).unwrap();

		let bytes = encode_tiled(&grid).unwrap();
		assert_eq!(bytes[0], 0x53);
		assert!(bytes[1..].iter().all(|&byte| byte == 0));
	}

	#[test]
	fn byte_unpacks_low_nibble_left() {
		let mut bytes: Vec<u8> = vec![0; 32];
		bytes[0] = 0x53;

		let grid = decode_tiled(&bytes, 8).unwrap();
		assert_eq!(grid.get(0, 0), Some(3));
		assert_eq!(grid.get(1, 0), Some(5));
	}

	#[test]
	fn output_size_is_half_the_pixel_count() {
		assert_eq!(encode_tiled(&PixelGrid::blank(8, 8).unwrap()).unwrap().len(), 32);
		assert_eq!(encode_tiled(&PixelGrid::blank(16, 8).unwrap()).unwrap().len(), 64);
		assert_eq!(encode_tiled(&PixelGrid::blank(24, 16).unwrap()).unwrap().len(), 192);
	}

	#[test]
	fn tiles_are_stored_one_after_another() {
		let mut grid = PixelGrid::blank(16, 8).unwrap();

		for y in 0..8 {
			for x in 0..8 {
				grid.set(x, y, 0x1).unwrap();
				grid.set(x + 8, y, 0xE).unwrap();
			}
		}

		let bytes = encode_tiled(&grid).unwrap();
		assert!(bytes[..32].iter().all(|&byte| byte == 0x11));
		assert!(bytes[32..].iter().all(|&byte| byte == 0xEE));
	}

	#[test]
	fn second_tile_row_follows_first() {
		// 8x16: byte 32 is the first pair of the lower tile
		let mut grid = PixelGrid::blank(8, 16).unwrap();
		grid.set(0, 8, 0x9).unwrap();
		grid.set(7, 7, 0x4).unwrap();

		let bytes = encode_tiled(&grid).unwrap();
		assert_eq!(bytes[31], 0x40);
		assert_eq!(bytes[32], 0x09);
	}

	#[test]
	fn round_trip() {
		for (width, height) in [(8, 8), (16, 8), (8, 24), (32, 16)] {
			let grid = patterned(width, height);
			let bytes = encode_tiled(&grid).unwrap();

			assert_eq!(decode_tiled(&bytes, width).unwrap(), grid);
		}
	}

	#[test]
	fn height_is_derived_from_length() {
		let grid = decode_tiled(&vec![0; 256], 16).unwrap();

		assert_eq!(grid.width(), 16);
		assert_eq!(grid.height(), 32);
	}

	#[test]
	fn partial_tile_row_is_truncated_data() {
		// 36 bytes at width 8 is one tile plus a stray row
		assert!(matches!(
			decode_tiled(&vec![0; 36], 8),
			Err(CodecError::TruncatedData { byte_count: 36, width: 8 })
		));

		assert!(matches!(
			decode_tiled(&vec![0; 33], 16),
			Err(CodecError::TruncatedData { byte_count: 33, width: 16 })
		));
	}

	#[test]
	fn bad_width_is_rejected() {
		assert!(matches!(decode_tiled(&vec![0; 32], 0), Err(CodecError::InvalidDimension { width: 0, .. })));
		assert!(matches!(decode_tiled(&vec![0; 32], 12), Err(CodecError::InvalidDimension { width: 12, .. })));
	}

	#[test]
	fn empty_input_has_no_height() {
		assert!(matches!(
			decode_tiled(&[], 8),
			Err(CodecError::InvalidDimension { width: 8, height: 0 })
		));
	}
}
