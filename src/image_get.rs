use std::fs;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::{debug, info};

use crate::{
	error::CodecError,
	grayscale::{self, GrayscaleImage},
	pixel_grid::{self, PixelGrid},
	shared_types::ImageFormat,
	tile_codec,
};


fn source_error(source_file: &Path, error: io::Error) -> CodecError {
	match error.kind() {
		io::ErrorKind::NotFound => CodecError::FileNotFound(source_file.to_path_buf()),
		_ => CodecError::Io(error),
	}
}


/// Loads `source_file` in the given format. `width` is only read for binary
/// sources; a missing width is rejected as a zero width.
pub fn load(source_file: &Path, format: ImageFormat, width: Option<u32>) -> Result<PixelGrid, CodecError> {
	match format {
		ImageFormat::Binary => get_bin(source_file, width.unwrap_or(0)),
		ImageFormat::Png => get_png(source_file),
	}
}


pub fn get_bin(source_file: &Path, width: u32) -> Result<PixelGrid, CodecError> {
	let bin_data: Vec<u8> = fs::read(source_file).map_err(|error| source_error(source_file, error))?;
	info!("Read {} bytes from {}", bin_data.len(), source_file.display());

	return tile_codec::decode_tiled(&bin_data, width);
}


pub fn get_png(source_file: &Path) -> Result<PixelGrid, CodecError> {
	let file: File = File::open(source_file).map_err(|error| source_error(source_file, error))?;

	// Palettes, sub-byte and 16-bit depths all come out as 8-bit samples
	let mut decoder = png::Decoder::new(BufReader::new(file));
	decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
	let mut reader = decoder.read_info()?;

	// Refuse untiled or oversized images before decoding any pixel data
	let (width, height): (u32, u32) = (reader.info().width, reader.info().height);
	pixel_grid::check_dimensions(width, height)?;

	let mut buffer: Vec<u8> = pixel_grid::zeroed_buffer(reader.output_buffer_size(), width, height)?;
	let frame = reader.next_frame(&mut buffer)?;

	match frame.color_type {
		png::ColorType::Grayscale => (),
		png::ColorType::GrayscaleAlpha => debug!("PNG has color type grayscale with alpha, will discard alpha"),
		png::ColorType::Rgb => debug!("PNG has color type RGB, will use red channel as grayscale"),
		png::ColorType::Rgba => debug!("PNG has color type RGBA, will use red channel as grayscale and discard alpha"),
		png::ColorType::Indexed => debug!("PNG is still indexed after expansion, reading indices as intensities"),
	}

	let samples: usize = frame.color_type.samples();
	let row_length: usize = frame.width as usize * samples;
	let mut intensities: Vec<u8> = Vec::with_capacity(frame.width as usize * frame.height as usize);

	for line in buffer[..frame.buffer_size()].chunks_exact(frame.line_size) {
		for pixel in line[..row_length].chunks_exact(samples) {
			intensities.push(pixel[0]);
		}
	}

	info!("Opened {}x{} PNG {}", frame.width, frame.height, source_file.display());

	let image: GrayscaleImage = GrayscaleImage::new(frame.width, frame.height, intensities)?;
	return grayscale::decode_grayscale(&image);
}
