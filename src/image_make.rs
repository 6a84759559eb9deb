use std::io::{Write, BufWriter};
use std::fs::File;
use std::path::Path;
use tracing::info;

use crate::{
	error::CodecError,
	grayscale::{self, GrayscaleImage},
	pixel_grid::PixelGrid,
	shared_types::ImageFormat,
	tile_codec,
};


pub fn save(target_path: &Path, grid: &PixelGrid, format: ImageFormat) -> Result<(), CodecError> {
	match format {
		ImageFormat::Binary => make_bin(target_path, grid),
		ImageFormat::Png => make_png(target_path, grid),
	}
}


pub fn make_bin(target_path: &Path, grid: &PixelGrid) -> Result<(), CodecError> {
	let bin_data: Vec<u8> = tile_codec::encode_tiled(grid)?;

	let mut buffer = BufWriter::new(File::create(target_path)?);
	buffer.write_all(&bin_data)?;
	buffer.flush()?;

	info!("Wrote {} bytes to {}", bin_data.len(), target_path.display());
	return Ok(());
}


pub fn make_png(target_path: &Path, grid: &PixelGrid) -> Result<(), CodecError> {
	let image: GrayscaleImage = grayscale::encode_grayscale(grid);

	let mut buffer = BufWriter::new(File::create(target_path)?);

	// No alpha channel, every pixel is opaque
	let mut encoder = png::Encoder::new(&mut buffer, image.width(), image.height());
	encoder.set_color(png::ColorType::Grayscale);
	encoder.set_depth(png::BitDepth::Eight);

	let mut writer = encoder.write_header()?;
	writer.write_image_data(image.intensities())?;
	writer.finish()?;
	buffer.flush()?;

	info!("Wrote {}x{} PNG to {}", image.width(), image.height(), target_path.display());
	return Ok(());
}
