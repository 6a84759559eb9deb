//! Converts images between a handheld game's tiled 4 bpp format and PNG.

pub mod error;
pub mod shared_types;
pub mod param_validator;
pub mod pixel_grid;
pub mod bit_depth;
pub mod tile_codec;
pub mod grayscale;
pub mod image_get;
pub mod image_make;

use tracing::info;

use crate::{
	error::CodecError,
	pixel_grid::PixelGrid,
	shared_types::{Operation, Parameters},
};


/// Builds or loads the source image, then writes it out in the target format.
pub fn process(parameters: &Parameters) -> Result<(), CodecError> {
	let grid: PixelGrid = match &parameters.operation {
		Operation::New { width, height } => {
			info!("Creating blank {}x{} image", width, height);
			PixelGrid::blank(*width, *height)?
		},

		Operation::Convert { source_path, source_format, source_width } => {
			info!("Converting {} from {} to {}", source_path.display(), source_format, parameters.target_format);
			image_get::load(source_path, *source_format, *source_width)?
		},
	};

	return image_make::save(&parameters.target_path, &grid, parameters.target_format);
}
