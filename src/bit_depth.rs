use std::io;
use bitstream_io::{BitReader, BitRead, BitWriter, BitWrite, LittleEndian};


// In the game's 4 bpp layout two adjacent pixels share a byte, with the left
// (even) pixel in the low nibble. A little-endian bit stream fills each byte
// from its low end, so writing the pixels left to right as 4-bit values lands
// them in exactly that order.

pub fn write_pairs<W: io::Write>(bit_writer: &mut BitWriter<W, LittleEndian>, pixels: &[u8]) -> io::Result<()> {
	for pair in pixels.chunks_exact(2) {
		bit_writer.write(4, pair[0])?;
		bit_writer.write(4, pair[1])?;
	}

	return Ok(());
}


pub fn read_pairs<R: io::Read>(bit_reader: &mut BitReader<R, LittleEndian>, pixels: &mut [u8]) -> io::Result<()> {
	for pair in pixels.chunks_exact_mut(2) {
		pair[0] = bit_reader.read::<u8>(4)?;
		pair[1] = bit_reader.read::<u8>(4)?;
	}

	return Ok(());
}
