//! 1×1 PNG swatch encoding.
//!
//! Produces the PNG container by hand: signature, IHDR, a single IDAT
//! holding a zlib "stored block" around the one scanline, and IEND. The
//! stored block carries the scanline uncompressed, so the output is fully
//! deterministic and always 72 bytes.

pub mod chunk;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::trace;

use crate::color::Rgb;
use crate::compress::adler32;
use crate::error::Result;
use self::chunk::write_chunk;

/// PNG file signature (magic bytes).
const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Zlib header: deflate, 32 KiB window, no preset dictionary, lowest
/// compression flag (78 01).
const ZLIB_HEADER: [u8; 2] = [0x78, 0x01];

/// Deflate stored-block header: final-block bit set, BTYPE 00, then
/// LEN = 4 and NLEN = !LEN, both little-endian.
const STORED_BLOCK_HEADER: [u8; 5] = [0x01, 0x04, 0x00, 0xFB, 0xFF];

/// Encode one color as a complete 1×1 PNG file.
///
/// The image is always 8-bit truecolor without alpha. Deterministic:
/// equal inputs produce byte-identical output.
#[must_use]
pub fn encode(color: Rgb) -> Vec<u8> {
    let mut output = Vec::with_capacity(72);
    output.extend_from_slice(&PNG_SIGNATURE);
    write_ihdr(&mut output);
    write_idat(&mut output, color);
    write_chunk(&mut output, b"IEND", &[]);
    output
}

/// Encode one color as a `data:image/png;base64,...` URL.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidHexColor`] for unparseable input; no
/// partial output is produced.
///
/// # Example
///
/// ```rust
/// let url = monopng::data_url("#ff0000").unwrap();
/// assert!(url.starts_with("data:image/png;base64,"));
/// ```
pub fn data_url(hex: &str) -> Result<String> {
    let color = Rgb::from_hex(hex)?;
    trace!("encoding 1x1 swatch for {:?}", color);

    let png = encode(color);
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}

/// Write the IHDR chunk: 1×1, bit depth 8, color type 2 (truecolor),
/// compression 0, filter 0, interlace 0.
fn write_ihdr(output: &mut Vec<u8>) {
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&1u32.to_be_bytes()); // width
    ihdr.extend_from_slice(&1u32.to_be_bytes()); // height
    ihdr.push(8); // bit depth
    ihdr.push(2); // color type: truecolor
    ihdr.push(0); // compression method: deflate
    ihdr.push(0); // filter method
    ihdr.push(0); // interlace: none
    write_chunk(output, b"IHDR", &ihdr);
}

/// Write the IDAT chunk: a zlib stream whose single stored block holds
/// the scanline `[filter 0, r, g, b]`, followed by the Adler-32 of that
/// raw scanline (not of the zlib framing).
fn write_idat(output: &mut Vec<u8>, color: Rgb) {
    let scanline = [0x00, color.r, color.g, color.b];

    let mut stream = Vec::with_capacity(15);
    stream.extend_from_slice(&ZLIB_HEADER);
    stream.extend_from_slice(&STORED_BLOCK_HEADER);
    stream.extend_from_slice(&scanline);
    stream.extend_from_slice(&adler32(&scanline).to_be_bytes());

    write_chunk(output, b"IDAT", &stream);
}
