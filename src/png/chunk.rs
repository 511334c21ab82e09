//! PNG chunk framing.

use crate::compress::Crc32;

/// Write a PNG chunk (length, type, data, CRC32) to the output buffer.
///
/// Layout: 4-byte big-endian payload length, the 4-byte type tag, the
/// payload verbatim, then the big-endian CRC32 of tag + payload (the
/// length field is not covered). Total bytes appended: `data.len() + 12`.
///
/// The tag is a `[u8; 4]`, so a wrong-length tag cannot be passed; no
/// runtime validation is performed.
pub fn write_chunk(output: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    output.reserve(12 + data.len());

    let mut crc = Crc32::new();
    crc.update(chunk_type);
    crc.update(data);
    let crc = crc.finalize();

    output.extend_from_slice(&(data.len() as u32).to_be_bytes());
    output.extend_from_slice(chunk_type);
    output.extend_from_slice(data);
    output.extend_from_slice(&crc.to_be_bytes());
}
