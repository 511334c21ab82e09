//! Adler-32 checksum (RFC 1950) used for the zlib stream trailer.

/// Calculate Adler-32 checksum of data.
///
/// Runs the two sums `s1` (init 1) and `s2` (init 0) modulo 65521 and
/// returns `(s2 << 16) | s1`. The modulo is deferred to NMAX-sized chunk
/// boundaries, which is bit-identical to per-byte reduction: NMAX = 5552
/// is the largest n such that 255*n*(n+1)/2 + (n+1)*65520 fits in u32.
#[inline]
#[must_use]
pub fn adler32(data: &[u8]) -> u32 {
    const MOD_ADLER: u32 = 65_521;
    const NMAX: usize = 5552;

    let mut s1: u32 = 1;
    let mut s2: u32 = 0;

    for chunk in data.chunks(NMAX) {
        for &b in chunk {
            s1 += b as u32;
            s2 += s1;
        }
        s1 %= MOD_ADLER;
        s2 %= MOD_ADLER;
    }

    (s2 << 16) | s1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adler32_empty() {
        assert_eq!(adler32(&[]), 1);
        // Big-endian emission order used by the zlib trailer.
        assert_eq!(adler32(&[]).to_be_bytes(), [0, 0, 0, 1]);
    }

    #[test]
    fn test_adler32_known_values() {
        assert_eq!(adler32(b"hello"), 0x062C0215);
        assert_eq!(adler32(b"Adler-32"), 0x0C34027B);
        assert_eq!(adler32(b"123456789"), 0x091E01DE);
    }

    #[test]
    fn test_adler32_red_scanline() {
        // The filter byte plus one red pixel, the exact IDAT payload for #ff0000.
        assert_eq!(adler32(&[0x00, 0xFF, 0x00, 0x00]), 0x03010100);
    }

    #[test]
    fn test_adler32_deferred_modulo_boundary() {
        // Inputs straddling the NMAX boundary must still reduce correctly.
        let data = vec![0xFF; 5552 + 1];
        let mut s1: u32 = 1;
        let mut s2: u32 = 0;
        for &b in &data {
            s1 = (s1 + b as u32) % 65_521;
            s2 = (s2 + s1) % 65_521;
        }
        assert_eq!(adler32(&data), (s2 << 16) | s1);
    }
}
