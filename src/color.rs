//! Color type definitions and hex parsing.

use crate::error::{Error, Result};

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Parse a CSS-style hex color code.
    ///
    /// Accepts `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`, case
    /// insensitive. Short forms expand by doubling each digit
    /// (`#03F` -> `#0033FF`). Alpha digits are validated but discarded;
    /// the swatch output is always truecolor without alpha.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHexColor`] when the `#` prefix is missing,
    /// the digit count is not 3, 4, 6 or 8, or any digit is not hex.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || Error::InvalidHexColor {
            input: hex.to_string(),
        };

        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        // Normalize to one byte value per channel, alpha last (if present).
        let nibble = |b: u8| -> u8 {
            // Safe: every byte was checked as an ASCII hex digit above.
            match b {
                b'0'..=b'9' => b - b'0',
                b'a'..=b'f' => b - b'a' + 10,
                _ => b - b'A' + 10,
            }
        };
        let bytes = digits.as_bytes();
        let channels: Vec<u8> = match bytes.len() {
            // #RGB / #RGBA: each digit doubles into a full byte.
            3 | 4 => bytes.iter().map(|&d| nibble(d) * 17).collect(),
            6 | 8 => bytes
                .chunks_exact(2)
                .map(|pair| (nibble(pair[0]) << 4) | nibble(pair[1]))
                .collect(),
            _ => return Err(invalid()),
        };

        Ok(Rgb {
            r: channels[0],
            g: channels[1],
            b: channels[2],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors() {
        assert_eq!(Rgb::from_hex("#000000").unwrap(), Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(
            Rgb::from_hex("#ffffff").unwrap(),
            Rgb {
                r: 255,
                g: 255,
                b: 255
            }
        );
        assert_eq!(
            Rgb::from_hex("#ff0000").unwrap(),
            Rgb { r: 255, g: 0, b: 0 }
        );
        assert_eq!(
            Rgb::from_hex("#00ff00").unwrap(),
            Rgb { r: 0, g: 255, b: 0 }
        );
        assert_eq!(
            Rgb::from_hex("#0000ff").unwrap(),
            Rgb { r: 0, g: 0, b: 255 }
        );
    }

    #[test]
    fn test_known_values() {
        for (hex, expected) in [
            ("#fa8072", (250, 128, 114)),
            ("#FFD700", (255, 215, 0)),
            ("#4682B4", (70, 130, 180)),
            ("#8A2BE2", (138, 43, 226)),
            ("#DC143C", (220, 20, 60)),
            ("#191970", (25, 25, 112)),
            ("#696969", (105, 105, 105)),
        ] {
            let rgb = Rgb::from_hex(hex).unwrap();
            assert_eq!((rgb.r, rgb.g, rgb.b), expected, "hex {}", hex);
        }
    }

    #[test]
    fn test_short_form_expands_digits() {
        assert_eq!(
            Rgb::from_hex("#03F").unwrap(),
            Rgb { r: 0, g: 51, b: 255 }
        );
        assert_eq!(
            Rgb::from_hex("#369").unwrap(),
            Rgb {
                r: 51,
                g: 102,
                b: 153
            }
        );
        assert_eq!(
            Rgb::from_hex("#888").unwrap(),
            Rgb {
                r: 136,
                g: 136,
                b: 136
            }
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            Rgb::from_hex("#fA8072").unwrap(),
            Rgb::from_hex("#FA8072").unwrap()
        );
    }

    #[test]
    fn test_alpha_digits_ignored() {
        assert_eq!(
            Rgb::from_hex("#ff000080").unwrap(),
            Rgb { r: 255, g: 0, b: 0 }
        );
        assert_eq!(
            Rgb::from_hex("#F00A").unwrap(),
            Rgb { r: 255, g: 0, b: 0 }
        );
    }

    #[test]
    fn test_invalid_lengths() {
        for hex in ["#12", "#12345", "#1234567", "#123456789", "#"] {
            assert!(Rgb::from_hex(hex).is_err(), "{} should fail", hex);
        }
    }

    #[test]
    fn test_invalid_digits() {
        for hex in ["#GGGGGG", "#FF00G0", "#F0G", "#gggggg"] {
            assert!(Rgb::from_hex(hex).is_err(), "{} should fail", hex);
        }
    }

    #[test]
    fn test_missing_prefix() {
        assert!(Rgb::from_hex("FFFFFF").is_err());
        assert!(Rgb::from_hex("FFF").is_err());
    }

    #[test]
    fn test_error_carries_input() {
        let err = Rgb::from_hex("#zz").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidHexColor {
                input: "#zz".to_string()
            }
        );
    }
}
