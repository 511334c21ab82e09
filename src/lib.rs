//! # monopng
//!
//! A tiny encoder that turns a single color into a complete, valid
//! 1×1-pixel PNG image, returned as a `data:image/png;base64,...` URL.
//!
//! The whole pipeline is hand-implemented: CRC32 and Adler-32 checksums,
//! PNG chunk framing, and a zlib "stored block" wrapper around the one
//! scanline of pixel data. No compression library is involved — a 1×1
//! image has nothing to compress.
//!
//! ## Example
//!
//! ```rust
//! use monopng::{data_url, Rgb};
//!
//! let url = data_url("#ff0000").unwrap();
//! assert!(url.starts_with("data:image/png;base64,"));
//!
//! // Or skip hex parsing and encode raw PNG bytes directly.
//! let bytes = monopng::encode(Rgb { r: 255, g: 0, b: 0 });
//! assert_eq!(&bytes[0..4], &[0x89, b'P', b'N', b'G']);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod color;
pub mod compress;
pub mod error;
pub mod png;

pub use color::Rgb;
pub use error::{Error, Result};
pub use png::{data_url, encode};
