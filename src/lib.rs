//! # zenbmp32
//!
//! Decoder and encoder for 32-bit BGRA BMP files with an alpha channel.
//!
//! ## Supported Formats
//!
//! - **Decode**: 32 bits per pixel, `BI_RGB` or `BI_BITFIELDS` with the
//!   canonical BGRA masks (`00FF0000`/`0000FF00`/`000000FF`/`FF000000`),
//!   any info header of 40 bytes or more, top-down or bottom-up rows.
//! - **Encode**: always `BI_BITFIELDS` with a 56-byte BITMAPV3INFOHEADER.
//!
//! Everything else (palettes, RLE, 16/24-bit, other masks) is rejected, never
//! reinterpreted.
//!
//! ## Non-Goals
//!
//! - Other BMP bit depths and compressions
//! - Image manipulation (scaling, compositing)
//! - Streaming decode
//! - File I/O
//!
//! ## Pixel Data
//!
//! Pixels are kept exactly as stored: B, G, R, A bytes, rows in the file's
//! order ([`RowOrder`]). Decoding copies the payload into an owned buffer;
//! nothing borrows from the input after [`decode`] returns. By default the
//! whole remainder of the input after the payload offset becomes the pixel
//! buffer ([`PayloadMode::Remainder`]); use [`PayloadMode::Exact`] to trim it
//! to `width * height * 4`.
//!
//! ## Usage
//!
//! ```no_run
//! use zenbmp32::{Bmp32Image, ImageInfo, RowOrder};
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! // Probe without copying pixels
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} {:?}", info.width, info.height, info.row_order);
//!
//! // Decode
//! let image = zenbmp32::decode(data, Unstoppable)?;
//!
//! // Build and encode
//! let pixels = vec![0, 0, 255, 255]; // one opaque red pixel (BGRA)
//! let red = Bmp32Image::new(1, 1, pixels, RowOrder::TopDown)?;
//! let bytes = red.encode(Unstoppable)?;
//! # Ok::<(), zenbmp32::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod image;
mod info;
mod limits;
mod pixel;

pub mod bmp;

#[cfg(feature = "rgb")]
mod bridge;

mod decode;

// Re-exports
pub use decode::{DecodeRequest, PayloadMode};
pub use enough::{Stop, Unstoppable};
pub use error::BmpError;
pub use image::Bmp32Image;
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::{BYTES_PER_PIXEL, RowOrder};

/// Decode a 32-bit BMP with default settings.
///
/// Fails on the first header check that does not hold; see [`BmpError`].
pub fn decode(data: &[u8], stop: impl Stop) -> Result<Bmp32Image, BmpError> {
    DecodeRequest::new(data).decode(stop)
}
