use alloc::vec::Vec;

use enough::Stop;

use crate::error::BmpError;
use crate::pixel::{BYTES_PER_PIXEL, RowOrder, nominal_len};

/// A 32-bit BGRA image: 4 bytes per pixel (B, G, R, A), rows stored in
/// [`RowOrder`].
///
/// Immutable once built. Images from [`Bmp32Image::new`] always hold exactly
/// `width * height * 4` bytes. Decoded images hold whatever the file carried
/// after its payload offset under [`crate::PayloadMode::Remainder`], so their
/// buffer can be longer (or shorter) than that.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bmp32Image {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    row_order: RowOrder,
}

impl Bmp32Image {
    /// Build an image from caller-supplied BGRA bytes.
    ///
    /// Rejects zero dimensions and any buffer that is not exactly
    /// `width * height * 4` bytes. Channel contents are not inspected.
    pub fn new(
        width: u32,
        height: u32,
        pixels: Vec<u8>,
        row_order: RowOrder,
    ) -> Result<Self, BmpError> {
        if width == 0 || height == 0 {
            return Err(BmpError::InvalidDimensions { width, height });
        }
        let expected = nominal_len(width, height)?;
        if pixels.len() != expected {
            return Err(BmpError::PixelDataLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self::from_parts(width, height, pixels, row_order))
    }

    /// Assemble without the length check (decode path).
    pub(crate) fn from_parts(
        width: u32,
        height: u32,
        pixels: Vec<u8>,
        row_order: RowOrder,
    ) -> Self {
        Self {
            width,
            height,
            pixels,
            row_order,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw BGRA bytes in stored row order.
    pub fn pixel_data(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel buffer.
    pub fn into_pixel_data(self) -> Vec<u8> {
        self.pixels
    }

    pub fn row_order(&self) -> RowOrder {
        self.row_order
    }

    /// Whether the first stored row is the top of the image.
    pub fn top_down(&self) -> bool {
        self.row_order.is_top_down()
    }

    /// Complete stored rows of `width * 4` bytes, in stored order. Bytes past
    /// the last full row of the nominal size are not yielded.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[u8]> + ExactSizeIterator + '_ {
        let row_bytes = (self.width as usize).saturating_mul(BYTES_PER_PIXEL);
        let rows = (self.pixels.len() / row_bytes).min(self.height as usize);
        self.pixels[..rows * row_bytes].chunks_exact(row_bytes)
    }

    /// Same image with rows stored top-down, trimmed to `width * height * 4`
    /// bytes.
    ///
    /// Fails with [`BmpError::PixelDataLength`] when the buffer is shorter
    /// than the nominal size (only possible for decoded images).
    pub fn to_top_down(&self) -> Result<Self, BmpError> {
        let expected = nominal_len(self.width, self.height)?;
        if self.pixels.len() < expected {
            return Err(BmpError::PixelDataLength {
                expected,
                actual: self.pixels.len(),
            });
        }
        let pixels = match self.row_order {
            RowOrder::TopDown => self.pixels[..expected].to_vec(),
            RowOrder::BottomUp => {
                let mut out = Vec::with_capacity(expected);
                for row in self.rows().rev() {
                    out.extend_from_slice(row);
                }
                out
            }
        };
        Ok(Self::from_parts(
            self.width,
            self.height,
            pixels,
            RowOrder::TopDown,
        ))
    }

    /// Encode as a BI_BITFIELDS BMP with a 56-byte info header.
    ///
    /// The whole pixel buffer is written after the headers; the row order is
    /// carried by the sign of the height field.
    pub fn encode(&self, stop: impl Stop) -> Result<Vec<u8>, BmpError> {
        crate::bmp::encode::encode_bmp32(self, &stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use enough::Unstoppable;

    #[test]
    fn new_validates_shape() {
        assert!(matches!(
            Bmp32Image::new(0, 10, vec![], RowOrder::BottomUp),
            Err(BmpError::InvalidDimensions { .. })
        ));
        assert!(Bmp32Image::new(10, 0, vec![], RowOrder::BottomUp).is_err());
        assert!(matches!(
            Bmp32Image::new(10, 10, vec![0; 399], RowOrder::BottomUp),
            Err(BmpError::PixelDataLength {
                expected: 400,
                actual: 399
            })
        ));
        assert!(Bmp32Image::new(10, 10, vec![0; 401], RowOrder::BottomUp).is_err());
        let img = Bmp32Image::new(10, 10, vec![7; 400], RowOrder::TopDown).unwrap();
        assert_eq!(img.width(), 10);
        assert_eq!(img.height(), 10);
        assert!(img.top_down());
        assert_eq!(img.pixel_data().len(), 400);
    }

    #[test]
    fn rows_follow_storage() {
        let img = Bmp32Image::new(1, 3, vec![0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2], RowOrder::BottomUp)
            .unwrap();
        let rows: Vec<&[u8]> = img.rows().collect();
        assert_eq!(rows, [&[0u8; 4][..], &[1u8; 4][..], &[2u8; 4][..]]);
    }

    #[test]
    fn rows_skip_trailing_bytes() {
        let img = Bmp32Image::from_parts(1, 2, vec![1; 11], RowOrder::TopDown);
        assert_eq!(img.rows().len(), 2);
        let short = Bmp32Image::from_parts(1, 2, vec![1; 6], RowOrder::TopDown);
        assert_eq!(short.rows().len(), 1);
    }

    #[test]
    fn to_top_down_flips_bottom_up() {
        let img = Bmp32Image::new(2, 2, (0..16).collect(), RowOrder::BottomUp).unwrap();
        let flipped = img.to_top_down().unwrap();
        assert!(flipped.top_down());
        assert_eq!(
            flipped.pixel_data(),
            &[8, 9, 10, 11, 12, 13, 14, 15, 0, 1, 2, 3, 4, 5, 6, 7]
        );
        // already top-down: unchanged
        assert_eq!(flipped.to_top_down().unwrap(), flipped);
    }

    #[test]
    fn to_top_down_trims_and_rejects_short() {
        let padded = Bmp32Image::from_parts(1, 1, vec![1, 2, 3, 4, 9, 9], RowOrder::TopDown);
        assert_eq!(padded.to_top_down().unwrap().pixel_data(), &[1, 2, 3, 4]);
        let short = Bmp32Image::from_parts(2, 1, vec![1, 2, 3, 4], RowOrder::TopDown);
        assert!(matches!(
            short.to_top_down(),
            Err(BmpError::PixelDataLength { .. })
        ));
    }

    #[test]
    fn encode_is_header_plus_pixels() {
        let img = Bmp32Image::new(1, 1, vec![1, 2, 3, 4], RowOrder::default()).unwrap();
        let bytes = img.encode(Unstoppable).unwrap();
        assert_eq!(bytes.len(), 74);
        assert_eq!(&bytes[70..], &[1, 2, 3, 4]);
    }
}
