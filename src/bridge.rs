//! Typed BGRA pixel views (`rgb` feature) and `imgref` buffers (`imgref`
//! feature), the adapter for host code that passes pixels around as 2D
//! buffers.
//!
//! Bytes pass through unchanged, so alpha stays straight (unpremultiplied)
//! unless the caller stored premultiplied values.

use alloc::vec::Vec;

use rgb::alt::BGRA8;

use crate::error::BmpError;
use crate::image::Bmp32Image;
use crate::pixel::{BYTES_PER_PIXEL, RowOrder};

fn push_pixels(out: &mut Vec<u8>, pixels: &[BGRA8]) {
    for px in pixels {
        out.extend_from_slice(&[px.b, px.g, px.r, px.a]);
    }
}

impl Bmp32Image {
    /// Pixels as typed BGRA values in stored row order. Only full rows of
    /// the nominal size are included.
    pub fn to_bgra_pixels(&self) -> Vec<BGRA8> {
        self.rows()
            .flat_map(|row| row.chunks_exact(BYTES_PER_PIXEL))
            .map(|px| BGRA8 {
                b: px[0],
                g: px[1],
                r: px[2],
                a: px[3],
            })
            .collect()
    }

    /// Build from typed BGRA pixels; same validation as [`Bmp32Image::new`].
    pub fn from_bgra_pixels(
        width: u32,
        height: u32,
        pixels: &[BGRA8],
        row_order: RowOrder,
    ) -> Result<Self, BmpError> {
        let mut bytes = Vec::with_capacity(pixels.len().saturating_mul(BYTES_PER_PIXEL));
        push_pixels(&mut bytes, pixels);
        Self::new(width, height, bytes, row_order)
    }

    /// Copy a top-down 2D buffer (stride is honoured) into a top-down image.
    #[cfg(feature = "imgref")]
    pub fn from_imgref(img: imgref::ImgRef<'_, BGRA8>) -> Result<Self, BmpError> {
        let too_large = || BmpError::DimensionsTooLarge {
            width: u32::try_from(img.width()).unwrap_or(u32::MAX),
            height: u32::try_from(img.height()).unwrap_or(u32::MAX),
        };
        let width = u32::try_from(img.width()).map_err(|_| too_large())?;
        let height = u32::try_from(img.height()).map_err(|_| too_large())?;

        let mut bytes = Vec::with_capacity(crate::pixel::nominal_len(width, height)?);
        for row in img.rows() {
            push_pixels(&mut bytes, row);
        }
        Self::new(width, height, bytes, RowOrder::TopDown)
    }

    /// Top-down 2D buffer of the image, flipping bottom-up rows.
    ///
    /// Fails like [`Bmp32Image::to_top_down`] when a decoded buffer is
    /// shorter than `width * height * 4`.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> Result<imgref::ImgVec<BGRA8>, BmpError> {
        let top_down = self.to_top_down()?;
        Ok(imgref::ImgVec::new(
            top_down.to_bgra_pixels(),
            self.width() as usize,
            self.height() as usize,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn px(b: u8, g: u8, r: u8, a: u8) -> BGRA8 {
        BGRA8 { b, g, r, a }
    }

    #[test]
    fn typed_pixels_keep_byte_order() {
        let img = Bmp32Image::new(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8], RowOrder::TopDown).unwrap();
        assert_eq!(img.to_bgra_pixels(), vec![px(1, 2, 3, 4), px(5, 6, 7, 8)]);

        let back =
            Bmp32Image::from_bgra_pixels(2, 1, &img.to_bgra_pixels(), RowOrder::TopDown).unwrap();
        assert_eq!(back, img);
    }

    #[test]
    fn typed_pixels_validate_count() {
        assert!(Bmp32Image::from_bgra_pixels(2, 2, &[px(0, 0, 0, 0)], RowOrder::TopDown).is_err());
    }

    #[cfg(feature = "imgref")]
    #[test]
    fn imgref_output_is_top_down() {
        // bottom-up: stored row 0 is the bottom
        let img = Bmp32Image::new(1, 2, vec![1, 1, 1, 1, 2, 2, 2, 2], RowOrder::BottomUp).unwrap();
        let buf = img.to_imgvec().unwrap();
        assert_eq!(buf.width(), 1);
        assert_eq!(buf.height(), 2);
        assert_eq!(buf.buf(), &vec![px(2, 2, 2, 2), px(1, 1, 1, 1)]);

        let back = Bmp32Image::from_imgref(buf.as_ref()).unwrap();
        assert!(back.top_down());
        assert_eq!(back.pixel_data(), &[2, 2, 2, 2, 1, 1, 1, 1]);
    }

    #[cfg(feature = "imgref")]
    #[test]
    fn imgref_stride_is_honoured() {
        // 1x2 image in a buffer with stride 2; the second column is padding
        let data = vec![px(1, 1, 1, 1), px(9, 9, 9, 9), px(2, 2, 2, 2), px(9, 9, 9, 9)];
        let img = imgref::ImgRef::new_stride(&data[..], 1, 2, 2);
        let out = Bmp32Image::from_imgref(img).unwrap();
        assert_eq!(out.pixel_data(), &[1, 1, 1, 1, 2, 2, 2, 2]);
    }
}
