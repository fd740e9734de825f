//! BMP encoder: 32-bit BGRA with a BITMAPV3INFOHEADER.

use alloc::vec::Vec;

use enough::Stop;

use super::{FILE_HEADER_SIZE, FileHeader, INFO_HEADER_V3_SIZE, InfoHeader};
use crate::error::BmpError;
use crate::image::Bmp32Image;
use crate::pixel::BYTES_PER_PIXEL;

/// Serialize `image`: file header, info header, then the pixel buffer as-is.
pub(crate) fn encode_bmp32(image: &Bmp32Image, stop: &dyn Stop) -> Result<Vec<u8>, BmpError> {
    let too_large = || BmpError::DimensionsTooLarge {
        width: image.width(),
        height: image.height(),
    };
    let width = i32::try_from(image.width()).map_err(|_| too_large())?;
    let height = i32::try_from(image.height()).map_err(|_| too_large())?;

    let pixels = image.pixel_data();
    let info = InfoHeader::new(width, image.row_order().signed_height(height))?;
    let file = FileHeader::for_payload(pixels.len())?;

    let mut out = Vec::with_capacity(file.file_size() as usize);
    out.extend_from_slice(&file.to_bytes());
    out.extend_from_slice(&info.to_bytes());

    stop.check()?;

    let row_bytes = (image.width() as usize).saturating_mul(BYTES_PER_PIXEL);
    for (row_idx, row) in pixels.chunks(row_bytes.max(1)).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(row);
    }

    log::debug!(
        "encoded {}x{} BMP: {} header bytes + {} pixel bytes",
        image.width(),
        image.height(),
        FILE_HEADER_SIZE + INFO_HEADER_V3_SIZE,
        pixels.len()
    );
    Ok(out)
}
